//! Human-friendly output: the summary block, scene drawing and palette list.

use std::{io, time::Duration};

use anyhow::Context;
use chrono::{DateTime, Local};
use crossterm::style::Stylize;
use tracing::{debug, warn};
use weather_core::{
    Config, DaySummary, Forecast, Observation, PaletteName, RenderContext, Scene, TerminalSink,
    Units, animate, palette::Rgb, render::color_enabled,
};

use crate::cli::DisplayArgs;

/// Display settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    pub palette: Option<String>,
    pub animate: bool,
    pub duration: Option<Duration>,
    pub frame_delay: Duration,
    pub color: bool,
}

impl DisplayOptions {
    pub fn resolve(args: &DisplayArgs, config: &Config) -> Self {
        let palette = args.palette.clone().or_else(|| config.palette.clone());
        if let Some(name) = palette.as_deref().filter(|n| n.parse::<PaletteName>().is_err()) {
            warn!(palette = name, "unknown palette, using day");
        }

        Self {
            palette,
            animate: args.animate || config.animate,
            duration: args.duration.map(Duration::from_secs),
            frame_delay: args
                .frame_delay
                .map(|ms| Duration::from_millis(ms.max(1)))
                .unwrap_or_else(|| config.frame_delay()),
            color: !args.no_color && color_enabled(),
        }
    }
}

/// Draw `scene` once, or animate it until the duration elapses or Ctrl-C.
pub async fn show_scene(scene: &'static Scene, opts: &DisplayOptions) -> anyhow::Result<()> {
    let ctx = RenderContext::detect(opts.palette.as_deref()).with_color(opts.color);
    debug!(scene = scene.name, width = ctx.width, palette = %ctx.palette.name, "drawing scene");

    if !opts.animate {
        weather_core::render(scene, &ctx, &mut io::stdout().lock())
            .context("Failed to write scene to stdout")?;
        return Ok(());
    }

    let mut handle = animate(scene, ctx, opts.frame_delay, TerminalSink::stdout(), || {
        debug!("animation finished")
    });

    if handle.is_running() {
        match opts.duration {
            Some(duration) => {
                tokio::select! {
                    _ = tokio::time::sleep(duration) => {}
                    res = tokio::signal::ctrl_c() => res.context("Failed to listen for Ctrl-C")?,
                }
            }
            None => tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for Ctrl-C")?,
        }
    }

    handle.stop();
    Ok(())
}

pub fn print_summary(obs: &Observation, color: bool) {
    print_lines(&summary_lines(obs), color);
}

pub fn print_forecast(forecast: &Forecast, color: bool) {
    let days = forecast.daily();
    let mut lines = vec![format!(
        "{}: next {} days",
        place(&forecast.location_name, forecast.country.as_deref()),
        days.len()
    )];
    lines.extend(days.iter().map(|day| day_line(day, forecast.units)));
    print_lines(&lines, color);
}

fn print_lines(lines: &[String], color: bool) {
    for line in lines {
        if color {
            println!("{}", line.as_str().cyan());
        } else {
            println!("{line}");
        }
    }
    println!();
}

fn place(name: &str, country: Option<&str>) -> String {
    match country {
        Some(country) => format!("{name}, {country}"),
        None => name.to_string(),
    }
}

fn day_line(day: &DaySummary, units: Units) -> String {
    let deg = units.temperature_symbol();
    format!(
        "{}  {:>4.0}{deg} (min {:.0}{deg} / max {:.0}{deg})  {}",
        day.date.format("%a %b %e"),
        day.average,
        day.min,
        day.max,
        day.description
    )
}

fn summary_lines(obs: &Observation) -> Vec<String> {
    let deg = obs.units.temperature_symbol();
    let mut lines = vec![
        format!(
            "{}: {} ({})",
            place(&obs.location_name, obs.country.as_deref()),
            obs.condition,
            obs.description
        ),
        format!(
            "{:.0}{deg}, feels like {:.0}{deg} | humidity {}% | wind {:.1} {}",
            obs.temperature,
            obs.feels_like,
            obs.humidity_pct,
            obs.wind_speed,
            obs.units.speed_symbol()
        ),
    ];

    if let (Some(rise), Some(set)) = (obs.sunrise, obs.sunset) {
        lines.push(format!("Sunrise {} | Sunset {}", local_time(rise), local_time(set)));
    }

    if let Some(at) = obs.observed_at_utc() {
        lines.push(format!("Observed {}", at.with_timezone(&Local).format("%Y-%m-%d %H:%M")));
    }

    lines
}

fn local_time(epoch: i64) -> String {
    DateTime::from_timestamp(epoch, 0)
        .map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

pub fn print_palettes(current: PaletteName) {
    let color = color_enabled();
    for name in PaletteName::all() {
        let marker = if *name == current { "*" } else { " " };
        println!("{marker} {name}");
        for (role, rgb) in name.palette().iter() {
            println!("    {:<12} {} {}", role.as_key(), swatch(rgb, color), rgb);
        }
    }
}

fn swatch(rgb: Rgb, color: bool) -> String {
    if color {
        "██".with(rgb.into()).to_string()
    } else {
        "  ".to_string()
    }
}
