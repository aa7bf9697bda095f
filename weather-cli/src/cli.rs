use anyhow::{Context, anyhow};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use inquire::{Confirm, Password, PasswordDisplayMode, Select, Text};
use tracing::info;
use weather_core::{
    Config, FetchError, PaletteName, ResponseCache, UnitsPreference, WeatherProvider,
    WeatherRequest, get_scene, provider_from_config,
};

use crate::display::{self, DisplayOptions};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI with animated ASCII scenes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set API key, default location and display preferences.
    Configure,

    /// Show current weather for an address.
    Show {
        #[command(flatten)]
        fetch: FetchArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Show the next five days, one line per day.
    #[command(visible_alias = "5day")]
    Forecast {
        #[command(flatten)]
        fetch: FetchArgs,

        /// Disable colors (same as setting NO_COLOR).
        #[arg(long)]
        no_color: bool,
    },

    /// Preview the scene for a condition code without fetching anything.
    Scene {
        /// OpenWeather condition code, e.g. 800 for clear sky.
        code: u16,

        /// Draw the night variant where there is one.
        #[arg(long)]
        night: bool,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// List the available palettes.
    Palettes,

    /// Inspect or empty the response cache.
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Count fresh and expired entries.
    Stats,
    /// Drop expired entries.
    Clean,
    /// Drop every entry.
    Clear,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Address, "lat,lon" or shorthand like "Austin TX"; defaults to the
    /// configured location.
    pub address: Option<String>,

    /// auto, metric (celsius) or imperial (fahrenheit).
    #[arg(short, long)]
    pub units: Option<UnitsPreference>,

    /// Always ask the API, bypassing the response cache.
    #[arg(long)]
    pub no_cache: bool,

    /// Print the raw result as JSON instead of formatted output.
    #[arg(long)]
    pub json: bool,
}

impl FetchArgs {
    fn request(&self, config: &Config) -> anyhow::Result<WeatherRequest> {
        let address = self
            .address
            .clone()
            .or_else(|| config.default_location.clone())
            .ok_or_else(|| {
                anyhow!(
                    "No location given and no default location configured.\n\
                     Hint: run `weather show \"City, Country\"` or `weather configure`."
                )
            })?;

        Ok(WeatherRequest::new(&address)?.with_units(self.units.unwrap_or(config.units)))
    }

    fn provider(&self, config: &Config) -> Result<Box<dyn WeatherProvider>, FetchError> {
        let config = Config {
            cache: config.cache && !self.no_cache,
            ..config.clone()
        };
        provider_from_config(&config)
    }
}

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Palette: day, night or retro.
    #[arg(long)]
    pub palette: Option<String>,

    /// Cycle through the scene's frames.
    #[arg(long)]
    pub animate: bool,

    /// Stop animating after this many seconds (default: until Ctrl-C).
    #[arg(long, value_name = "SECS")]
    pub duration: Option<u64>,

    /// Milliseconds between frames.
    #[arg(long, value_name = "MS")]
    pub frame_delay: Option<u64>,

    /// Disable colors (same as setting NO_COLOR).
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { fetch, display } => {
                let config = Config::load()?;
                let request = fetch.request(&config)?;
                let observation = fetch
                    .provider(&config)?
                    .current(&request)
                    .await
                    .with_context(|| format!("Could not fetch weather for '{}'", request.query))?;

                if fetch.json {
                    println!("{}", serde_json::to_string_pretty(&observation)?);
                    return Ok(());
                }

                let opts = DisplayOptions::resolve(&display, &config);
                display::print_summary(&observation, opts.color);
                display::show_scene(observation.scene(), &opts).await?;
            }
            Command::Forecast { fetch, no_color } => {
                let config = Config::load()?;
                let request = fetch.request(&config)?;
                let forecast = fetch
                    .provider(&config)?
                    .forecast(&request)
                    .await
                    .with_context(|| format!("Could not fetch forecast for '{}'", request.query))?;

                if fetch.json {
                    println!("{}", serde_json::to_string_pretty(&forecast.daily())?);
                    return Ok(());
                }

                let color = !no_color && weather_core::render::color_enabled();
                display::print_forecast(&forecast, color);
            }
            Command::Scene {
                code,
                night,
                display,
            } => {
                let config = Config::load()?;
                let opts = DisplayOptions::resolve(&display, &config);
                display::show_scene(get_scene(code, !night), &opts).await?;
            }
            Command::Palettes => {
                let config = Config::load()?;
                display::print_palettes(config.palette_name().unwrap_or_default());
            }
            Command::Cache { action } => run_cache(action)?,
        }

        Ok(())
    }
}

fn run_cache(action: CacheAction) -> anyhow::Result<()> {
    let cache = ResponseCache::open_default()?;
    let now = Utc::now().timestamp();

    match action {
        CacheAction::Stats => {
            let stats = cache.stats(now);
            println!("Cache file: {}", cache.path().display());
            println!(
                "{} entries ({} fresh, {} expired)",
                stats.total, stats.valid, stats.expired
            );
        }
        CacheAction::Clean => {
            let removed = cache.clean(now)?;
            println!("Removed {removed} expired entries");
        }
        CacheAction::Clear => {
            cache.clear()?;
            info!(path = %cache.path().display(), "cache cleared");
            println!("Cache cleared");
        }
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key (leave empty to keep current):")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let location = Text::new("Default location:")
        .with_initial_value(config.default_location.as_deref().unwrap_or(""))
        .prompt()?;
    config.default_location = Some(location.trim().to_string()).filter(|l| !l.is_empty());

    let units = UnitsPreference::all().to_vec();
    let start = units.iter().position(|u| *u == config.units).unwrap_or(0);
    config.units = Select::new("Units:", units)
        .with_starting_cursor(start)
        .prompt()?;

    let current = config.palette_name().unwrap_or_default();
    let choices = PaletteName::all().to_vec();
    let start = choices.iter().position(|p| *p == current).unwrap_or(0);
    let palette = Select::new("Palette:", choices)
        .with_starting_cursor(start)
        .prompt()?;
    config.set_palette(palette);

    config.animate = Confirm::new("Animate scenes by default?")
        .with_default(config.animate)
        .prompt()?;

    config.cache = Confirm::new("Cache responses for 30 minutes?")
        .with_default(config.cache)
        .prompt()?;

    config.save()?;
    let path = Config::config_file_path()?;
    info!(path = %path.display(), "configuration saved");
    println!("Configuration saved to {}", path.display());

    Ok(())
}
