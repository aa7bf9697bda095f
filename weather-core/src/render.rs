//! Turning a scene frame into printable, centered, colored text.

use std::{
    env,
    io::{self, Write},
    time::Duration,
};

use crossterm::style::Stylize;
use tracing::debug;

use crate::{
    palette::{Palette, get_palette},
    scene::Scene,
};

/// Narrower terminals get no art at all.
pub const MIN_TERM_WIDTH: usize = 50;

/// Width assumed when the terminal cannot report one.
pub const DEFAULT_TERM_WIDTH: usize = 80;

pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(500);

/// Per-call terminal facts needed to draw a scene.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Terminal width in columns.
    pub width: usize,
    pub color: bool,
    pub palette: &'static Palette,
}

impl RenderContext {
    pub fn new(width: usize, color: bool, palette_name: Option<&str>) -> Self {
        Self {
            width,
            color,
            palette: get_palette(palette_name),
        }
    }

    /// Build a context for the current terminal.
    ///
    /// Width comes from the terminal (or [`DEFAULT_TERM_WIDTH`]), and color
    /// is on unless `NO_COLOR` is set.
    pub fn detect(palette_name: Option<&str>) -> Self {
        Self::new(terminal_width(), color_enabled(), palette_name)
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Columns of left padding that center `scene` as one block.
    pub fn left_padding(&self, scene: &Scene) -> usize {
        self.width.saturating_sub(scene.width) / 2
    }

    #[inline]
    pub fn fits(&self) -> bool {
        self.width >= MIN_TERM_WIDTH
    }
}

pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => DEFAULT_TERM_WIDTH,
    }
}

pub fn color_enabled() -> bool {
    env::var_os("NO_COLOR").is_none()
}

/// Render one frame of `scene` as newline-separated lines.
///
/// Returns an empty string when the terminal is narrower than
/// [`MIN_TERM_WIDTH`]; callers print nothing in that case.
pub fn render_to_string(scene: &Scene, frame_index: usize, ctx: &RenderContext) -> String {
    if !ctx.fits() {
        return String::new();
    }

    let padding = " ".repeat(ctx.left_padding(scene));

    scene
        .art(frame_index)
        .iter()
        .map(|line| {
            if ctx.color {
                format!("{padding}{}", colorize_line(line, scene, ctx.palette))
            } else {
                format!("{padding}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap each non-space character of `line` in the color of its role.
pub fn colorize_line(line: &str, scene: &Scene, palette: &Palette) -> String {
    let mut out = String::with_capacity(line.len() * 8);
    for ch in line.chars() {
        if ch == ' ' {
            out.push(' ');
            continue;
        }
        let color = palette.color(scene.role_for(ch));
        out.push_str(&ch.with(color.into()).to_string());
    }
    out
}

/// Print frame 0 of `scene` to `out`, or nothing if the terminal is too narrow.
pub fn render<W: Write>(scene: &Scene, ctx: &RenderContext, out: &mut W) -> io::Result<()> {
    let text = render_to_string(scene, 0, ctx);
    if text.is_empty() {
        debug!(scene = scene.name, width = ctx.width, "terminal too narrow, skipping art");
        return Ok(());
    }
    writeln!(out, "{text}")?;
    out.flush()
}

/// Remove ANSI CSI sequences (`ESC [ ... final-byte`) from `s`.
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
