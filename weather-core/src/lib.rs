//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The weather scene engine: art assets, palettes, scene selection,
//!   rendering and frame animation
//! - Configuration handling
//! - Fetching current conditions and forecasts from OpenWeather, with
//!   unit selection, location heuristics and an on-disk response cache
//!
//! The scene engine never fails: every lookup has a fallback, and a terminal
//! that is too narrow simply gets no art.

pub mod animation;
pub mod cache;
pub mod config;
pub mod daylight;
pub mod error;
pub mod forecast;
pub mod location;
pub mod model;
pub mod palette;
pub mod provider;
pub mod render;
pub mod scene;
pub mod selector;
pub mod units;

pub use animation::{AnimationHandle, AnimationState, FrameSink, TerminalSink, animate};
pub use cache::{CacheStats, ResponseCache};
pub use config::Config;
pub use daylight::is_daytime;
pub use error::FetchError;
pub use forecast::{DaySummary, Forecast};
pub use model::{Observation, Query, WeatherRequest};
pub use palette::{Palette, PaletteName, Rgb, get_palette};
pub use provider::{WeatherProvider, provider_from_config};
pub use render::{RenderContext, render, render_to_string};
pub use scene::{Role, Scene};
pub use selector::{SceneKind, get_scene};
pub use units::{Units, UnitsPreference};
