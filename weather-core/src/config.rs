use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, warn};

use crate::{palette::PaletteName, render::DEFAULT_FRAME_DELAY, units::UnitsPreference};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_location = "Lisbon, PT"
/// palette = "night"
/// animate = true
/// frame_delay_ms = 400
/// units = "auto"
/// cache = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Location used when `weather show` gets no address.
    pub default_location: Option<String>,

    /// Palette name; unknown values render with the day palette.
    pub palette: Option<String>,

    pub animate: bool,

    pub frame_delay_ms: u64,

    /// `auto` picks Fahrenheit for the handful of countries that use it.
    pub units: UnitsPreference,

    /// Reuse responses younger than 30 minutes.
    pub cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            default_location: None,
            palette: None,
            animate: false,
            frame_delay_ms: u64::try_from(DEFAULT_FRAME_DELAY.as_millis()).unwrap_or(u64::MAX),
            units: UnitsPreference::Auto,
            cache: true,
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// The stored palette, if it names a known theme.
    ///
    /// An unknown name is logged and treated as unset.
    pub fn palette_name(&self) -> Option<PaletteName> {
        let raw = self.palette.as_deref()?;
        match raw.parse() {
            Ok(name) => Some(name),
            Err(err) => {
                warn!(palette = raw, "{err:#}");
                None
            }
        }
    }

    pub fn set_palette(&mut self, name: PaletteName) {
        self.palette = Some(name.as_str().to_string());
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms.max(1))
    }
}

/// Platform directories shared by the config file and the response cache.
pub(crate) fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "weather-task", "weather-cli")
        .ok_or_else(|| anyhow!("Could not determine platform directories"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.frame_delay(), DEFAULT_FRAME_DELAY);
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config {
            api_key: Some("KEY".into()),
            default_location: Some("Oslo, NO".into()),
            animate: true,
            frame_delay_ms: 250,
            units: UnitsPreference::Metric,
            ..Config::default()
        };
        cfg.set_palette(PaletteName::Retro);
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.palette_name(), Some(PaletteName::Retro));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "palette = \"night\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.palette_name(), Some(PaletteName::Night));
        assert!(!cfg.animate);
        assert_eq!(cfg.frame_delay_ms, 500);
        assert_eq!(cfg.units, UnitsPreference::Auto);
        assert!(cfg.cache);
    }

    #[test]
    fn units_accept_temperature_scale_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "units = \"fahrenheit\"\ncache = false\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.units, UnitsPreference::Imperial);
        assert!(!cfg.cache);
    }

    #[test]
    fn unknown_palette_is_ignored() {
        let cfg = Config {
            palette: Some("sepia".into()),
            ..Config::default()
        };
        assert_eq!(cfg.palette_name(), None);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "animate = \"maybe\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn zero_delay_is_clamped() {
        let cfg = Config {
            frame_delay_ms: 0,
            ..Config::default()
        };
        assert_eq!(cfg.frame_delay(), Duration::from_millis(1));
    }
}
