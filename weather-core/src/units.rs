//! Measurement systems and the regional default.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Countries that report temperatures in Fahrenheit.
const FAHRENHEIT_COUNTRIES: &[&str] = &["US", "USA", "BS", "BZ", "KY", "PW"];

const MPH_PER_MPS: f64 = 2.236_936;

/// Unit system the numbers of an observation are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius and metres per second.
    #[default]
    Metric,
    /// Fahrenheit and miles per hour.
    Imperial,
}

impl Units {
    /// Value of the OpenWeather `units` query parameter.
    pub fn as_api(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temperature_symbol(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn speed_symbol(self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }

    /// Convert a temperature expressed in `self` into `to`.
    pub fn convert_temperature(self, value: f64, to: Units) -> f64 {
        match (self, to) {
            (Units::Metric, Units::Imperial) => value * 9.0 / 5.0 + 32.0,
            (Units::Imperial, Units::Metric) => (value - 32.0) * 5.0 / 9.0,
            _ => value,
        }
    }

    pub fn convert_speed(self, value: f64, to: Units) -> f64 {
        match (self, to) {
            (Units::Metric, Units::Imperial) => value * MPH_PER_MPS,
            (Units::Imperial, Units::Metric) => value / MPH_PER_MPS,
            _ => value,
        }
    }
}

/// What the user asked for: a fixed system, or whatever the place uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitsPreference {
    #[default]
    Auto,
    #[serde(alias = "celsius")]
    Metric,
    #[serde(alias = "fahrenheit")]
    Imperial,
}

impl UnitsPreference {
    pub const fn all() -> &'static [UnitsPreference] {
        &[
            UnitsPreference::Auto,
            UnitsPreference::Metric,
            UnitsPreference::Imperial,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitsPreference::Auto => "auto",
            UnitsPreference::Metric => "metric",
            UnitsPreference::Imperial => "imperial",
        }
    }

    /// The fixed system, if one was chosen.
    pub fn fixed(self) -> Option<Units> {
        match self {
            UnitsPreference::Auto => None,
            UnitsPreference::Metric => Some(Units::Metric),
            UnitsPreference::Imperial => Some(Units::Imperial),
        }
    }

    /// Units to display for a place in `country`.
    pub fn resolve(self, country: Option<&str>) -> Units {
        self.fixed().unwrap_or_else(|| regional_units(country))
    }
}

impl fmt::Display for UnitsPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitsPreference {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(UnitsPreference::Auto),
            "metric" | "celsius" => Ok(UnitsPreference::Metric),
            "imperial" | "fahrenheit" => Ok(UnitsPreference::Imperial),
            other => Err(FetchError::InvalidInput(format!(
                "unknown units '{other}' (expected auto, metric or imperial)"
            ))),
        }
    }
}

/// Units customary in `country`; metric when the country is unknown.
pub fn regional_units(country: Option<&str>) -> Units {
    match country {
        Some(code)
            if FAHRENHEIT_COUNTRIES
                .iter()
                .any(|c| c.eq_ignore_ascii_case(code.trim())) =>
        {
            Units::Imperial
        }
        _ => Units::Metric,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_countries_default_to_imperial() {
        assert_eq!(regional_units(Some("US")), Units::Imperial);
        assert_eq!(regional_units(Some("bz")), Units::Imperial);
        assert_eq!(regional_units(Some("GB")), Units::Metric);
        assert_eq!(regional_units(None), Units::Metric);
    }

    #[test]
    fn fixed_preference_overrides_region() {
        assert_eq!(UnitsPreference::Metric.resolve(Some("US")), Units::Metric);
        assert_eq!(UnitsPreference::Imperial.resolve(Some("FR")), Units::Imperial);
        assert_eq!(UnitsPreference::Auto.resolve(Some("US")), Units::Imperial);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Fahrenheit".parse::<UnitsPreference>().unwrap(), UnitsPreference::Imperial);
        assert_eq!("celsius".parse::<UnitsPreference>().unwrap(), UnitsPreference::Metric);
        for pref in UnitsPreference::all() {
            assert_eq!(pref.as_str().parse::<UnitsPreference>().unwrap(), *pref);
        }
        assert!(matches!(
            "kelvin".parse::<UnitsPreference>(),
            Err(FetchError::InvalidInput(_))
        ));
    }

    #[test]
    fn conversions() {
        assert_eq!(Units::Metric.convert_temperature(100.0, Units::Imperial), 212.0);
        assert_eq!(Units::Imperial.convert_temperature(32.0, Units::Metric), 0.0);
        assert_eq!(Units::Metric.convert_temperature(7.5, Units::Metric), 7.5);
        assert!((Units::Metric.convert_speed(10.0, Units::Imperial) - 22.369).abs() < 0.001);
    }
}
