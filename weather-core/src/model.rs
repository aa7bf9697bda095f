use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    daylight::is_daytime,
    error::FetchError,
    location::{expand_location, parse_coordinates},
    scene::Scene,
    selector::get_scene,
    units::{Units, UnitsPreference},
};

const MAX_ADDRESS_LEN: usize = 100;
const UNSAFE_CHARS: &[char] = &['<', '>', '\'', '"', '{', '}', '|', '\\', '^', '`'];

/// Where to look up the weather.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Address(String),
    Coords { lat: f64, lon: f64 },
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Address(address) => f.write_str(address),
            Query::Coords { lat, lon } => write!(f, "{lat:.4},{lon:.4}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRequest {
    pub query: Query,
    pub units: UnitsPreference,
}

impl WeatherRequest {
    /// Clean up a user-supplied address.
    ///
    /// Strips characters that have no business in a place name, trims, and
    /// caps the length. An address that ends up empty is rejected. A
    /// `lat,lon` pair becomes a coordinate query; anything else goes
    /// through [`expand_location`].
    pub fn new(address: &str) -> Result<Self, FetchError> {
        let cleaned: String = address.chars().filter(|c| !UNSAFE_CHARS.contains(c)).collect();
        let address: String = cleaned.trim().chars().take(MAX_ADDRESS_LEN).collect();

        if address.is_empty() {
            return Err(FetchError::InvalidInput("location cannot be empty".into()));
        }

        if let Some((lat, lon)) = parse_coordinates(&address) {
            return Self::coords(lat, lon);
        }

        Ok(Self {
            query: Query::Address(expand_location(&address)),
            units: UnitsPreference::default(),
        })
    }

    pub fn coords(lat: f64, lon: f64) -> Result<Self, FetchError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(FetchError::InvalidInput(format!(
                "coordinates out of range: {lat},{lon}"
            )));
        }

        Ok(Self {
            query: Query::Coords { lat, lon },
            units: UnitsPreference::default(),
        })
    }

    pub fn with_units(mut self, units: UnitsPreference) -> Self {
        self.units = units;
        self
    }

    /// Cache key for a `kind` of response ("current", "forecast").
    pub fn cache_key(&self, kind: &str) -> String {
        format!(
            "{kind}:{}-{}",
            self.query.to_string().to_lowercase(),
            self.units
        )
    }
}

/// Current conditions at one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub provider: String,
    pub location_name: String,
    pub country: Option<String>,
    /// OpenWeather condition id, e.g. 500 for light rain.
    pub condition_code: u16,
    /// Condition group, e.g. "Rain".
    pub condition: String,
    pub description: String,
    pub units: Units,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    /// Epoch seconds.
    pub observed_at: i64,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

impl Observation {
    pub fn is_daytime(&self) -> bool {
        is_daytime(self.observed_at, self.sunrise, self.sunset)
    }

    pub fn scene(&self) -> &'static Scene {
        get_scene(self.condition_code, self.is_daytime())
    }

    pub fn observed_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.observed_at, 0)
    }

    /// Re-express temperatures and wind speed in `units`.
    pub fn converted_to(mut self, units: Units) -> Self {
        let from = self.units;
        self.temperature = from.convert_temperature(self.temperature, units);
        self.feels_like = from.convert_temperature(self.feels_like, units);
        self.wind_speed = from.convert_speed(self.wind_speed, units);
        self.units = units;
        self
    }
}
