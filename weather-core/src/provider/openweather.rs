use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::FetchError,
    forecast::{Forecast, ForecastEntry},
    model::{Observation, Query, WeatherRequest},
    units::Units,
};

use super::WeatherProvider;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_RETRIES: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("weather-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { api_key, http })
    }

    async fn fetch_once(
        &self,
        url: &str,
        query: &Query,
        units: Units,
    ) -> Result<(StatusCode, String), FetchError> {
        let mut params = match query {
            Query::Address(address) => vec![("q", address.clone())],
            Query::Coords { lat, lon } => vec![("lat", lat.to_string()), ("lon", lon.to_string())],
        };
        params.push(("appid", self.api_key.clone()));
        params.push(("units", units.as_api().to_string()));

        let res = self.http.get(url).query(&params).send().await?;

        let status = res.status();
        let body = res.text().await?;
        Ok((status, body))
    }

    /// GET with retries on network errors, 5xx and 429.
    async fn fetch(
        &self,
        url: &str,
        query: &Query,
        units: Units,
    ) -> Result<(StatusCode, String), FetchError> {
        let mut attempt = 0;
        loop {
            let result = self.fetch_once(url, query, units).await;
            let retryable = match &result {
                Err(FetchError::Network(_)) => true,
                Ok((status, _)) => is_retryable(*status),
                Err(_) => false,
            };

            if retryable && attempt < MAX_RETRIES {
                attempt += 1;
                let delay = RETRY_BASE_DELAY * 2u32.pow(attempt - 1);
                warn!(attempt, ?delay, "OpenWeather request failed, retrying");
                tokio::time::sleep(delay).await;
                continue;
            }

            let (status, body) = result?;
            debug!(%status, url, %query, units = units.as_api(), "OpenWeather responded");
            return Ok((status, body));
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    /// With `auto` units the API is asked for metric and the result is
    /// converted once the country is known.
    async fn current(&self, request: &WeatherRequest) -> Result<Observation, FetchError> {
        let api_units = request.units.fixed().unwrap_or(Units::Metric);
        let (status, body) = self.fetch(CURRENT_URL, &request.query, api_units).await?;
        let obs = parse_current(status, &body, &request.query.to_string(), api_units)?;

        let units = request.units.resolve(obs.country.as_deref());
        Ok(obs.converted_to(units))
    }

    async fn forecast(&self, request: &WeatherRequest) -> Result<Forecast, FetchError> {
        let api_units = request.units.fixed().unwrap_or(Units::Metric);
        let (status, body) = self.fetch(FORECAST_URL, &request.query, api_units).await?;
        let forecast = parse_forecast(status, &body, &request.query.to_string(), api_units)?;

        let units = request.units.resolve(forecast.country.as_deref());
        Ok(forecast.converted_to(units))
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn check_status(status: StatusCode, body: &str, address: &str) -> Result<(), FetchError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED => Err(FetchError::ApiKeyInvalid),
        StatusCode::NOT_FOUND => Err(FetchError::LocationNotFound(address.to_string())),
        StatusCode::TOO_MANY_REQUESTS => Err(FetchError::RateLimited),
        _ => Err(FetchError::Status {
            status,
            body: truncate_body(body),
        }),
    }
}

/// Turn a `/weather` response into an [`Observation`].
fn parse_current(
    status: StatusCode,
    body: &str,
    address: &str,
    units: Units,
) -> Result<Observation, FetchError> {
    check_status(status, body, address)?;
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let (condition_code, condition, description) = parsed
        .weather
        .first()
        .map(|w| (w.id, w.main.clone(), w.description.clone()))
        // No condition reported: an out-of-table code draws the fallback scene.
        .unwrap_or((0, "Unknown".to_string(), "unknown".to_string()));

    Ok(Observation {
        provider: "openweather".to_string(),
        location_name: parsed.name,
        country: parsed.sys.country,
        condition_code,
        condition,
        description,
        units,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        humidity_pct: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        observed_at: parsed.dt,
        sunrise: parsed.sys.sunrise.filter(|&t| t > 0),
        sunset: parsed.sys.sunset.filter(|&t| t > 0),
    })
}

/// Turn a `/forecast` response into a [`Forecast`].
fn parse_forecast(
    status: StatusCode,
    body: &str,
    address: &str,
    units: Units,
) -> Result<Forecast, FetchError> {
    check_status(status, body, address)?;
    let parsed: OwForecastResponse = serde_json::from_str(body)?;

    let entries = parsed
        .list
        .into_iter()
        .map(|slot| {
            let (condition_code, description) = slot
                .weather
                .into_iter()
                .next()
                .map(|w| (w.id, w.description))
                .unwrap_or((0, "unknown".to_string()));
            ForecastEntry {
                at: slot.dt,
                condition_code,
                description,
                temperature: slot.main.temp,
            }
        })
        .collect();

    Ok(Forecast {
        provider: "openweather".to_string(),
        location_name: parsed.city.name,
        country: parsed.city.country,
        utc_offset_secs: parsed.city.timezone,
        units,
        entries,
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u16,
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    country: Option<String>,
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwForecastSlot {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastSlot>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISBON: &str = r#"{
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 22.4, "feels_like": 21.9, "humidity": 55, "pressure": 1017},
        "wind": {"speed": 4.1, "deg": 330},
        "dt": 1700040000,
        "sys": {"country": "PT", "sunrise": 1700030000, "sunset": 1700066000},
        "name": "Lisbon"
    }"#;

    #[test]
    fn parses_current_weather() {
        let obs = parse_current(StatusCode::OK, LISBON, "Lisbon", Units::Metric).unwrap();
        assert_eq!(obs.location_name, "Lisbon");
        assert_eq!(obs.country.as_deref(), Some("PT"));
        assert_eq!(obs.condition_code, 800);
        assert_eq!(obs.condition, "Clear");
        assert_eq!(obs.humidity_pct, 55);
        assert_eq!(obs.sunrise, Some(1_700_030_000));
        assert!(obs.is_daytime());
        assert_eq!(obs.scene().name, "clear-day");
    }

    #[test]
    fn missing_sys_block_means_no_sun_times() {
        let body = r#"{
            "weather": [{"id": 511, "main": "Rain", "description": "freezing rain"}],
            "main": {"temp": -1.0, "feels_like": -4.0, "humidity": 90},
            "wind": {"speed": 2.0},
            "dt": 1700000000,
            "name": "Nowhere"
        }"#;
        let obs = parse_current(StatusCode::OK, body, "Nowhere", Units::Metric).unwrap();
        assert_eq!(obs.sunrise, None);
        assert_eq!(obs.sunset, None);
        assert!(obs.is_daytime());
        assert_eq!(obs.scene().name, "snow");
    }

    #[test]
    fn empty_weather_list_uses_fallback_code() {
        let body = LISBON.replace(
            r#"[{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}]"#,
            "[]",
        );
        let obs = parse_current(StatusCode::OK, &body, "Lisbon", Units::Metric).unwrap();
        assert_eq!(obs.condition_code, 0);
        assert_eq!(obs.scene().name, "cloudy");
    }

    #[test]
    fn maps_error_statuses() {
        assert!(matches!(
            parse_current(StatusCode::UNAUTHORIZED, "{}", "x", Units::Metric),
            Err(FetchError::ApiKeyInvalid)
        ));
        assert!(matches!(
            parse_current(StatusCode::NOT_FOUND, "{}", "Atlantis", Units::Metric),
            Err(FetchError::LocationNotFound(loc)) if loc == "Atlantis"
        ));
        assert!(matches!(
            parse_current(StatusCode::TOO_MANY_REQUESTS, "{}", "x", Units::Metric),
            Err(FetchError::RateLimited)
        ));
        assert!(matches!(
            parse_current(StatusCode::BAD_GATEWAY, "upstream", "x", Units::Metric),
            Err(FetchError::Status { status, .. }) if status == StatusCode::BAD_GATEWAY
        ));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = parse_current(StatusCode::OK, "not json", "x", Units::Metric).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn imperial_response_keeps_its_units() {
        let obs = parse_current(StatusCode::OK, LISBON, "Lisbon", Units::Imperial).unwrap();
        assert_eq!(obs.units, Units::Imperial);
        assert_eq!(obs.temperature, 22.4);
    }

    const OSLO_FORECAST: &str = r#"{
        "cod": "200",
        "list": [
            {"dt": 1699952400, "main": {"temp": 1.5, "feels_like": -2.0, "humidity": 80},
             "weather": [{"id": 600, "main": "Snow", "description": "light snow"}],
             "wind": {"speed": 3.0}},
            {"dt": 1699963200, "main": {"temp": 3.5, "feels_like": 0.0, "humidity": 75},
             "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds"}],
             "wind": {"speed": 2.0}},
            {"dt": 1700042400, "main": {"temp": -0.5, "feels_like": -3.0, "humidity": 85},
             "weather": [], "wind": {"speed": 1.0}}
        ],
        "city": {"name": "Oslo", "country": "NO", "timezone": 3600}
    }"#;

    #[test]
    fn parses_forecast_slots() {
        let f = parse_forecast(StatusCode::OK, OSLO_FORECAST, "Oslo", Units::Metric).unwrap();
        assert_eq!(f.location_name, "Oslo");
        assert_eq!(f.country.as_deref(), Some("NO"));
        assert_eq!(f.utc_offset_secs, 3600);
        assert_eq!(f.entries.len(), 3);
        assert_eq!(f.entries[0].condition_code, 600);
        assert_eq!(f.entries[2].condition_code, 0);

        let days = f.daily();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].average, 2.5);
        assert_eq!(days[0].description, "light snow");
    }

    #[test]
    fn forecast_errors_use_the_same_mapping() {
        assert!(matches!(
            parse_forecast(StatusCode::NOT_FOUND, "{}", "Atlantis", Units::Metric),
            Err(FetchError::LocationNotFound(loc)) if loc == "Atlantis"
        ));
    }

    #[test]
    fn retries_only_transient_statuses() {
        assert!(is_retryable(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_retryable(StatusCode::NOT_FOUND));
        assert!(!is_retryable(StatusCode::OK));
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "é".repeat(300);
        let out = truncate_body(&body);
        assert_eq!(out.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
