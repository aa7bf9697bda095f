use crate::{
    Config, Observation, WeatherRequest,
    cache::ResponseCache,
    error::FetchError,
    forecast::Forecast,
    provider::{cached::CachedProvider, openweather::OpenWeatherProvider},
};
use async_trait::async_trait;
use std::{env, fmt::Debug};
use tracing::warn;

pub mod cached;
pub mod openweather;

/// Environment variable consulted when the config file has no API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, request: &WeatherRequest) -> Result<Observation, FetchError>;

    /// Forecast in 3-hour slots for roughly the next five days.
    async fn forecast(&self, request: &WeatherRequest) -> Result<Forecast, FetchError>;
}

/// Pick the API key: the config file wins over the environment.
pub fn resolve_api_key(config: &Config, from_env: Option<String>) -> Option<String> {
    config
        .api_key
        .clone()
        .or(from_env)
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

/// Construct the OpenWeather provider using the configured API key,
/// behind the response cache unless `config.cache` is off.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, FetchError> {
    let api_key =
        resolve_api_key(config, env::var(API_KEY_ENV).ok()).ok_or(FetchError::ApiKeyMissing)?;
    let provider = OpenWeatherProvider::new(api_key)?;

    if !config.cache {
        return Ok(Box::new(provider));
    }

    match ResponseCache::open_default() {
        Ok(cache) => Ok(Box::new(CachedProvider::new(provider, cache))),
        Err(err) => {
            warn!("{err:#}, continuing without the response cache");
            Ok(Box::new(provider))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_key_wins_over_env() {
        let cfg = Config {
            api_key: Some("FROM_FILE".into()),
            ..Config::default()
        };
        let key = resolve_api_key(&cfg, Some("FROM_ENV".into()));
        assert_eq!(key.as_deref(), Some("FROM_FILE"));
    }

    #[test]
    fn env_key_used_when_config_has_none() {
        let key = resolve_api_key(&Config::default(), Some(" FROM_ENV \n".into()));
        assert_eq!(key.as_deref(), Some("FROM_ENV"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let cfg = Config {
            api_key: Some("   ".into()),
            ..Config::default()
        };
        assert_eq!(resolve_api_key(&cfg, None), None);
    }

    #[test]
    fn provider_from_config_works_with_key() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            cache: false,
            ..Config::default()
        };
        assert!(provider_from_config(&cfg).is_ok());
    }
}
