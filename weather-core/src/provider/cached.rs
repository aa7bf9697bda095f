use async_trait::async_trait;
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    cache::ResponseCache,
    error::FetchError,
    forecast::Forecast,
    model::{Observation, WeatherRequest},
};

use super::WeatherProvider;

/// Serves fresh responses from a [`ResponseCache`], asking `inner` otherwise.
///
/// Cache write failures are logged and never fail the request.
#[derive(Debug)]
pub struct CachedProvider<P> {
    inner: P,
    cache: ResponseCache,
}

impl<P: WeatherProvider> CachedProvider<P> {
    pub fn new(inner: P, cache: ResponseCache) -> Self {
        Self { inner, cache }
    }

    fn lookup<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let hit = self.cache.get(key, Utc::now().timestamp());
        if hit.is_some() {
            debug!(key, "using cached response");
        }
        hit
    }

    fn store<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.cache.put(key, value, Utc::now().timestamp()) {
            warn!(key, "{err:#}");
        }
    }
}

#[async_trait]
impl<P: WeatherProvider> WeatherProvider for CachedProvider<P> {
    async fn current(&self, request: &WeatherRequest) -> Result<Observation, FetchError> {
        let key = request.cache_key("current");
        if let Some(obs) = self.lookup(&key) {
            return Ok(obs);
        }

        let obs = self.inner.current(request).await?;
        self.store(&key, &obs);
        Ok(obs)
    }

    async fn forecast(&self, request: &WeatherRequest) -> Result<Forecast, FetchError> {
        let key = request.cache_key("forecast");
        if let Some(forecast) = self.lookup(&key) {
            return Ok(forecast);
        }

        let forecast = self.inner.forecast(request).await?;
        self.store(&key, &forecast);
        Ok(forecast)
    }
}
