//! On-disk cache of provider responses.
//!
//! One JSON file maps a key (kind, place and units) to the response and
//! the time it was stored. Entries older than the TTL are ignored on read
//! and dropped on the next write.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, warn};

use crate::config::project_dirs;

pub const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    /// Epoch seconds.
    stored_at: i64,
    data: serde_json::Value,
}

type Entries = BTreeMap<String, CacheEntry>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub total: usize,
    pub valid: usize,
    pub expired: usize,
}

#[derive(Debug, Clone)]
pub struct ResponseCache {
    path: PathBuf,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
        }
    }

    /// Cache in the platform cache directory with the default TTL.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::cache_file_path()?, CACHE_TTL))
    }

    pub fn cache_file_path() -> Result<PathBuf> {
        Ok(project_dirs()?.cache_dir().join("responses.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_fresh(&self, entry: &CacheEntry, now: i64) -> bool {
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        now.saturating_sub(entry.stored_at) < ttl
    }

    /// Read every entry. A missing or unreadable file is an empty cache.
    fn load(&self) -> Entries {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Entries::new(),
        };

        serde_json::from_str(&contents).unwrap_or_else(|err| {
            warn!(path = %self.path.display(), error = %err, "ignoring corrupt cache file");
            Entries::new()
        })
    }

    fn save(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create cache directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(entries).context("Failed to serialize cache")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write cache file: {}", self.path.display()))
    }

    /// The value stored under `key`, if it is still fresh at `now`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, now: i64) -> Option<T> {
        let mut entries = self.load();
        let entry = entries.remove(key).filter(|e| self.is_fresh(e, now))?;

        match serde_json::from_value(entry.data) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(key, error = %err, "cache entry has an unexpected shape");
                None
            }
        }
    }

    /// Store `value` under `key`, dropping expired entries on the way.
    pub fn put<T: Serialize>(&self, key: &str, value: &T, now: i64) -> Result<()> {
        let mut entries = self.load();
        entries.retain(|_, e| self.is_fresh(e, now));

        let data = serde_json::to_value(value).context("Failed to serialize cache entry")?;
        entries.insert(
            key.to_string(),
            CacheEntry {
                stored_at: now,
                data,
            },
        );
        self.save(&entries)
    }

    /// Remove expired entries and return how many went.
    pub fn clean(&self, now: i64) -> Result<usize> {
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|_, e| self.is_fresh(e, now));

        let removed = before - entries.len();
        if removed > 0 {
            self.save(&entries)?;
        }
        Ok(removed)
    }

    pub fn stats(&self, now: i64) -> CacheStats {
        let entries = self.load();
        let valid = entries.values().filter(|e| self.is_fresh(e, now)).count();

        CacheStats {
            total: entries.len(),
            valid,
            expired: entries.len() - valid,
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.save(&Entries::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn cache(dir: &tempfile::TempDir) -> ResponseCache {
        ResponseCache::new(dir.path().join("nested").join("responses.json"), CACHE_TTL)
    }

    #[test]
    fn missing_file_is_an_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache(&dir);
        assert_eq!(cache.get::<String>("current:oslo-auto", NOW), None);
        assert_eq!(cache.stats(NOW), CacheStats::default());
    }

    #[test]
    fn stored_value_is_returned_until_it_expires() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache(&dir);
        cache.put("k", &vec![1, 2, 3], NOW).unwrap();

        assert_eq!(cache.get::<Vec<i32>>("k", NOW + 60), Some(vec![1, 2, 3]));
        assert_eq!(cache.get::<Vec<i32>>("k", NOW + 30 * 60 - 1), Some(vec![1, 2, 3]));
        assert_eq!(cache.get::<Vec<i32>>("k", NOW + 30 * 60), None);
    }

    #[test]
    fn keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache(&dir);
        cache.put("current:oslo-metric", &"metric", NOW).unwrap();
        cache.put("current:oslo-imperial", &"imperial", NOW).unwrap();

        assert_eq!(
            cache.get::<String>("current:oslo-metric", NOW).as_deref(),
            Some("metric")
        );
        assert_eq!(
            cache.get::<String>("current:oslo-imperial", NOW).as_deref(),
            Some("imperial")
        );
    }

    #[test]
    fn stats_clean_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let cache = cache(&dir);
        cache.put("old", &1, NOW - 3_600).unwrap();
        cache.put("new", &2, NOW).unwrap();

        // Writing at NOW pruned the hour-old entry.
        assert_eq!(
            cache.stats(NOW),
            CacheStats {
                total: 1,
                valid: 1,
                expired: 0
            }
        );

        cache.put("later", &3, NOW + 20 * 60).unwrap();
        let stats = cache.stats(NOW + 40 * 60);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.expired, 1);

        assert_eq!(cache.clean(NOW + 40 * 60).unwrap(), 1);
        assert_eq!(cache.clean(NOW + 40 * 60).unwrap(), 0);
        assert_eq!(cache.get::<i32>("later", NOW + 40 * 60), Some(3));

        cache.clear().unwrap();
        assert_eq!(cache.stats(NOW).total, 0);
    }

    #[test]
    fn corrupt_file_is_ignored_and_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.json");
        fs::write(&path, "{ not json").unwrap();

        let cache = ResponseCache::new(&path, CACHE_TTL);
        assert_eq!(cache.get::<i32>("k", NOW), None);
        cache.put("k", &7, NOW).unwrap();
        assert_eq!(cache.get::<i32>("k", NOW), Some(7));
    }
}
