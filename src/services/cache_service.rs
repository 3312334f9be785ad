use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::SharedStore;

/// Key substrings that mark an entry as cache, checked in this order.
pub const ANALYSIS_PATTERN: &str = "analysis";
pub const IMAGE_PATTERN: &str = "image";
pub const STATS_PATTERN: &str = "stats";

const CACHE_PATTERNS: [&str; 3] = [ANALYSIS_PATTERN, IMAGE_PATTERN, STATS_PATTERN];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub total_bytes: u64,
    pub analysis_bytes: u64,
    pub image_bytes: u64,
    pub stats_bytes: u64,
    pub other_bytes: u64,
    pub entry_count: usize,
}

#[derive(Clone)]
pub struct CacheService {
    store: SharedStore,
}

impl CacheService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn stats(&self) -> Result<CacheStats> {
        let mut stats = CacheStats::default();
        for (key, value) in self.store.entries()? {
            let size = entry_size(&key, &value);
            stats.total_bytes += size;
            stats.entry_count += 1;
            if key.contains(ANALYSIS_PATTERN) {
                stats.analysis_bytes += size;
            } else if key.contains(IMAGE_PATTERN) {
                stats.image_bytes += size;
            } else if key.contains(STATS_PATTERN) {
                stats.stats_bytes += size;
            } else {
                stats.other_bytes += size;
            }
        }
        Ok(stats)
    }

    pub fn clear_matching(&self, pattern: &str) -> Result<usize> {
        if pattern.is_empty() {
            return Err(Error::InvalidArgument(
                "Cache pattern must not be empty".to_string(),
            ));
        }
        self.remove_where(|key| key.contains(pattern))
    }

    /// Removes every cached analysis, image and stats entry. Preferences,
    /// session and quiz progress are kept.
    pub fn clear_cache(&self) -> Result<usize> {
        self.remove_where(|key| CACHE_PATTERNS.iter().any(|p| key.contains(p)))
    }

    fn remove_where(&self, matches: impl Fn(&str) -> bool) -> Result<usize> {
        let mut removed = 0;
        for (key, _) in self.store.entries()? {
            if matches(&key) && self.store.remove(&key)? {
                removed += 1;
            }
        }
        tracing::info!(removed, "Cleared cache entries");
        Ok(removed)
    }
}

fn entry_size(key: &str, value: &str) -> u64 {
    (key.len() + value.len()) as u64
}
