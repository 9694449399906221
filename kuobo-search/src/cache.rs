//! Time-bounded in-memory cache of parsed podcast feeds.
//!
//! Holds the raw [`FeedEntry`] list per feed URL so repeated queries do not
//! re-download a large feed. Scores are never cached; they depend on the
//! query and are recomputed on every call. Uses [`moka`] for TTL expiry and
//! bounded capacity.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::types::FeedEntry;

/// Maximum number of cached feeds.
const MAX_CACHE_ENTRIES: u64 = 16;

/// Feed cache keyed by feed URL.
///
/// A TTL of zero disables caching: [`get`](Self::get) always misses and
/// [`insert`](Self::insert) is a no-op.
#[derive(Clone)]
pub struct FeedCache {
    inner: Option<Cache<String, Arc<Vec<FeedEntry>>>>,
}

impl FeedCache {
    /// Create a cache whose entries expire `ttl_seconds` after insertion.
    pub fn new(ttl_seconds: u64) -> Self {
        let inner = (ttl_seconds > 0).then(|| {
            Cache::builder()
                .max_capacity(MAX_CACHE_ENTRIES)
                .time_to_live(Duration::from_secs(ttl_seconds))
                .build()
        });
        Self { inner }
    }

    /// Whether this cache stores anything at all.
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Look up the cached entries for `url`.
    pub async fn get(&self, url: &str) -> Option<Arc<Vec<FeedEntry>>> {
        let cache = self.inner.as_ref()?;
        cache.get(url).await
    }

    /// Store the entries fetched from `url`.
    pub async fn insert(&self, url: &str, entries: Arc<Vec<FeedEntry>>) {
        if let Some(cache) = &self.inner {
            cache.insert(url.to_owned(), entries).await;
        }
    }

    /// Drop the cached entries for `url`.
    pub async fn invalidate(&self, url: &str) {
        if let Some(cache) = &self.inner {
            cache.invalidate(url).await;
        }
    }

    /// Drop every cached feed.
    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.inner {
            cache.invalidate_all();
        }
    }
}

impl std::fmt::Debug for FeedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedCache")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
