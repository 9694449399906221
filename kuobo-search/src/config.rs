//! Adapter and ranker configuration with sensible defaults.
//!
//! [`BingConfig`] controls the web search adapter (endpoint, credential,
//! market, result count). [`PodcastConfig`] controls which feed is ranked,
//! how show notes are cut, and how long a fetched feed is reused.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default web search endpoint.
pub const DEFAULT_BING_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/search";

/// Default market code sent as `mkt`.
pub const DEFAULT_MARKET: &str = "zh-CN";

/// Default podcast feed: the 扩博智聊 album.
pub const DEFAULT_FEED_URL: &str = "https://www.ximalaya.com/album/58531642.xml";

/// Paragraph that opens the closing remarks of every episode's show notes.
pub const DEFAULT_CLOSING_MARKER: &str = "说在最后";

/// Configuration for the web search adapter.
///
/// The API key is an explicit value; resolving it from the environment or a
/// secret store is the caller's job. The key is redacted from `Debug` output.
#[derive(Clone)]
pub struct BingConfig {
    /// Search endpoint URL.
    pub endpoint: String,
    /// Subscription key sent as `Ocp-Apim-Subscription-Key`.
    pub api_key: String,
    /// Market code used when the caller does not pass one.
    pub market: String,
    /// Maximum number of hits to return.
    pub top_n: usize,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl BingConfig {
    /// Create a configuration with default endpoint and limits for `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_BING_ENDPOINT.to_owned(),
            api_key: api_key.into(),
            market: DEFAULT_MARKET.to_owned(),
            top_n: 3,
            timeout_seconds: 10,
        }
    }

    /// Override the endpoint (used to point at a mock server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Validates this configuration, returning an error if any field is invalid.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.endpoint.trim().is_empty() {
            return Err(SearchError::Config("endpoint must not be empty".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(SearchError::Config("api_key must not be empty".into()));
        }
        if self.top_n == 0 {
            return Err(SearchError::Config("top_n must be greater than 0".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for BingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BingConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("market", &self.market)
            .field("top_n", &self.top_n)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Configuration for the podcast relevance ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodcastConfig {
    /// RSS or Atom feed to rank.
    pub feed_url: String,
    /// Maximum number of entries to return.
    pub max_results: usize,
    /// Paragraph text at which show notes are cut (it and everything after it
    /// are dropped).
    pub closing_marker: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// How long a fetched feed is reused, in seconds. `0` refetches on every call.
    pub cache_ttl_seconds: u64,
}

impl Default for PodcastConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_owned(),
            max_results: 3,
            closing_marker: DEFAULT_CLOSING_MARKER.to_owned(),
            timeout_seconds: 10,
            cache_ttl_seconds: 300,
        }
    }
}

impl PodcastConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.feed_url.trim().is_empty() {
            return Err(SearchError::Config("feed_url must not be empty".into()));
        }
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
