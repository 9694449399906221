//! # kuobo-search
//!
//! Web search and podcast-archive search for the Kuobo chat functions.
//!
//! ## Design
//!
//! - [`BingClient`] calls the Bing Web Search API and trims the response to
//!   `{description, url}` hits
//! - [`PodcastRanker`] downloads the podcast feed, extracts show notes from
//!   each entry's HTML summary, segments Chinese text into words and ranks
//!   entries by token-set similarity to the query
//! - Parsed feeds are kept in a bounded, time-limited cache; scores are
//!   always recomputed
//! - Every request carries a timeout; there are no retries
//!
//! ## Security
//!
//! - The API key is passed in explicitly and never logged
//! - Queries are logged only at trace level

pub mod bing;
pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod feed;
pub mod http;
pub mod podcast;
pub mod segment;
pub mod similarity;
pub mod types;

pub use bing::BingClient;
pub use cache::FeedCache;
pub use config::{BingConfig, PodcastConfig};
pub use error::{Result, SearchError};
pub use podcast::PodcastRanker;
pub use types::{FeedEntry, PodcastEntry, SearchHit};

/// Search the web once with a throwaway client.
///
/// Convenience wrapper around [`BingClient::search`] using the configured
/// market.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration, otherwise the
/// same errors as [`BingClient::search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> kuobo_search::Result<()> {
/// let config = kuobo_search::BingConfig::new("subscription-key");
/// let hits = kuobo_search::search_bing("扩博智聊", &config).await?;
/// for hit in &hits {
///     println!("{}: {}", hit.url, hit.description);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_bing(query: &str, config: &BingConfig) -> Result<Vec<SearchHit>> {
    BingClient::new(config.clone())?.search(query, None).await
}

/// Rank the configured podcast feed against `query` once.
///
/// Convenience wrapper around [`PodcastRanker::search`]. A throwaway ranker
/// has its own empty cache, so the feed is always downloaded.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration, otherwise the
/// same errors as [`PodcastRanker::search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> kuobo_search::Result<()> {
/// let config = kuobo_search::PodcastConfig::default();
/// let episodes = kuobo_search::search_podcasts("自动驾驶", &config).await?;
/// for episode in &episodes {
///     println!("{} ({}): {}", episode.title, episode.score, episode.link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_podcasts(query: &str, config: &PodcastConfig) -> Result<Vec<PodcastEntry>> {
    PodcastRanker::new(config.clone())?.search(query).await
}
