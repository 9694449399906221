//! Podcast relevance ranking.
//!
//! For each feed entry the show notes are extracted from the summary HTML,
//! the query, title and notes are segmented into words, and the entry is
//! scored as `title_ratio * text_ratio` using token-set similarity.

use std::sync::Arc;

use crate::cache::FeedCache;
use crate::config::PodcastConfig;
use crate::error::SearchError;
use crate::extract;
use crate::feed;
use crate::http;
use crate::segment::segment;
use crate::similarity::token_set_ratio;
use crate::types::{FeedEntry, PodcastEntry};

/// Ranks the episodes of one podcast feed against free-text queries.
#[derive(Debug, Clone)]
pub struct PodcastRanker {
    config: PodcastConfig,
    client: reqwest::Client,
    cache: FeedCache,
}

impl PodcastRanker {
    /// Create a ranker from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: PodcastConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let client = http::build_client(config.timeout_seconds)?;
        let cache = FeedCache::new(config.cache_ttl_seconds);
        Ok(Self {
            config,
            client,
            cache,
        })
    }

    /// Returns the configuration this ranker was built with.
    pub fn config(&self) -> &PodcastConfig {
        &self.config
    }

    /// Returns the feed cache, for explicit invalidation.
    pub fn cache(&self) -> &FeedCache {
        &self.cache
    }

    /// Return the best-matching episodes for `query`, highest score first.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the feed cannot be downloaded and
    /// [`SearchError::Feed`] if it cannot be parsed. No partial results are
    /// returned on failure.
    pub async fn search(&self, query: &str) -> Result<Vec<PodcastEntry>, SearchError> {
        tracing::trace!(query, "podcast search");
        let entries = self.entries().await?;
        let ranked = rank_entries(
            query,
            &entries,
            &self.config.closing_marker,
            self.config.max_results,
        );
        tracing::debug!(
            candidates = entries.len(),
            returned = ranked.len(),
            "podcast entries ranked"
        );
        Ok(ranked)
    }

    /// Feed entries from cache, or freshly downloaded.
    async fn entries(&self) -> Result<Arc<Vec<FeedEntry>>, SearchError> {
        let url = self.config.feed_url.as_str();
        if let Some(cached) = self.cache.get(url).await {
            tracing::debug!(url, count = cached.len(), "feed cache hit");
            return Ok(cached);
        }

        let entries = Arc::new(feed::fetch_feed(&self.client, url).await?);
        self.cache.insert(url, Arc::clone(&entries)).await;
        Ok(entries)
    }
}

/// Score every entry against `query`, sort by score descending and keep the
/// top `max_results`.
///
/// The sort is stable: entries with equal scores keep their feed order.
pub fn rank_entries(
    query: &str,
    entries: &[FeedEntry],
    closing_marker: &str,
    max_results: usize,
) -> Vec<PodcastEntry> {
    let segmented_query = segment(query);

    let mut scored: Vec<PodcastEntry> = entries
        .iter()
        .map(|entry| score_entry(&segmented_query, entry, closing_marker))
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(max_results);
    scored
}

/// Score one entry against an already segmented query.
fn score_entry(segmented_query: &str, entry: &FeedEntry, closing_marker: &str) -> PodcastEntry {
    let text = extract::body_text(&entry.summary, closing_marker);

    let title_ratio = token_set_ratio(segmented_query, &segment(&entry.title));
    let text_ratio = token_set_ratio(segmented_query, &segment(&text));

    PodcastEntry {
        title: entry.title.clone(),
        link: entry.link.clone(),
        text,
        score: title_ratio * text_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "说在最后";

    fn entry(title: &str, summary: &str) -> FeedEntry {
        FeedEntry {
            title: title.into(),
            link: format!("https://example.com/{}", title.len()),
            summary: summary.into(),
        }
    }

    #[test]
    fn perfect_match_scores_10000() {
        let entries = vec![entry("自动驾驶", "<p>自动驾驶</p>")];
        let ranked = rank_entries("自动驾驶", &entries, MARKER, 3);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 10_000);
        assert_eq!(ranked[0].text, "自动驾驶");
    }

    #[test]
    fn perfect_match_ranks_above_partial_match() {
        let entries = vec![
            entry("机器人的未来", "<p>今天聊聊机器人</p>"),
            entry("自动驾驶", "<p>自动驾驶</p>"),
        ];
        let ranked = rank_entries("自动驾驶", &entries, MARKER, 3);
        assert_eq!(ranked[0].title, "自动驾驶");
        assert_eq!(ranked[0].score, 10_000);
        assert!(ranked[1].score < 10_000);
    }

    #[test]
    fn results_sorted_non_increasing_and_capped() {
        let entries = vec![
            entry("第一期", "<p>开场</p>"),
            entry("自动驾驶", "<p>自动驾驶</p>"),
            entry("机器人", "<p>机器人</p>"),
            entry("自动驾驶的未来", "<p>自动驾驶 未来</p>"),
            entry("其他", "<p>其他话题</p>"),
        ];
        let ranked = rank_entries("自动驾驶", &entries, MARKER, 3);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ties_keep_feed_order() {
        let entries = vec![
            entry("aaa", "<p>xyz</p>"),
            entry("bbb", "<p>xyz</p>"),
            entry("ccc", "<p>xyz</p>"),
        ];
        let ranked = rank_entries("qqq", &entries, MARKER, 3);
        let titles: Vec<&str> = ranked.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["aaa", "bbb", "ccc"]);
        assert!(ranked.iter().all(|e| e.score == 0));
    }

    #[test]
    fn text_is_cut_at_closing_marker() {
        let entries = vec![entry("标题", "<p>a</p><p>b</p><p>说在最后</p><p>c</p>")];
        let ranked = rank_entries("标题", &entries, MARKER, 3);
        assert_eq!(ranked[0].text, "a\nb");
    }

    #[test]
    fn empty_feed_returns_empty() {
        assert!(rank_entries("自动驾驶", &[], MARKER, 3).is_empty());
    }

    #[test]
    fn empty_summary_scores_zero() {
        let entries = vec![entry("自动驾驶", "")];
        let ranked = rank_entries("自动驾驶", &entries, MARKER, 3);
        assert_eq!(ranked[0].text, "");
        assert_eq!(ranked[0].score, 0);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = PodcastConfig {
            max_results: 0,
            ..Default::default()
        };
        assert!(matches!(
            PodcastRanker::new(config),
            Err(SearchError::Config(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Live test: run with `cargo test -- --ignored`
    async fn live_podcast_search() {
        let ranker = PodcastRanker::new(PodcastConfig::default()).expect("ranker");
        let ranked = ranker.search("自动驾驶").await.expect("live search");
        assert!(ranked.len() <= 3);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
