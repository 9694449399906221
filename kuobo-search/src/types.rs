//! Core types returned by the web search adapter and the podcast ranker.

use serde::{Deserialize, Serialize};

/// A single web search hit, trimmed to what the chat model needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Text snippet summarising the page.
    pub description: String,
    /// The URL of the page. Never empty.
    pub url: String,
}

/// A podcast episode scored against a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastEntry {
    /// Episode title as published in the feed.
    pub title: String,
    /// Link to the episode page.
    pub link: String,
    /// Cleaned show notes: paragraph text before the closing marker.
    pub text: String,
    /// Product of the title and text similarity ratios, `0..=10000`.
    pub score: u32,
}

/// One raw feed item before text extraction and scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Item title.
    pub title: String,
    /// Item link.
    pub link: String,
    /// Item summary, usually an HTML fragment.
    pub summary: String,
}
