//! Podcast feed download and parsing.

use feed_rs::parser;

use crate::error::SearchError;
use crate::types::FeedEntry;

/// Download `url` and parse it into feed entries.
///
/// # Errors
///
/// Returns [`SearchError::Http`] on transport failure or a non-2xx status,
/// and [`SearchError::Feed`] if the body is not RSS or Atom.
pub async fn fetch_feed(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<FeedEntry>, SearchError> {
    tracing::debug!(url, "fetching podcast feed");

    let response = client
        .get(url)
        .header("Accept", "application/rss+xml, application/atom+xml, application/xml, text/xml")
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("feed request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("feed HTTP error: {e}")))?;

    let body = response
        .bytes()
        .await
        .map_err(|e| SearchError::Http(format!("feed response read failed: {e}")))?;

    tracing::trace!(bytes = body.len(), "feed response received");

    parse_feed(&body)
}

/// Parse an RSS or Atom document into entries, in feed order.
pub fn parse_feed(body: &[u8]) -> Result<Vec<FeedEntry>, SearchError> {
    let feed = parser::parse(body).map_err(|e| SearchError::Feed(e.to_string()))?;

    let entries: Vec<FeedEntry> = feed
        .entries
        .iter()
        .map(|entry| FeedEntry {
            title: entry
                .title
                .as_ref()
                .map(|t| t.content.clone())
                .unwrap_or_default(),
            link: select_entry_link(entry),
            summary: entry
                .summary
                .as_ref()
                .map(|s| s.content.clone())
                .or_else(|| entry.content.as_ref().and_then(|c| c.body.clone()))
                .unwrap_or_default(),
        })
        .collect();

    tracing::debug!(count = entries.len(), "feed entries parsed");
    Ok(entries)
}

/// Pick the entry's page link: the first plain or `alternate` link, else any
/// non-empty link.
fn select_entry_link(entry: &feed_rs::model::Entry) -> String {
    for link in &entry.links {
        let href = link.href.trim();
        if href.is_empty() {
            continue;
        }
        let rel = link.rel.as_deref().unwrap_or("");
        if rel.is_empty() || rel.eq_ignore_ascii_case("alternate") {
            return href.to_owned();
        }
    }
    entry
        .links
        .iter()
        .find(|l| !l.href.trim().is_empty())
        .map(|l| l.href.trim().to_owned())
        .unwrap_or_default()
}
