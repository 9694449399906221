//! Bing Web Search API adapter.
//!
//! Sends the query to the configured endpoint with the subscription key
//! header and trims the `webPages.value` list down to `{description, url}`
//! pairs.

use serde::Deserialize;

use crate::config::BingConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::SearchHit;

/// Header carrying the API subscription key.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

#[derive(Debug, Deserialize)]
struct BingResponse {
    #[serde(rename = "webPages")]
    web_pages: WebPages,
}

#[derive(Debug, Deserialize)]
struct WebPages {
    value: Vec<WebPage>,
}

#[derive(Debug, Deserialize)]
struct WebPage {
    snippet: String,
    url: String,
}

/// Client for the Bing Web Search API.
///
/// Built once from a validated [`BingConfig`]; each [`search`](Self::search)
/// call issues exactly one GET request.
#[derive(Debug, Clone)]
pub struct BingClient {
    config: BingConfig,
    client: reqwest::Client,
}

impl BingClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: BingConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let client = http::build_client(config.timeout_seconds)?;
        Ok(Self { config, client })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &BingConfig {
        &self.config
    }

    /// Search the web for `query`.
    ///
    /// `market` overrides the configured market code for this call.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] on transport failure or a non-2xx status,
    /// and [`SearchError::Parse`] if the body lacks `webPages.value` or a hit
    /// lacks `snippet`/`url`. No partial results are returned on failure.
    pub async fn search(
        &self,
        query: &str,
        market: Option<&str>,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let market = market.unwrap_or(self.config.market.as_str());
        tracing::trace!(query, market, "Bing search");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("q", query), ("mkt", market)])
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Bing request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Bing HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Bing response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "Bing response received");

        parse_bing_json(&body, self.config.top_n)
    }
}

/// Parse a Bing API JSON body into at most `top_n` hits.
///
/// Hits with an empty URL are skipped.
fn parse_bing_json(body: &str, top_n: usize) -> Result<Vec<SearchHit>, SearchError> {
    let response: BingResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("unexpected Bing response: {e}")))?;

    let hits: Vec<SearchHit> = response
        .web_pages
        .value
        .into_iter()
        .filter(|page| !page.url.trim().is_empty())
        .take(top_n)
        .map(|page| SearchHit {
            description: page.snippet,
            url: page.url,
        })
        .collect();

    tracing::debug!(count = hits.len(), "Bing results parsed");
    Ok(hits)
}
