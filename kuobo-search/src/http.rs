//! Shared HTTP client construction for the search API and the feed host.

use std::time::Duration;

use crate::error::SearchError;

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!("kuobo-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] with a request timeout.
///
/// The client has:
/// - Timeout from config
/// - A fixed crate User-Agent
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(timeout_seconds: u64) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_client_with_timeout() {
        assert!(build_client(10).is_ok());
    }

    #[test]
    fn user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("kuobo-search/"));
    }
}
