//! Error types for the kuobo-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No API keys appear in error messages.

/// Errors that can occur while searching the web or ranking podcast entries.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A request failed in transport, timed out, or returned a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The search API response did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The podcast feed body could not be parsed as RSS or Atom.
    #[error("feed error: {0}")]
    Feed(String),

    /// Invalid adapter or ranker configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for kuobo-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
