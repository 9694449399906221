//! Error types for the function layer.
//!
//! Each error variant carries a stable error code (SCREAMING_SNAKE_CASE)
//! that is included in the Display output and accessible via [`FunctionError::code()`].
//! Codes are part of the public API contract and will not change.

use kuobo_search::SearchError;

/// Stable error codes for programmatic error handling.
///
/// Orchestrators should match on these rather than on Display output.
pub mod error_codes {
    /// Invalid or missing configuration.
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

    /// The orchestrator asked for a function that does not exist.
    pub const UNKNOWN_FUNCTION: &str = "UNKNOWN_FUNCTION";

    /// Function arguments were missing or malformed.
    pub const INVALID_ARGUMENTS: &str = "INVALID_ARGUMENTS";

    /// The web search call failed.
    pub const SEARCH_FAILED: &str = "SEARCH_FAILED";

    /// The podcast search call failed.
    pub const PODCAST_SEARCH_FAILED: &str = "PODCAST_SEARCH_FAILED";

    /// A result could not be rendered as JSON text.
    pub const SERIALIZATION_FAILED: &str = "SERIALIZATION_FAILED";
}

/// Errors produced while configuring or calling functions.
///
/// The Display impl formats as `[CODE] message`.
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    /// Invalid or missing configuration.
    #[error("[{}] {}", error_codes::CONFIG_INVALID, .0)]
    ConfigError(String),

    /// No function with this name is registered.
    #[error("[{}] no function named '{}'", error_codes::UNKNOWN_FUNCTION, .0)]
    UnknownFunction(String),

    /// Function arguments were missing or malformed.
    #[error("[{}] {}", error_codes::INVALID_ARGUMENTS, .0)]
    ArgumentError(String),

    /// The web search call failed; the adapter error is kept as the source.
    #[error("[{}] web search failed: {}", error_codes::SEARCH_FAILED, .0)]
    SearchFailed(#[source] SearchError),

    /// The podcast search call failed; the ranker error is kept as the source.
    #[error("[{}] podcast search failed: {}", error_codes::PODCAST_SEARCH_FAILED, .0)]
    PodcastSearchFailed(#[source] SearchError),

    /// A result could not be rendered as JSON text.
    #[error("[{}] {}", error_codes::SERIALIZATION_FAILED, .0)]
    SerializationError(String),
}

impl FunctionError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => error_codes::CONFIG_INVALID,
            Self::UnknownFunction(_) => error_codes::UNKNOWN_FUNCTION,
            Self::ArgumentError(_) => error_codes::INVALID_ARGUMENTS,
            Self::SearchFailed(_) => error_codes::SEARCH_FAILED,
            Self::PodcastSearchFailed(_) => error_codes::PODCAST_SEARCH_FAILED,
            Self::SerializationError(_) => error_codes::SERIALIZATION_FAILED,
        }
    }

    /// Returns the underlying adapter error, if this is a call failure.
    pub fn search_error(&self) -> Option<&SearchError> {
        match self {
            Self::SearchFailed(e) | Self::PodcastSearchFailed(e) => Some(e),
            _ => None,
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, FunctionError>;
