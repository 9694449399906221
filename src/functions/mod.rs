//! Chat functions exposed to a function-calling model.
//!
//! - [`FunctionName`] is the dispatch key; every callable function has a variant
//! - [`schema`] produces the descriptors the model sees
//! - [`registry`] validates the descriptors against the dispatch table and
//!   runs calls

pub mod registry;
pub mod schema;

use std::fmt;
use std::str::FromStr;

use kuobo_search::{PodcastEntry, SearchHit};
use serde::Serialize;

use crate::error::FunctionError;

pub use registry::{FunctionRegistry, QueryArgs};
pub use schema::{FunctionSpec, function_specs, function_specs_at};

/// Functions the model may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionName {
    /// Web search through the Bing API.
    SearchBing,
    /// Relevance search over the podcast archive.
    SearchPodcasts,
}

impl FunctionName {
    /// Every function, in schema order.
    pub const ALL: [FunctionName; 2] = [Self::SearchBing, Self::SearchPodcasts];

    /// The name the model uses in a function call.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SearchBing => "search_bing",
            Self::SearchPodcasts => "search_podcasts",
        }
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunctionName {
    type Err = FunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FunctionError::UnknownFunction(s.to_owned()))
    }
}

/// Result of a function call.
///
/// Serialises as the bare JSON list, e.g. `[{"description": …, "url": …}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FunctionOutput {
    /// Web search hits.
    SearchHits(Vec<SearchHit>),
    /// Ranked podcast episodes.
    Podcasts(Vec<PodcastEntry>),
}

impl FunctionOutput {
    /// Number of records in the result.
    pub fn len(&self) -> usize {
        match self {
            Self::SearchHits(hits) => hits.len(),
            Self::Podcasts(entries) => entries.len(),
        }
    }

    /// Whether the result has no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the result as JSON text for the model.
    ///
    /// Non-ASCII text is written as-is, never as `\uXXXX` escapes.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::SerializationError`] if serialisation fails.
    pub fn to_json_text(&self) -> Result<String, FunctionError> {
        serde_json::to_string(self).map_err(|e| FunctionError::SerializationError(e.to_string()))
    }
}
