//! Function descriptors handed to the chat model.
//!
//! The `search_bing` description embeds the current UTC time so the model
//! can reason about "today"; it is recomputed on every request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FunctionName;

/// Timestamp format embedded in descriptions.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Description of the single `query` parameter shared by both functions.
const QUERY_DESCRIPTION: &str = "Search query based on user message.";

/// A function descriptor in the shape function-calling APIs expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Function name, e.g. `search_bing`.
    pub name: String,
    /// What the function does, for the model.
    pub description: String,
    /// JSON Schema of the arguments object.
    pub parameters: serde_json::Value,
}

/// Descriptors for every function, stamped with the current time.
pub fn function_specs() -> Vec<FunctionSpec> {
    function_specs_at(Utc::now())
}

/// Descriptors for every function, stamped with `now`.
pub fn function_specs_at(now: DateTime<Utc>) -> Vec<FunctionSpec> {
    FunctionName::ALL
        .into_iter()
        .map(|name| FunctionSpec {
            name: name.as_str().to_owned(),
            description: description(name, now),
            parameters: query_parameters(),
        })
        .collect()
}

fn description(name: FunctionName, now: DateTime<Utc>) -> String {
    match name {
        FunctionName::SearchBing => format!(
            "Search Bing for web results on factual or topical questions. It is {} UTC now.",
            now.format(TIMESTAMP_FORMAT)
        ),
        FunctionName::SearchPodcasts => {
            "Search through《扩博智聊》podcast archives for relevant episodes.".to_owned()
        }
    }
}

fn query_parameters() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": QUERY_DESCRIPTION
            }
        },
        "required": ["query"]
    })
}
