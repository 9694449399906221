//! Kuobo: function-calling tools for a chat model.
//!
//! Two functions are exposed to the model:
//!
//! - `search_bing`: web search through the Bing API
//! - `search_podcasts`: relevance search over the 《扩博智聊》 podcast archive
//!
//! # Architecture
//!
//! - **Config** ([`config`]): TOML file with API key indirection
//! - **Functions** ([`functions`]): schema descriptors, validated dispatch
//!   table, structured results
//! - **Search** (`kuobo-search` crate): the HTTP adapters and ranking core
//!
//! The chat loop that talks to the model is not part of this crate.

pub mod config;
pub mod error;
pub mod functions;

pub use config::{FunctionsConfig, SecretRef};
pub use error::{FunctionError, Result};
pub use functions::{
    FunctionName, FunctionOutput, FunctionRegistry, FunctionSpec, function_specs,
};
