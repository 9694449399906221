//! Function registry: validated dispatch from function name to adapter.
//!
//! The [`FunctionRegistry`] owns the web search client and the podcast
//! ranker, checks at construction that the schema list and the dispatch
//! table describe the same functions, and runs calls by name.
//!
//! The two functions are independent: a web search client that cannot be
//! configured (for example, no API key) only fails `search_bing` calls.

use std::collections::HashSet;

use kuobo_search::{BingClient, PodcastRanker};
use serde::Deserialize;

use crate::config::FunctionsConfig;
use crate::error::{FunctionError, Result};

use super::schema::{FunctionSpec, function_specs};
use super::{FunctionName, FunctionOutput};

/// Arguments accepted by both functions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryArgs {
    /// The search query.
    pub query: String,
    /// Market code override; only used by `search_bing`.
    #[serde(default)]
    pub mkt: Option<String>,
}

impl QueryArgs {
    /// Parse and validate a JSON arguments object.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ArgumentError`] if `query` is missing, not a
    /// string, or blank.
    pub fn from_value(args: serde_json::Value) -> Result<Self> {
        let args: Self = serde_json::from_value(args)
            .map_err(|e| FunctionError::ArgumentError(format!("invalid arguments: {e}")))?;
        if args.query.trim().is_empty() {
            return Err(FunctionError::ArgumentError(
                "query must not be empty".into(),
            ));
        }
        Ok(args)
    }
}

/// Registry of callable functions.
pub struct FunctionRegistry {
    /// The web search client, or why it could not be built.
    bing: std::result::Result<BingClient, String>,
    podcasts: PodcastRanker,
}

impl FunctionRegistry {
    /// Create a registry from ready-made adapters.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ConfigError`] if the schema list does not
    /// match the dispatch table.
    pub fn new(bing: BingClient, podcasts: PodcastRanker) -> Result<Self> {
        Self::build(Ok(bing), podcasts)
    }

    /// Build both adapters from configuration.
    ///
    /// The API key is resolved here, once. If the web search client cannot be
    /// built, the registry is still created: `search_podcasts` works and
    /// `search_bing` calls fail with [`FunctionError::ConfigError`].
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ConfigError`] if the podcast ranker rejects its
    /// configuration.
    pub fn from_config(config: &FunctionsConfig) -> Result<Self> {
        let bing = bing_from_config(config);
        match &bing {
            Ok(client) => tracing::debug!(
                endpoint = %client.config().endpoint,
                market = %client.config().market,
                "web search configured"
            ),
            Err(reason) => tracing::warn!(%reason, "web search unavailable"),
        }
        let podcasts = PodcastRanker::new(config.podcast.clone())
            .map_err(|e| FunctionError::ConfigError(format!("podcast search: {e}")))?;
        Self::build(bing, podcasts)
    }

    fn build(
        bing: std::result::Result<BingClient, String>,
        podcasts: PodcastRanker,
    ) -> Result<Self> {
        validate_specs(&function_specs())?;
        tracing::debug!(
            functions = FunctionName::ALL.len(),
            "function registry ready"
        );
        Ok(Self { bing, podcasts })
    }

    /// Current function descriptors, freshly timestamped.
    pub fn specs(&self) -> Vec<FunctionSpec> {
        function_specs()
    }

    /// Returns the podcast ranker, e.g. to invalidate its feed cache.
    pub fn podcasts(&self) -> &PodcastRanker {
        &self.podcasts
    }

    /// Call the function named `name` with JSON `args`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::UnknownFunction`] for an unregistered name and
    /// otherwise the errors of [`dispatch`](Self::dispatch).
    pub async fn call(&self, name: &str, args: serde_json::Value) -> Result<FunctionOutput> {
        let name: FunctionName = name.parse()?;
        self.dispatch(name, args).await
    }

    /// Run `name` with JSON `args`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ArgumentError`] for bad arguments,
    /// [`FunctionError::ConfigError`] for `search_bing` without a usable web
    /// search client, and [`FunctionError::SearchFailed`] or
    /// [`FunctionError::PodcastSearchFailed`] if the adapter fails. Failures
    /// never produce partial results.
    pub async fn dispatch(
        &self,
        name: FunctionName,
        args: serde_json::Value,
    ) -> Result<FunctionOutput> {
        let args = QueryArgs::from_value(args)?;
        tracing::debug!(function = %name, "dispatching function call");

        let output = match name {
            FunctionName::SearchBing => match &self.bing {
                Ok(client) => client
                    .search(&args.query, args.mkt.as_deref())
                    .await
                    .map(FunctionOutput::SearchHits)
                    .map_err(FunctionError::SearchFailed),
                Err(reason) => Err(FunctionError::ConfigError(reason.clone())),
            },
            FunctionName::SearchPodcasts => self
                .podcasts
                .search(&args.query)
                .await
                .map(FunctionOutput::Podcasts)
                .map_err(FunctionError::PodcastSearchFailed),
        };

        match &output {
            Ok(result) => tracing::debug!(function = %name, count = result.len(), "function call succeeded"),
            Err(e) => tracing::warn!(function = %name, error = %e, "function call failed"),
        }
        output
    }
}

/// Web search client from configuration, or the reason it is unavailable.
fn bing_from_config(config: &FunctionsConfig) -> std::result::Result<BingClient, String> {
    let bing_config = config.bing.to_bing_config().map_err(|e| match e {
        FunctionError::ConfigError(reason) => reason,
        other => other.to_string(),
    })?;
    BingClient::new(bing_config).map_err(|e| format!("web search: {e}"))
}

/// Check that `specs` and [`FunctionName::ALL`] describe the same functions
/// and that every spec requires a `query` argument.
fn validate_specs(specs: &[FunctionSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for spec in specs {
        let name: FunctionName = spec.name.parse().map_err(|_| {
            FunctionError::ConfigError(format!("schema names unknown function '{}'", spec.name))
        })?;
        if !seen.insert(name) {
            return Err(FunctionError::ConfigError(format!(
                "schema lists '{}' more than once",
                spec.name
            )));
        }
        let requires_query = spec
            .parameters
            .get("required")
            .and_then(|v| v.as_array())
            .is_some_and(|required| required.iter().any(|v| v.as_str() == Some("query")));
        if !requires_query {
            return Err(FunctionError::ConfigError(format!(
                "schema for '{}' does not require 'query'",
                spec.name
            )));
        }
    }
    if let Some(missing) = FunctionName::ALL.iter().find(|n| !seen.contains(*n)) {
        return Err(FunctionError::ConfigError(format!(
            "function '{missing}' has no schema"
        )));
    }
    Ok(())
}
