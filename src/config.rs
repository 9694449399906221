//! Configuration file for the function layer.
//!
//! Loaded from TOML; every field is optional and falls back to the built-in
//! defaults. The search API key is referenced through [`SecretRef`] so the
//! file never needs to contain it.

use std::path::{Path, PathBuf};

use kuobo_search::config::{DEFAULT_BING_ENDPOINT, DEFAULT_MARKET};
use kuobo_search::{BingConfig, PodcastConfig};
use serde::{Deserialize, Serialize};

use crate::error::{FunctionError, Result};

/// Environment variable holding the search API key by default.
pub const DEFAULT_API_KEY_VAR: &str = "BING_API_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionsConfig {
    /// Web search adapter settings.
    pub bing: BingSettings,
    /// Podcast ranker settings.
    pub podcast: PodcastConfig,
}

/// Web search settings as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BingSettings {
    /// Search endpoint URL.
    pub endpoint: String,
    /// Market code used when a call does not pass one.
    pub market: String,
    /// Maximum number of hits per call.
    pub top_n: usize,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Where to find the subscription key.
    pub api_key: SecretRef,
}

impl Default for BingSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BING_ENDPOINT.to_owned(),
            market: DEFAULT_MARKET.to_owned(),
            top_n: 3,
            timeout_seconds: 10,
            api_key: SecretRef::Env {
                var: DEFAULT_API_KEY_VAR.to_owned(),
            },
        }
    }
}

impl BingSettings {
    /// Resolve the API key and build the adapter configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ConfigError`] if the key cannot be resolved or
    /// no key is configured.
    pub fn to_bing_config(&self) -> Result<BingConfig> {
        let api_key = self.api_key.resolve()?.ok_or_else(|| {
            FunctionError::ConfigError("bing.api_key is required for web search".into())
        })?;
        Ok(BingConfig {
            endpoint: self.endpoint.clone(),
            api_key,
            market: self.market.clone(),
            top_n: self.top_n,
            timeout_seconds: self.timeout_seconds,
        })
    }
}

/// Reference to a secret value.
///
/// Secrets can be:
/// - Not configured (None)
/// - Loaded from an environment variable (Env)
/// - A literal value (Literal), for local testing only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SecretRef {
    /// No secret configured
    #[default]
    None,
    /// Load from environment variable
    Env { var: String },
    /// Literal value (insecure)
    Literal { value: String },
}

impl SecretRef {
    /// Resolve the secret to its actual value.
    ///
    /// # Returns
    /// - `Ok(None)` if no secret is configured (variant `None`)
    /// - `Ok(Some(value))` for successfully resolved secrets
    /// - `Err(FunctionError::ConfigError)` if the environment variable is unset
    pub fn resolve(&self) -> Result<Option<String>> {
        match self {
            Self::None => Ok(None),
            Self::Env { var } => std::env::var(var).map(Some).map_err(|_| {
                FunctionError::ConfigError(format!("environment variable '{var}' not set"))
            }),
            Self::Literal { value } => Ok(Some(value.clone())),
        }
    }
}

impl FunctionsConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FunctionError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| FunctionError::ConfigError(e.to_string()))
    }

    /// Load from `path` if given, else from [`default_path`](Self::default_path)
    /// if that file exists, else use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`from_file`](Self::from_file).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the default config file path: `<config dir>/kuobo/functions.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kuobo").join("functions.toml"))
    }
}
