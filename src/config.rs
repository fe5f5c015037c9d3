//! Configuration
//!
//! The algebra itself is configured by tree shape and the injected sink.
//! This covers the ambient settings: how explanations are laid out and
//! which log lines reach the output.
//!
//! ```json
//! { "explain": { "separator": "\n" }, "log_severity": "TRACE" }
//! ```
//!
//! Every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::trace::ExplainConfig;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ambient configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlgebraConfig {
    /// Explanation layout used by `ExplanationLog` and `TraceLog::explain_all_with`
    #[serde(default)]
    pub explain: ExplainConfig,

    /// Minimum severity written by the logger (default: INFO)
    #[serde(default)]
    pub log_severity: Severity,
}

impl AlgebraConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if it is not a valid configuration.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_json(&content)?;
        let path = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", path.as_str())]);
        Ok(config)
    }

    /// Install the logger threshold.
    pub fn apply(&self) {
        Logger::set_min_severity(self.log_severity);
    }
}
