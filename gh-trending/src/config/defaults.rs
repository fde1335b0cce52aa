//! Defaults file deserialization.

use super::{ConfigError, OutputMode, Period};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Values read from a `config.toml` defaults file.
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Defaults {
    /// Default programming language filter.
    pub language: Option<String>,

    /// Default spoken language code.
    pub spoken_language: Option<String>,

    /// Default date range.
    pub period: Option<Period>,

    /// Default output mode.
    pub mode: Option<OutputMode>,

    /// HTTP request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Defaults {
    /// Loads a defaults file, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or contains a zero timeout.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No defaults file");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;

        let defaults: Self = toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
            path: path.display().to_string(),
            source,
        })?;

        defaults.validate(path)?;
        debug!(path = %path.display(), "Loaded defaults file");
        Ok(Some(defaults))
    }

    /// Returns the configured timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "timeout-secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
