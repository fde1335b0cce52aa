//! Query parameters and configuration defaults.
//!
//! A run is configured from three layers, highest precedence first:
//! command-line flags, an optional TOML defaults file, and built-in
//! defaults.

mod defaults;
mod error;
mod query;

pub use defaults::Defaults;
pub use error::ConfigError;
pub use query::{OutputMode, Period, TrendingQuery};

use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the defaults file.
pub const CONFIG_ENV: &str = "GH_TRENDING_CONFIG";

/// Resolves which defaults file to read.
///
/// An explicit path wins over [`CONFIG_ENV`]. Returns `None` when neither
/// is set.
#[must_use]
pub fn resolve_defaults_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let from_env = std::env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    if let Some(path) = &from_env {
        debug!(path = %path.display(), "Using defaults file from environment");
    }
    from_env
}

/// Loads the defaults file chosen by [`resolve_defaults_path`].
///
/// # Errors
///
/// Returns [`ConfigError`] if the chosen file exists but cannot be loaded.
pub fn load_defaults(explicit: Option<&Path>) -> Result<Defaults, ConfigError> {
    match resolve_defaults_path(explicit) {
        Some(path) => Ok(Defaults::load(&path)?.unwrap_or_default()),
        None => Ok(Defaults::default()),
    }
}
