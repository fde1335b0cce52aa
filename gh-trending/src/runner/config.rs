//! Runner configuration.

use crate::config::{OutputMode, TrendingQuery};
use crate::fetch::DEFAULT_TIMEOUT;
use crate::repository::GITHUB_ORIGIN;
use std::time::Duration;

/// Configuration for a single trending run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Filters for the trending page.
    query: TrendingQuery,
    /// How results are presented.
    mode: OutputMode,
    /// Origin the trending page is fetched from.
    origin: String,
    /// HTTP request timeout.
    timeout: Duration,
}

impl RunnerConfig {
    /// Creates a new configuration for a run against github.com.
    pub fn new(query: TrendingQuery, mode: OutputMode) -> Self {
        Self {
            query,
            mode,
            origin: GITHUB_ORIGIN.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom origin to fetch from.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Sets the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the trending query.
    pub fn query(&self) -> &TrendingQuery {
        &self.query
    }

    /// Returns the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Returns the origin fetched from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the HTTP request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
