//! Trending page query parameters.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Date range the trending ranking covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Stars gained today.
    #[default]
    #[serde(alias = "today")]
    Daily,
    /// Stars gained this week.
    Weekly,
    /// Stars gained this month.
    Monthly,
}

impl Period {
    /// Returns the value GitHub expects in the `since` query parameter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" | "today" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(format!(
                "unknown period '{other}', expected today, weekly or monthly"
            )),
        }
    }
}

/// How the fetched repositories are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Pick a repository interactively and open it in the browser.
    #[default]
    Browser,
    /// Print the repositories as JSON.
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "browser" => Ok(Self::Browser),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown mode '{other}', expected browser or json"
            )),
        }
    }
}

/// Filters applied to the trending page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendingQuery {
    /// Programming language, e.g. "rust". Any value GitHub accepts.
    pub language: Option<String>,

    /// Spoken language code, e.g. "en" or "ja".
    pub spoken_language: Option<String>,

    /// Date range.
    pub period: Period,
}

impl TrendingQuery {
    /// Creates a query for all languages over the given period.
    #[must_use]
    pub fn new(period: Period) -> Self {
        Self {
            period,
            ..Default::default()
        }
    }

    /// Restricts the query to a programming language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Restricts the query to a spoken language.
    #[must_use]
    pub fn with_spoken_language(mut self, spoken_language: impl Into<String>) -> Self {
        self.spoken_language = Some(spoken_language.into());
        self
    }
}
