//! Runner error types.

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration defaults could not be loaded.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The trending page could not be downloaded.
    #[error(transparent)]
    Fetch(#[from] crate::fetch::FetchError),

    /// The trending page no longer has the expected layout.
    #[error("Failed to parse trending page: {0}")]
    Extract(#[from] crate::extract::ExtractError),

    /// Display templates could not be prepared.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// The interactive selector failed.
    #[error(transparent)]
    Select(#[from] crate::select::SelectError),

    /// JSON encoding failed.
    #[error("JSON export failed: {0}")]
    Export(#[from] serde_json::Error),

    /// The chosen repository could not be opened.
    #[error(transparent)]
    Browser(#[from] crate::browser::BrowserError),

    /// Writing results failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
