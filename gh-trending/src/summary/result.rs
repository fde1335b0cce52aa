//! Outcome of a single run.

/// What a run ended up doing with the fetched repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The trending page listed no repositories.
    NoResults,

    /// Repositories were printed as JSON.
    Exported {
        /// Number of repositories exported.
        count: usize,
    },

    /// A repository was chosen in the selector.
    Selected {
        /// Index of the repository in rank order.
        index: usize,
        /// URL of the chosen repository.
        href: String,
    },

    /// The selector was closed without a choice.
    Cancelled,
}

impl RunOutcome {
    /// Returns the URL to open, if a repository was chosen.
    #[must_use]
    pub fn selected_href(&self) -> Option<&str> {
        match self {
            Self::Selected { href, .. } => Some(href),
            _ => None,
        }
    }
}
