//! Trending repository record.

use serde::{Deserialize, Serialize};

/// Origin every repository link on the trending page is resolved against.
pub const GITHUB_ORIGIN: &str = "https://github.com/";

/// A single ranked entry scraped from the trending page.
///
/// Records are produced by [`crate::extract::extract_repositories`] in rank
/// order and are not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Full repository name in "owner/repo" format.
    #[serde(rename = "repoName")]
    pub name: String,

    /// Absolute URL of the repository home page.
    pub href: String,

    /// Repository description, empty when the entry has none.
    pub description: String,

    /// Primary language, empty when GitHub does not show one.
    pub language: String,

    /// Total stargazers.
    pub stars: u64,

    /// Total forks.
    pub forks: u64,

    /// Stars gained during the requested period (e.g. "123 stars today").
    pub stars_in_period: String,
}

impl Repository {
    /// Returns the owner half of [`Repository::name`].
    #[must_use]
    pub fn owner(&self) -> &str {
        self.name.split_once('/').map_or("", |(owner, _)| owner)
    }

    /// Returns the repository half of [`Repository::name`].
    #[must_use]
    pub fn repo(&self) -> &str {
        self.name.split_once('/').map_or("", |(_, repo)| repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Repository {
        Repository {
            name: "octocat/Hello-World".to_string(),
            href: "https://github.com/octocat/Hello-World".to_string(),
            description: String::new(),
            language: "Go".to_string(),
            stars: 1234,
            forks: 56,
            stars_in_period: "123 stars today".to_string(),
        }
    }

    #[test]
    fn splits_owner_and_repo() {
        let repo = sample();
        assert_eq!(repo.owner(), "octocat");
        assert_eq!(repo.repo(), "Hello-World");
    }

    #[test]
    fn serializes_with_listing_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        for expected in [
            "repoName",
            "href",
            "description",
            "language",
            "stars",
            "forks",
            "starsInPeriod",
        ] {
            assert!(keys.contains(&expected), "missing key {expected}");
        }
        assert_eq!(keys.len(), 7);
        assert_eq!(value["stars"], 1234);
    }
}
