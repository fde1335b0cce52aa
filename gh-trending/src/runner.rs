//! Orchestrates fetching, extraction and presentation.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::browser;
use crate::config::OutputMode;
use crate::export::to_json;
use crate::extract::parse_repositories;
use crate::fetch::{build_client, fetch_page, trending_url, FetchError};
use crate::repository::Repository;
use crate::select::Selector;
use crate::summary::RunOutcome;
use crate::templates::TemplateRenderer;
use reqwest::Client;
use std::io::{BufRead, Write};
use tracing::{info, warn};
use url::Url;

/// Runs one trending lookup.
pub struct Runner {
    config: RunnerConfig,
    client: Client,
    origin: Url,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the origin is not a valid URL or the HTTP
    /// client cannot be created.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let origin = Url::parse(config.origin()).map_err(FetchError::from)?;
        let client = build_client(config.timeout())?;
        Ok(Self {
            config,
            client,
            origin,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Returns the configuration this runner was built with.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Downloads the trending page and extracts its repositories.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Fetch`] or [`RunnerError::Extract`].
    pub async fn fetch_repositories(&self) -> Result<Vec<Repository>, RunnerError> {
        let url = trending_url(&self.origin, self.config.query())?;
        info!(url = %url, "Fetching trending page");

        let html = fetch_page(&self.client, &url).await?;
        Ok(parse_repositories(&html)?)
    }

    /// Presents repositories according to the configured mode.
    ///
    /// JSON is written to `output`; browser mode runs the selector over
    /// `input`/`output` and reports the choice without opening it.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on write, encoding or selector failures.
    pub fn present<R: BufRead, W: Write>(
        &self,
        repositories: &[Repository],
        input: R,
        mut output: W,
    ) -> Result<RunOutcome, RunnerError> {
        if repositories.is_empty() {
            warn!("No repositories found");
            writeln!(output, "No Results.")?;
            return Ok(RunOutcome::NoResults);
        }

        match self.config.mode() {
            OutputMode::Json => {
                writeln!(output, "{}", to_json(repositories)?)?;
                Ok(RunOutcome::Exported {
                    count: repositories.len(),
                })
            }
            OutputMode::Browser => {
                let chosen = Selector::new(repositories, &self.renderer).run(input, output)?;
                Ok(match chosen {
                    Some(index) => RunOutcome::Selected {
                        index,
                        href: repositories[index].href.clone(),
                    },
                    None => RunOutcome::Cancelled,
                })
            }
        }
    }

    /// Executes the full flow on the process's stdin/stdout.
    ///
    /// A repository chosen in browser mode is opened before returning.
    ///
    /// # Errors
    ///
    /// Returns the first [`RunnerError`] encountered.
    pub async fn run(&self) -> Result<RunOutcome, RunnerError> {
        let repositories = self.fetch_repositories().await?;
        let outcome = self.present_stdio(&repositories)?;

        if let Some(href) = outcome.selected_href() {
            browser::open(href).await?;
        }

        Ok(outcome)
    }

    fn present_stdio(&self, repositories: &[Repository]) -> Result<RunOutcome, RunnerError> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.present(repositories, stdin.lock(), stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrendingQuery;
    use std::io::Cursor;

    fn runner(mode: OutputMode) -> Runner {
        Runner::new(RunnerConfig::new(TrendingQuery::default(), mode)).unwrap()
    }

    fn repositories() -> Vec<Repository> {
        vec![
            Repository {
                name: "a/one".to_string(),
                href: "https://github.com/a/one".to_string(),
                stars: 10,
                ..Default::default()
            },
            Repository {
                name: "b/two".to_string(),
                href: "https://github.com/b/two".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn empty_list_prints_no_results() {
        let mut output = Vec::new();
        let outcome = runner(OutputMode::Json)
            .present(&[], Cursor::new(""), &mut output)
            .unwrap();

        assert_eq!(outcome, RunOutcome::NoResults);
        assert_eq!(String::from_utf8(output).unwrap(), "No Results.\n");
    }

    #[test]
    fn json_mode_exports_everything() {
        let mut output = Vec::new();
        let outcome = runner(OutputMode::Json)
            .present(&repositories(), Cursor::new(""), &mut output)
            .unwrap();

        assert_eq!(outcome, RunOutcome::Exported { count: 2 });
        let parsed: Vec<Repository> = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed, repositories());
    }

    #[test]
    fn browser_mode_reports_selection() {
        let mut output = Vec::new();
        let outcome = runner(OutputMode::Browser)
            .present(&repositories(), Cursor::new("2\n"), &mut output)
            .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Selected {
                index: 1,
                href: "https://github.com/b/two".to_string()
            }
        );
    }

    #[test]
    fn browser_mode_cancel() {
        let outcome = runner(OutputMode::Browser)
            .present(&repositories(), Cursor::new("q\n"), Vec::new())
            .unwrap();
        assert_eq!(outcome, RunOutcome::Cancelled);
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let config = RunnerConfig::new(TrendingQuery::default(), OutputMode::Json)
            .with_origin("not a url");
        assert!(matches!(
            Runner::new(config),
            Err(RunnerError::Fetch(FetchError::InvalidUrl(_)))
        ));
    }
}
