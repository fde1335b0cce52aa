#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod browser;
pub mod config;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod repository;
pub mod runner;
pub mod select;
pub mod summary;
pub mod templates;

pub use browser::BrowserError;
pub use config::{
    load_defaults, resolve_defaults_path, ConfigError, Defaults, OutputMode, Period,
    TrendingQuery, CONFIG_ENV,
};
pub use export::to_json;
pub use extract::{
    extract_repositories, extract_repository, locate_entries, parse_repositories, ExtractError,
};
pub use fetch::{build_client, fetch_page, trending_url, FetchError};
pub use repository::{Repository, GITHUB_ORIGIN};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use select::{matches_search, SelectError, Selector};
pub use summary::RunOutcome;
pub use templates::{TemplateError, TemplateRenderer};
