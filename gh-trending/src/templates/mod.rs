//! Selector display templates using Handlebars.
//!
//! Templates see a [`crate::Repository`] through its JSON field names
//! (`repoName`, `description`, `starsInPeriod`, ...).

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

/// Prompt shown above the repository list.
pub const LABEL_TEMPLATE: &str = "Selecting a repository opens a page for that repository.";

/// Line for the highlighted repository.
pub const ACTIVE_TEMPLATE: &str = "\u{1F449} {{repoName}}";

/// Line for every other repository.
pub const INACTIVE_TEMPLATE: &str = "    {{repoName}}";

/// Line printed once a repository has been chosen.
pub const SELECTED_TEMPLATE: &str = "\u{1F336}  {{repoName}}";

/// Details block for the highlighted repository.
pub const DETAILS_TEMPLATE: &str = r#"
--------- Repository Details ----------
{{faint "RepoName:"}}	{{repoName}}
{{faint "Description:"}}	{{description}}
{{faint "Language:"}}	{{language}}
{{faint "Stars:"}}	{{stars}}
{{faint "StarsInPeriod:"}}	{{starsInPeriod}}
{{faint "Forks:"}}	{{forks}}
"#;
