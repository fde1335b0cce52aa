//! Trending page extraction.
//!
//! Turns the markup of `https://github.com/trending` into an ordered list of
//! [`Repository`] records. Every `<article>` on the page is one entry; its
//! fields are read by position (see [`fields`]).
//!
//! Extraction is all-or-nothing: the first fatal problem in any entry aborts
//! the whole call and no partial list is returned.

mod error;
pub mod fields;
mod path;

pub use error::ExtractError;
pub use fields::{Field, Severity, FIELDS};
pub use path::{NodePath, Step};

use crate::repository::{Repository, GITHUB_ORIGIN};
use fields::{DESCRIPTION, FORKS, LANGUAGE, LINK, STARS, STARS_IN_PERIOD};
use scraper::{ElementRef, Html};
use std::num::ParseIntError;
use tracing::{debug, info};
use url::Url;

/// Tag name of a single listing entry.
const ENTRY_TAG: &str = "article";

/// Parses raw markup and extracts every listed repository.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyDocument`] for blank input, or any error
/// from [`extract_repositories`].
pub fn parse_repositories(html: &str) -> Result<Vec<Repository>, ExtractError> {
    if html.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!(
            count = document.errors.len(),
            "Markup parsed with recoverable errors"
        );
    }

    extract_repositories(&document)
}

/// Returns all listing entries of the document, in document order.
///
/// No shape validation happens here; that is left to
/// [`extract_repository`].
#[must_use]
pub fn locate_entries(document: &Html) -> Vec<ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == ENTRY_TAG)
        .collect()
}

/// Extracts one record per listing entry, preserving rank order.
///
/// An empty page yields an empty list.
///
/// # Errors
///
/// Returns the first [`ExtractError`] raised by any entry.
pub fn extract_repositories(document: &Html) -> Result<Vec<Repository>, ExtractError> {
    let entries = locate_entries(document);
    debug!(count = entries.len(), "Located listing entries");

    let repositories = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| extract_repository(entry, index))
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = repositories.len(), "Extracted repositories");
    Ok(repositories)
}

/// Extracts a single entry.
///
/// `index` is the entry's zero-based rank, used in errors and logs.
///
/// # Errors
///
/// Returns [`ExtractError::MissingRequired`] or
/// [`ExtractError::InvalidLink`] when the heading link is unusable, and
/// [`ExtractError::MalformedNumber`] when a count does not parse.
pub fn extract_repository(
    entry: ElementRef<'_>,
    index: usize,
) -> Result<Repository, ExtractError> {
    let (name, href) = read_link(entry, index)?;

    let description = read_text(&DESCRIPTION, entry, index)?
        .map(|text| text.trim().to_string())
        .unwrap_or_default();
    let language = read_text(&LANGUAGE, entry, index)?.unwrap_or_default();
    let stars = read_count(&STARS, entry, index)?;
    let forks = read_count(&FORKS, entry, index)?;
    let stars_in_period = read_text(&STARS_IN_PERIOD, entry, index)?
        .map(|text| text.trim().to_string())
        .unwrap_or_default();

    debug!(entry = index, repo = %name, stars, forks, "Extracted entry");

    Ok(Repository {
        name,
        href,
        description,
        language,
        stars,
        forks,
        stars_in_period,
    })
}

/// Finds a field's node, applying its severity when the node is absent.
fn lookup<'a>(
    field: &Field,
    entry: ElementRef<'a>,
    index: usize,
) -> Result<Option<ElementRef<'a>>, ExtractError> {
    match field.path.find_first(entry) {
        None if field.severity == Severity::Required => Err(missing(field, index)),
        node => Ok(node),
    }
}

fn missing(field: &Field, index: usize) -> ExtractError {
    ExtractError::MissingRequired {
        field: field.name,
        entry: index,
    }
}

fn read_text(
    field: &Field,
    entry: ElementRef<'_>,
    index: usize,
) -> Result<Option<String>, ExtractError> {
    Ok(lookup(field, entry, index)?.map(inner_text))
}

/// Reads a count. Present text that does not parse is always fatal.
fn read_count(field: &Field, entry: ElementRef<'_>, index: usize) -> Result<u64, ExtractError> {
    let Some(text) = read_text(field, entry, index)? else {
        return Ok(0);
    };

    parse_count(&text).map_err(|source| ExtractError::MalformedNumber {
        field: field.name,
        entry: index,
        text: text.trim().to_string(),
        source,
    })
}

/// Reads the heading link and derives `(name, href)` from its target.
///
/// `name` comes from the resolved URL, so it always matches the path of
/// `href`.
fn read_link(entry: ElementRef<'_>, index: usize) -> Result<(String, String), ExtractError> {
    let link = lookup(&LINK, entry, index)?.ok_or_else(|| missing(&LINK, index))?;
    let path = link.value().attr("href").unwrap_or_default();

    let invalid = || ExtractError::InvalidLink {
        entry: index,
        href: path.to_string(),
    };

    // Dot segments are resolved away by `join`; refuse them up front.
    if path.split('/').any(is_dot_segment) {
        return Err(invalid());
    }

    let origin = Url::parse(GITHUB_ORIGIN).map_err(|_| invalid())?;
    let href = origin.join(path).map_err(|_| invalid())?;

    if href.origin() != origin.origin() || href.query().is_some() || href.fragment().is_some() {
        return Err(invalid());
    }

    let name = repository_name(&href).ok_or_else(invalid)?;
    Ok((name, href.to_string()))
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | "%2e%2e" | ".%2e" | "%2e."
    )
}

/// Converts a resolved URL such as `https://github.com/owner/repo` into
/// `owner/repo`. A single trailing slash is tolerated.
fn repository_name(url: &Url) -> Option<String> {
    let mut segments: Vec<&str> = url.path_segments()?.collect();
    if segments.len() == 3 && segments[2].is_empty() {
        segments.pop();
    }

    match segments.as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            Some(format!("{owner}/{repo}"))
        }
        _ => None,
    }
}

/// Parses a displayed count such as `"\n  1,234 "`.
fn parse_count(text: &str) -> Result<u64, ParseIntError> {
    text.chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect::<String>()
        .parse()
}

/// Concatenated text of every descendant text node.
fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
