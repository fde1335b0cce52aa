//! Extraction error types.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors that abort a whole extraction call.
///
/// Any of these discards the records extracted so far.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input contained no markup at all.
    #[error("Document is empty")]
    EmptyDocument,

    /// A required field was not found; the page layout has likely changed.
    #[error("Required field '{field}' cannot be found in entry {entry}")]
    MissingRequired { field: &'static str, entry: usize },

    /// The primary link does not point at an "owner/repo" path.
    #[error("Repository link '{href}' in entry {entry} is not an owner/repo path")]
    InvalidLink { entry: usize, href: String },

    /// A numeric field was present but did not hold a non-negative integer.
    #[error("Field '{field}' in entry {entry} is not a count: '{text}'")]
    MalformedNumber {
        field: &'static str,
        entry: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}
