//! JSON export of repository lists.

use crate::repository::Repository;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Indentation used for exported JSON.
const INDENT: &[u8] = b"    ";

/// Encodes repositories as a JSON array indented by four spaces.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialization fails.
pub fn to_json(repositories: &[Repository]) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    repositories.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
