//! Selector error types.

use crate::templates::TemplateError;
use thiserror::Error;

/// Errors that can occur while running the interactive selector.
#[derive(Debug, Error)]
pub enum SelectError {
    /// Reading input or writing the list failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A display template failed to render.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
