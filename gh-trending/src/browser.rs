//! Opens URLs in the user's default browser.

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

/// Errors that can occur while launching the browser.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The opener program could not be started.
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The opener program reported a failure.
    #[error("'{program}' exited with {status}")]
    ExitStatus {
        program: &'static str,
        status: std::process::ExitStatus,
    },
}

#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);

// The empty argument is the window title `start` expects before the URL
#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Returns the platform opener and the arguments preceding the URL.
#[must_use]
pub fn opener() -> (&'static str, &'static [&'static str]) {
    OPENER
}

/// Opens `url` with the platform's default handler.
///
/// # Errors
///
/// Returns [`BrowserError`] if the opener cannot be started or fails.
pub async fn open(url: &str) -> Result<(), BrowserError> {
    let (program, args) = opener();
    debug!(program, url, "Launching browser");

    let status = Command::new(program)
        .args(args)
        .arg(url)
        .status()
        .await
        .map_err(|source| BrowserError::Launch { program, source })?;

    if !status.success() {
        return Err(BrowserError::ExitStatus { program, status });
    }

    info!(url, "Opened in browser");
    Ok(())
}
