//! CLI for gh-trending.
//!
//! Shows GitHub Trending in the terminal and opens the chosen repository in
//! the browser, or prints the list as JSON.

use clap::Parser;
use gh_trending::{
    load_defaults, OutputMode, Period, RunOutcome, Runner, RunnerConfig, RunnerError,
    TrendingQuery,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Check GitHub Trending (https://github.com/trending) in the terminal and navigate to a repository page.
#[derive(Parser, Debug)]
#[command(name = "gh-trending", author, version, about, long_about = None)]
struct Args {
    /// Programming language: go, typescript, ruby, ... anything GitHub knows.
    #[arg(short = 'l', long)]
    language: Option<String>,

    /// Spoken language code: en (English), zh (Chinese), ja (Japanese), and so on.
    #[arg(short = 's', long)]
    spoken_language: Option<String>,

    /// Date range: today, weekly or monthly.
    #[arg(short = 'p', long)]
    period: Option<Period>,

    /// Startup mode: browser (select a repository and open its page) or json.
    #[arg(short = 'm', long)]
    mode: Option<OutputMode>,

    /// HTTP timeout in seconds (at least 1).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Path to a TOML defaults file (falls back to GH_TRENDING_CONFIG).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(outcome) => {
            debug!(?outcome, "Finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting on stderr, so stdout stays clean for JSON
/// - Log level filtering via `RUST_LOG` env var (defaults to "warn")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Falls back to "warn" so the selector is not interleaved with logs
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunOutcome, RunnerError> {
    let config = build_config(args)?;
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Merges flags over the defaults file.
fn build_config(args: Args) -> Result<RunnerConfig, RunnerError> {
    let defaults = load_defaults(args.config.as_deref())?;

    let query = TrendingQuery {
        language: args.language.or(defaults.language),
        spoken_language: args.spoken_language.or(defaults.spoken_language),
        period: args.period.or(defaults.period).unwrap_or_default(),
    };
    let mode = args.mode.or(defaults.mode).unwrap_or_default();

    let mut config = RunnerConfig::new(query, mode);
    if let Some(secs) = args.timeout_secs.or(defaults.timeout_secs) {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gh-trending").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn short_flags_match_long_flags() {
        let args = parse(&["-l", "Go", "-s", "ja", "-p", "weekly", "-m", "json"]);

        assert_eq!(args.language.as_deref(), Some("Go"));
        assert_eq!(args.spoken_language.as_deref(), Some("ja"));
        assert_eq!(args.period, Some(Period::Weekly));
        assert_eq!(args.mode, Some(OutputMode::Json));
    }

    #[test]
    fn rejects_unknown_period() {
        let result = Args::try_parse_from(["gh-trending", "--period", "yearly"]);
        assert!(result.is_err());
    }

    #[test]
    fn flags_fall_back_to_builtin_defaults() {
        let temp = std::env::temp_dir().join("gh-trending-cli-missing-config.toml");
        let mut args = parse(&[]);
        args.config = Some(temp);

        let config = build_config(args).unwrap();
        assert_eq!(config.mode(), OutputMode::Browser);
        assert_eq!(config.query().period, Period::Daily);
        assert_eq!(config.query().language, None);
    }

    #[test]
    fn today_alias_is_accepted() {
        let args = parse(&["--period", "today"]);
        assert_eq!(args.period, Some(Period::Daily));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = Args::try_parse_from(["gh-trending", "--timeout-secs", "0"]);
        assert!(result.is_err());

        let args = parse(&["--timeout-secs", "5"]);
        assert_eq!(args.timeout_secs, Some(5));
    }
}
