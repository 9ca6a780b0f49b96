//! Entry point for the action-log replay tool.
//!
//! Streams a JSON-lines action log through the wire codec and reports
//! which records decode and round-trip canonically. Useful for checking
//! logs recorded by one system before feeding them to another.
//!
//! ```text
//! KINEMA_REPLAY_STRICT=1 kinema-replay session_12.jsonl
//! ```

mod config;
mod error;
mod replay;

use std::fs::File;
use std::io::BufReader;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ReplayConfig;
use crate::error::ReplayError;

/// Application entry point.
///
/// Initializes logging, loads configuration, then replays the log and
/// prints a summary.
///
/// # Errors
///
/// Returns an error if the log cannot be read or verification fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ReplayConfig::from_env_and_args()?;
    info!(
        input = %config.input_path.display(),
        strict = config.strict,
        "replaying action log"
    );

    let file = File::open(&config.input_path).map_err(ReplayError::Io)?;
    let summary = replay::replay_lines(BufReader::new(file), config.strict)?;

    info!(
        total = summary.total,
        verified = summary.verified,
        failed = summary.failed,
        mismatched = summary.mismatched,
        "replay complete"
    );

    if summary.failed > 0 || summary.mismatched > 0 {
        return Err(ReplayError::VerificationFailed {
            failed: summary.failed,
            mismatched: summary.mismatched,
        }
        .into());
    }
    Ok(())
}
