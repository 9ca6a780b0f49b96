//! Configuration for the replay tool.
//!
//! The input path comes from the command line; behavior toggles come from
//! environment variables, matching how the rest of the workspace's tools
//! are configured in deployment.

use std::env;
use std::path::PathBuf;

use crate::error::ReplayError;

/// Complete replay configuration.
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Path to the JSON-lines action log to verify.
    pub input_path: PathBuf,
    /// Abort at the first failing line instead of counting failures.
    pub strict: bool,
}

impl ReplayConfig {
    /// Load configuration from the process arguments and environment.
    ///
    /// The first argument is the action log path (required). Optional
    /// variables:
    /// - `KINEMA_REPLAY_STRICT` -- abort on the first failure when set to
    ///   `1`, `true`, or `yes`.
    pub fn from_env_and_args() -> Result<Self, ReplayError> {
        let input_path = env::args()
            .nth(1)
            .map(PathBuf::from)
            .ok_or_else(|| ReplayError::Config("usage: kinema-replay <actions.jsonl>".to_owned()))?;
        let strict = env::var("KINEMA_REPLAY_STRICT")
            .is_ok_and(|value| parse_toggle(&value));
        Ok(Self { input_path, strict })
    }
}

/// Interpret an environment toggle value.
fn parse_toggle(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_accepts_common_truthy_spellings() {
        assert!(parse_toggle("1"));
        assert!(parse_toggle("true"));
        assert!(parse_toggle("YES"));
        assert!(parse_toggle(" true "));
    }

    #[test]
    fn toggle_rejects_everything_else() {
        assert!(!parse_toggle("0"));
        assert!(!parse_toggle("false"));
        assert!(!parse_toggle(""));
        assert!(!parse_toggle("on"));
    }
}
