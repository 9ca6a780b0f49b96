//! Error types for the replay tool.

use kinema_actions::DecodeError;

/// Errors that can occur while replaying an action log.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// The action log could not be read.
    #[error("I/O error reading action log: {0}")]
    Io(#[from] std::io::Error),

    /// A log line failed to decode (strict mode only; otherwise counted).
    #[error("line {line}: {source}")]
    Decode {
        /// 1-based line number in the log.
        line: usize,
        /// The underlying decode failure.
        #[source]
        source: DecodeError,
    },

    /// A decoded line did not re-encode to the original object
    /// (strict mode only; otherwise counted).
    #[error("line {line}: re-encoded object differs from the log record")]
    RoundTripMismatch {
        /// 1-based line number in the log.
        line: usize,
    },

    /// The log contained failures in non-strict mode.
    #[error("verification failed: {failed} undecodable, {mismatched} non-canonical")]
    VerificationFailed {
        /// Lines that did not decode.
        failed: usize,
        /// Lines that decoded but did not round-trip byte-for-byte.
        mismatched: usize,
    },
}
