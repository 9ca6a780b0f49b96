//! The line-by-line verification loop.
//!
//! Each non-empty log line must hold one wire object. A line passes when
//! it decodes into an action and re-encoding that action reproduces the
//! parsed record exactly, which catches both undecodable records and
//! records carrying drifted or extra keys.

use std::io::BufRead;

use serde_json::Value;
use tracing::{debug, warn};

use kinema_actions::codec;

use crate::error::ReplayError;

/// Counters accumulated over one replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Non-empty lines processed.
    pub total: usize,
    /// Lines that decoded and re-encoded canonically.
    pub verified: usize,
    /// Lines that failed to decode.
    pub failed: usize,
    /// Lines that decoded but did not reproduce the original record.
    pub mismatched: usize,
}

/// Replay every line of the reader through the codec.
///
/// In strict mode the first failing line aborts the run with its error;
/// otherwise failures are logged, counted, and the run continues.
///
/// # Errors
///
/// Returns [`ReplayError::Io`] on read failures, and in strict mode
/// [`ReplayError::Decode`] or [`ReplayError::RoundTripMismatch`] for the
/// first failing line.
pub fn replay_lines<R: BufRead>(reader: R, strict: bool) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        let number = index.saturating_add(1);
        summary.total = summary.total.saturating_add(1);

        match verify_record(record) {
            Ok(name) => {
                summary.verified = summary.verified.saturating_add(1);
                debug!(line = number, action = %name, "record verified");
            }
            Err(RecordFailure::Decode(source)) => {
                summary.failed = summary.failed.saturating_add(1);
                warn!(line = number, error = %source, "record failed to decode");
                if strict {
                    return Err(ReplayError::Decode {
                        line: number,
                        source,
                    });
                }
            }
            Err(RecordFailure::Mismatch) => {
                summary.mismatched = summary.mismatched.saturating_add(1);
                warn!(line = number, "record is not canonical");
                if strict {
                    return Err(ReplayError::RoundTripMismatch { line: number });
                }
            }
        }
    }
    Ok(summary)
}

/// Why a single record failed verification.
enum RecordFailure {
    /// The record did not decode into an action.
    Decode(kinema_actions::DecodeError),
    /// The record decoded, but re-encoding produced a different object.
    Mismatch,
}

/// Verify one record; returns the action's wire name on success.
fn verify_record(record: &str) -> Result<String, RecordFailure> {
    let original: Value = match serde_json::from_str(record) {
        Ok(value) => value,
        Err(source) => return Err(RecordFailure::Decode(source.into())),
    };
    let action = codec::decode_value(&original).map_err(RecordFailure::Decode)?;
    if Value::Object(codec::encode(&action)) == original {
        Ok(action.name())
    } else {
        Err(RecordFailure::Mismatch)
    }
}
