//! Error types for the kinema-actions crate.
//!
//! Decoding is the only fallible surface. Every failure mode is a distinct
//! variant surfaced immediately to the caller: nothing is retried, logged,
//! or partially recovered, and a partially valid wire object never yields
//! a partially valid action.

/// Errors that can occur while decoding a wire object into an action.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The wire object lacks the `"action"` discriminator key.
    #[error("invalid action object: missing 'action' key")]
    MissingDiscriminator,

    /// The discriminator value matches no entry in the dispatch table.
    #[error("invalid action object: unknown action '{name}'")]
    UnknownAction {
        /// The unrecognized discriminator value.
        name: String,
    },

    /// A field required by the identified variant is absent.
    #[error("invalid '{action}' object: missing required field '{field}'")]
    MissingField {
        /// The wire name of the variant being decoded.
        action: String,
        /// The absent field key.
        field: &'static str,
    },

    /// A required field is present but has the wrong shape or type.
    #[error("invalid '{action}' object: field '{field}' is not a {expected}")]
    InvalidField {
        /// The wire name of the variant being decoded.
        action: String,
        /// The offending field key.
        field: &'static str,
        /// Description of the shape the field must have.
        expected: &'static str,
    },

    /// The top-level wire value is not a JSON object.
    #[error("invalid action payload: expected a JSON object")]
    NotAnObject,

    /// The wire text is not valid JSON at all.
    #[error("malformed action JSON: {0}")]
    Json(#[from] serde_json::Error),
}
