//! Error types for the kinema-types crate.
//!
//! Spatial conversions are the only fallible operations at this layer.
//! Everything else is plain value construction.

/// Errors that can occur when building spatial values from runtime data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpatialError {
    /// A component sequence had the wrong length for the target type.
    #[error("wrong component count: expected {expected}, got {actual}")]
    WrongArity {
        /// The arity the target type requires (3 for vectors, 4 for quaternions).
        expected: usize,
        /// The number of components actually supplied.
        actual: usize,
    },
}
