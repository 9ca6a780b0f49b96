//! Shared leaf types for the kinema motor action vocabulary.
//!
//! This crate holds the primitives every other workspace member builds on:
//! fixed-arity spatial values and the opaque agent identifier. It has no
//! knowledge of the action catalog or the wire codec.
//!
//! # Modules
//!
//! - [`ids`] -- The opaque [`AgentId`] wrapper
//! - [`spatial`] -- [`VectorXYZ`] and [`QuaternionWXYZ`] fixed-arity values
//! - [`error`] -- Typed errors for spatial conversions

pub mod error;
pub mod ids;
pub mod spatial;

pub use error::SpatialError;
pub use ids::AgentId;
pub use spatial::{QuaternionWXYZ, VectorXYZ};
