//! Fixed-arity spatial values used as action parameters.
//!
//! Both types are order-significant component tuples: [`VectorXYZ`] is
//! (x, y, z) and [`QuaternionWXYZ`] is (w, x, y, z). On the wire they are
//! flat JSON number arrays, never keyed objects. No vector algebra lives
//! here; downstream actuators interpret the components.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SpatialError;

/// A displacement, location, or direction in 3-space: (x, y, z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorXYZ(pub [f64; 3]);

impl VectorXYZ {
    /// Number of components in a vector.
    pub const ARITY: usize = 3;

    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    /// The x component.
    pub const fn x(&self) -> f64 {
        self.0[0]
    }

    /// The y component.
    pub const fn y(&self) -> f64 {
        self.0[1]
    }

    /// The z component.
    pub const fn z(&self) -> f64 {
        self.0[2]
    }

    /// Return the components as an ordered array.
    pub const fn as_array(&self) -> &[f64; 3] {
        &self.0
    }

    /// Build a vector from a runtime component sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::WrongArity`] unless exactly three components
    /// are supplied. The sequence is never truncated or padded.
    pub fn from_slice(components: &[f64]) -> Result<Self, SpatialError> {
        match <[f64; 3]>::try_from(components) {
            Ok(array) => Ok(Self(array)),
            Err(_) => Err(SpatialError::WrongArity {
                expected: Self::ARITY,
                actual: components.len(),
            }),
        }
    }
}

impl From<[f64; 3]> for VectorXYZ {
    fn from(components: [f64; 3]) -> Self {
        Self(components)
    }
}

impl From<VectorXYZ> for Value {
    fn from(vector: VectorXYZ) -> Self {
        Self::from(vector.0.to_vec())
    }
}

/// An orientation in 3-space as a quaternion: (w, x, y, z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuaternionWXYZ(pub [f64; 4]);

impl QuaternionWXYZ {
    /// Number of components in a quaternion.
    pub const ARITY: usize = 4;

    /// Create a quaternion from its components.
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self([w, x, y, z])
    }

    /// The scalar (w) component.
    pub const fn w(&self) -> f64 {
        self.0[0]
    }

    /// The x component.
    pub const fn x(&self) -> f64 {
        self.0[1]
    }

    /// The y component.
    pub const fn y(&self) -> f64 {
        self.0[2]
    }

    /// The z component.
    pub const fn z(&self) -> f64 {
        self.0[3]
    }

    /// Return the components as an ordered array.
    pub const fn as_array(&self) -> &[f64; 4] {
        &self.0
    }

    /// Build a quaternion from a runtime component sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::WrongArity`] unless exactly four components
    /// are supplied.
    pub fn from_slice(components: &[f64]) -> Result<Self, SpatialError> {
        match <[f64; 4]>::try_from(components) {
            Ok(array) => Ok(Self(array)),
            Err(_) => Err(SpatialError::WrongArity {
                expected: Self::ARITY,
                actual: components.len(),
            }),
        }
    }
}

impl From<[f64; 4]> for QuaternionWXYZ {
    fn from(components: [f64; 4]) -> Self {
        Self(components)
    }
}

impl From<QuaternionWXYZ> for Value {
    fn from(quaternion: QuaternionWXYZ) -> Self {
        Self::from(quaternion.0.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_components_are_ordered() {
        let v = VectorXYZ::new(1.0, 2.0, 3.0);
        assert!((v.x() - 1.0).abs() < f64::EPSILON);
        assert!((v.y() - 2.0).abs() < f64::EPSILON);
        assert!((v.z() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quaternion_components_are_ordered() {
        let q = QuaternionWXYZ::new(1.0, 0.0, 0.5, 0.0);
        assert!((q.w() - 1.0).abs() < f64::EPSILON);
        assert!((q.y() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn vector_serializes_as_flat_array() {
        let v = VectorXYZ::new(0.0, 1.0, 0.0);
        let json = serde_json::to_string(&v).ok();
        assert_eq!(json.as_deref(), Some("[0.0,1.0,0.0]"));
    }

    #[test]
    fn quaternion_serializes_as_flat_array() {
        let q = QuaternionWXYZ::new(1.0, 0.0, 0.0, 0.0);
        let json = serde_json::to_string(&q).ok();
        assert_eq!(json.as_deref(), Some("[1.0,0.0,0.0,0.0]"));
    }

    #[test]
    fn vector_deserializes_from_array() {
        let parsed: Result<VectorXYZ, _> = serde_json::from_str("[0.5, -1.5, 2.0]");
        assert_eq!(parsed.ok(), Some(VectorXYZ::new(0.5, -1.5, 2.0)));
    }

    #[test]
    fn from_slice_enforces_vector_arity() {
        assert_eq!(
            VectorXYZ::from_slice(&[1.0, 2.0]),
            Err(SpatialError::WrongArity {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            VectorXYZ::from_slice(&[1.0, 2.0, 3.0, 4.0]),
            Err(SpatialError::WrongArity {
                expected: 3,
                actual: 4
            })
        );
        assert_eq!(
            VectorXYZ::from_slice(&[1.0, 2.0, 3.0]),
            Ok(VectorXYZ::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn from_slice_enforces_quaternion_arity() {
        assert_eq!(
            QuaternionWXYZ::from_slice(&[1.0, 0.0, 0.0]),
            Err(SpatialError::WrongArity {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            QuaternionWXYZ::from_slice(&[1.0, 0.0, 0.0, 0.0]),
            Ok(QuaternionWXYZ::new(1.0, 0.0, 0.0, 0.0))
        );
    }

    #[test]
    fn json_value_conversion_is_flat() {
        let value = Value::from(VectorXYZ::new(0.0, 1.0, 0.0));
        assert_eq!(value, serde_json::json!([0.0, 1.0, 0.0]));
        let value = Value::from(QuaternionWXYZ::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(value, serde_json::json!([1.0, 0.0, 0.0, 0.0]));
    }
}
