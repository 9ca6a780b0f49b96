//! Bidirectional wire codec for the action vocabulary.
//!
//! The wire format is a flat JSON object: the `"action"` key holds the
//! derived discriminator token, `"agent_id"` the target agent, and the
//! remaining keys are exactly the variant's declared fields. Spatial
//! values are flat number arrays. Encoding walks the model's field
//! enumeration; decoding resolves the discriminator through
//! [`ActionKind::from_name`] and runs one constructor arm per variant.
//!
//! Both directions are ordinary synchronous functions over explicit
//! values: no global codec state, no hooks, no logging, no recovery.
//! Decoding is all-or-nothing per call.

use serde_json::{Map, Value};

use kinema_types::{AgentId, QuaternionWXYZ, SpatialError, VectorXYZ};

use crate::action::{
    ACTION_KEY, AGENT_ID_KEY, Action, ActionKind, LookDown, LookUp, MoveForward, MoveTangentially,
    OrientHorizontal, OrientVertical, SetAgentPitch, SetAgentPose, SetSensorPitch, SetSensorPose,
    SetSensorRotation, SetYaw, TurnLeft, TurnRight,
};
use crate::error::DecodeError;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode an action into an ordered wire object.
///
/// The first key is `"action"` with the derived name, then `"agent_id"`,
/// then every declared field in declaration order. No field is omitted,
/// renamed, or reordered; no variant is special-cased beyond the model's
/// own field enumeration.
pub fn encode(action: &Action) -> Map<String, Value> {
    action
        .entries()
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

/// Encode an action to JSON text.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if serialization fails.
pub fn encode_to_string(action: &Action) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Value::Object(encode(action)))
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode a wire object back into the action it represents.
///
/// Keys the identified variant does not declare are ignored; keys it does
/// declare are mandatory and type-checked. See [`DecodeError`] for the
/// failure taxonomy.
pub fn decode(object: &Map<String, Value>) -> Result<Action, DecodeError> {
    let discriminator = object
        .get(ACTION_KEY)
        .ok_or(DecodeError::MissingDiscriminator)?;
    let Some(token) = discriminator.as_str() else {
        return Err(DecodeError::UnknownAction {
            name: discriminator.to_string(),
        });
    };
    let kind = ActionKind::from_name(token).ok_or_else(|| DecodeError::UnknownAction {
        name: token.to_owned(),
    })?;
    decode_fields(kind, object)
}

/// Decode a JSON value that must be a wire object.
pub fn decode_value(value: &Value) -> Result<Action, DecodeError> {
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;
    decode(object)
}

/// Decode JSON text holding a single wire object.
pub fn decode_str(raw: &str) -> Result<Action, DecodeError> {
    let value: Value = serde_json::from_str(raw)?;
    decode_value(&value)
}

/// Run the constructor arm for the resolved variant kind.
///
/// One arm per variant: adding a variant means adding an arm here plus an
/// [`ActionKind`] entry, never touching the dispatch algorithm.
fn decode_fields(kind: ActionKind, object: &Map<String, Value>) -> Result<Action, DecodeError> {
    let agent_id = require_agent_id(kind, object)?;
    match kind {
        ActionKind::LookDown => Ok(LookDown::with_constraint(
            agent_id,
            require_f64(kind, object, "rotation_degrees")?,
            require_f64(kind, object, "constraint_degrees")?,
        )
        .into()),
        ActionKind::LookUp => Ok(LookUp::with_constraint(
            agent_id,
            require_f64(kind, object, "rotation_degrees")?,
            require_f64(kind, object, "constraint_degrees")?,
        )
        .into()),
        ActionKind::MoveForward => Ok(MoveForward::new(
            agent_id,
            require_f64(kind, object, "distance")?,
        )
        .into()),
        ActionKind::MoveTangentially => Ok(MoveTangentially::new(
            agent_id,
            require_f64(kind, object, "distance")?,
            require_vector(kind, object, "direction")?,
        )
        .into()),
        ActionKind::OrientHorizontal => Ok(OrientHorizontal::new(
            agent_id,
            require_f64(kind, object, "rotation_degrees")?,
            require_f64(kind, object, "left_distance")?,
            require_f64(kind, object, "forward_distance")?,
        )
        .into()),
        ActionKind::OrientVertical => Ok(OrientVertical::new(
            agent_id,
            require_f64(kind, object, "rotation_degrees")?,
            require_f64(kind, object, "down_distance")?,
            require_f64(kind, object, "forward_distance")?,
        )
        .into()),
        ActionKind::SetAgentPitch => Ok(SetAgentPitch::new(
            agent_id,
            require_f64(kind, object, "pitch_degrees")?,
        )
        .into()),
        ActionKind::SetAgentPose => Ok(SetAgentPose::new(
            agent_id,
            require_vector(kind, object, "location")?,
            require_quaternion(kind, object, "rotation_quat")?,
        )
        .into()),
        ActionKind::SetSensorPitch => Ok(SetSensorPitch::new(
            agent_id,
            require_f64(kind, object, "pitch_degrees")?,
        )
        .into()),
        ActionKind::SetSensorPose => Ok(SetSensorPose::new(
            agent_id,
            require_vector(kind, object, "location")?,
            require_quaternion(kind, object, "rotation_quat")?,
        )
        .into()),
        ActionKind::SetSensorRotation => Ok(SetSensorRotation::new(
            agent_id,
            require_quaternion(kind, object, "rotation_quat")?,
        )
        .into()),
        ActionKind::SetYaw => Ok(SetYaw::new(
            agent_id,
            require_f64(kind, object, "rotation_degrees")?,
        )
        .into()),
        ActionKind::TurnLeft => Ok(TurnLeft::new(
            agent_id,
            require_f64(kind, object, "rotation_degrees")?,
        )
        .into()),
        ActionKind::TurnRight => Ok(TurnRight::new(
            agent_id,
            require_f64(kind, object, "rotation_degrees")?,
        )
        .into()),
    }
}

// ---------------------------------------------------------------------------
// Field extraction
// ---------------------------------------------------------------------------

/// Look up a required field by exact key.
fn require<'a>(
    kind: ActionKind,
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, DecodeError> {
    object.get(field).ok_or_else(|| DecodeError::MissingField {
        action: kind.name(),
        field,
    })
}

/// Extract the mandatory agent identifier.
fn require_agent_id(kind: ActionKind, object: &Map<String, Value>) -> Result<AgentId, DecodeError> {
    let value = require(kind, object, AGENT_ID_KEY)?;
    value
        .as_str()
        .map(AgentId::from)
        .ok_or_else(|| DecodeError::InvalidField {
            action: kind.name(),
            field: AGENT_ID_KEY,
            expected: "string",
        })
}

/// Extract a required numeric field.
fn require_f64(
    kind: ActionKind,
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, DecodeError> {
    let value = require(kind, object, field)?;
    value.as_f64().ok_or_else(|| DecodeError::InvalidField {
        action: kind.name(),
        field,
        expected: "number",
    })
}

/// Extract a required field as a sequence of numbers.
fn require_components(
    kind: ActionKind,
    object: &Map<String, Value>,
    field: &'static str,
    expected: &'static str,
) -> Result<Vec<f64>, DecodeError> {
    let value = require(kind, object, field)?;
    let invalid = || DecodeError::InvalidField {
        action: kind.name(),
        field,
        expected,
    };
    let sequence = value.as_array().ok_or_else(invalid)?;
    sequence
        .iter()
        .map(Value::as_f64)
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(invalid)
}

/// Extract a required vector field, enforcing arity 3.
fn require_vector(
    kind: ActionKind,
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<VectorXYZ, DecodeError> {
    let expected = "numeric sequence of length 3";
    let components = require_components(kind, object, field, expected)?;
    match VectorXYZ::from_slice(&components) {
        Ok(vector) => Ok(vector),
        Err(SpatialError::WrongArity { .. }) => Err(DecodeError::InvalidField {
            action: kind.name(),
            field,
            expected,
        }),
    }
}

/// Extract a required quaternion field, enforcing arity 4.
fn require_quaternion(
    kind: ActionKind,
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<QuaternionWXYZ, DecodeError> {
    let expected = "numeric sequence of length 4";
    let components = require_components(kind, object, field, expected)?;
    match QuaternionWXYZ::from_slice(&components) {
        Ok(quaternion) => Ok(quaternion),
        Err(SpatialError::WrongArity { .. }) => Err(DecodeError::InvalidField {
            action: kind.name(),
            field,
            expected,
        }),
    }
}
