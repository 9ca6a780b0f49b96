//! The kinema motor action vocabulary and its wire codec.
//!
//! A closed set of fourteen motor actions an agent can issue (movement,
//! rotation, pose-setting), plus the bidirectional codec between typed
//! action values and the flat JSON wire objects used for transport and
//! storage. Sampling and actuation are capability interfaces implemented
//! by the embedding system, never here.
//!
//! # Modules
//!
//! - [`action`] -- The variant records, [`Action`] sum type, and name derivation
//! - [`codec`] -- `encode`/`decode` over flat JSON objects
//! - [`error`] -- The decode failure taxonomy
//! - [`motor`] -- [`ActionSampler`] and [`Actuator`] capability traits
//!
//! # Example
//!
//! ```
//! use kinema_actions::{Action, MoveForward, codec};
//! use kinema_types::AgentId;
//!
//! let action = Action::from(MoveForward::new(AgentId::new("agent_01"), 0.25));
//! let wire = codec::encode(&action);
//! assert_eq!(wire.get("action"), Some(&serde_json::json!("move_forward")));
//! let restored = codec::decode(&wire)?;
//! assert_eq!(restored, action);
//! # Ok::<(), kinema_actions::DecodeError>(())
//! ```

pub mod action;
pub mod codec;
pub mod error;
pub mod motor;

pub use action::{
    ACTION_KEY, AGENT_ID_KEY, Action, ActionKind, DEFAULT_CONSTRAINT_DEGREES, LookDown, LookUp,
    MoveForward, MoveTangentially, OrientHorizontal, OrientVertical, SetAgentPitch, SetAgentPose,
    SetSensorPitch, SetSensorPose, SetSensorRotation, SetYaw, TurnLeft, TurnRight, derive_name,
};
pub use codec::{decode, decode_str, decode_value, encode, encode_to_string};
pub use error::DecodeError;
pub use motor::{ActionSampler, Actuator};
