//! The closed vocabulary of motor actions.
//!
//! Every action an agent can issue is one of the fourteen record types
//! defined here, wrapped in the [`Action`] sum type. Each record carries
//! the [`AgentId`] of the controlled agent plus its own parameter fields;
//! all fields are set at construction and never mutated.
//!
//! An action's public name doubles as its wire discriminator. It is never
//! stored: [`derive_name`] computes it from the variant's type identifier,
//! so the name cannot drift from the variant it belongs to.

use serde_json::Value;

use kinema_types::{AgentId, QuaternionWXYZ, VectorXYZ};

use crate::motor::{ActionSampler, Actuator};

/// Wire key holding the action discriminator.
pub const ACTION_KEY: &str = "action";

/// Wire key holding the agent identifier.
pub const AGENT_ID_KEY: &str = "agent_id";

/// Default pitch constraint, in degrees, for [`LookDown`] and [`LookUp`].
pub const DEFAULT_CONSTRAINT_DEGREES: f64 = 90.0;

// ---------------------------------------------------------------------------
// Name derivation
// ---------------------------------------------------------------------------

/// Derive the canonical wire token from a variant's type identifier.
///
/// Inserts an underscore before every uppercase letter except a leading
/// one and lowercases everything: `LookDown` becomes `look_down`,
/// `SetSensorPitch` becomes `set_sensor_pitch`. Deterministic and total;
/// the result is the single source of truth for both the public action
/// name and the wire discriminator.
pub fn derive_name(identifier: &str) -> String {
    let mut name = String::with_capacity(identifier.len().saturating_add(4));
    for (index, ch) in identifier.chars().enumerate() {
        if ch.is_uppercase() {
            if index > 0 {
                name.push('_');
            }
            name.extend(ch.to_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

// ---------------------------------------------------------------------------
// Variant kinds
// ---------------------------------------------------------------------------

/// The closed set of action variants, without their parameters.
///
/// This is the identity half of the vocabulary: [`ActionKind`] names a
/// variant, the record structs below carry its data. The set is exhaustive
/// by construction; no undeclared variant can appear on the wire or in
/// memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    /// Pitch the agent downward.
    LookDown,
    /// Pitch the agent upward.
    LookUp,
    /// Translate the agent along its forward axis.
    MoveForward,
    /// Translate the agent tangentially to its orientation.
    MoveTangentially,
    /// Translate in the horizontal plane with a compensating rotation.
    OrientHorizontal,
    /// Translate in the vertical plane with a compensating rotation.
    OrientVertical,
    /// Set the agent's absolute pitch.
    SetAgentPitch,
    /// Set the agent's absolute pose.
    SetAgentPose,
    /// Set a sensor's absolute pitch.
    SetSensorPitch,
    /// Set a sensor's absolute pose.
    SetSensorPose,
    /// Set a sensor's rotation relative to the agent.
    SetSensorRotation,
    /// Set the agent's absolute yaw.
    SetYaw,
    /// Yaw the agent to the left.
    TurnLeft,
    /// Yaw the agent to the right.
    TurnRight,
}

impl ActionKind {
    /// Every variant kind, in canonical declaration order.
    pub const ALL: [Self; 14] = [
        Self::LookDown,
        Self::LookUp,
        Self::MoveForward,
        Self::MoveTangentially,
        Self::OrientHorizontal,
        Self::OrientVertical,
        Self::SetAgentPitch,
        Self::SetAgentPose,
        Self::SetSensorPitch,
        Self::SetSensorPose,
        Self::SetSensorRotation,
        Self::SetYaw,
        Self::TurnLeft,
        Self::TurnRight,
    ];

    /// The variant's type identifier, as declared.
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::LookDown => "LookDown",
            Self::LookUp => "LookUp",
            Self::MoveForward => "MoveForward",
            Self::MoveTangentially => "MoveTangentially",
            Self::OrientHorizontal => "OrientHorizontal",
            Self::OrientVertical => "OrientVertical",
            Self::SetAgentPitch => "SetAgentPitch",
            Self::SetAgentPose => "SetAgentPose",
            Self::SetSensorPitch => "SetSensorPitch",
            Self::SetSensorPose => "SetSensorPose",
            Self::SetSensorRotation => "SetSensorRotation",
            Self::SetYaw => "SetYaw",
            Self::TurnLeft => "TurnLeft",
            Self::TurnRight => "TurnRight",
        }
    }

    /// The variant's canonical wire token, derived from its identifier.
    pub fn name(self) -> String {
        derive_name(self.identifier())
    }

    /// Resolve a wire token back to its variant kind.
    ///
    /// Total over the fourteen derived tokens; anything else is `None`.
    /// This lookup is the dispatch table the decoder runs on.
    pub fn from_name(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == token)
    }

    /// Ask the sampler for an instance of exactly this variant.
    pub fn sample(self, agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Action {
        match self {
            Self::LookDown => LookDown::sample(agent_id, sampler).into(),
            Self::LookUp => LookUp::sample(agent_id, sampler).into(),
            Self::MoveForward => MoveForward::sample(agent_id, sampler).into(),
            Self::MoveTangentially => MoveTangentially::sample(agent_id, sampler).into(),
            Self::OrientHorizontal => OrientHorizontal::sample(agent_id, sampler).into(),
            Self::OrientVertical => OrientVertical::sample(agent_id, sampler).into(),
            Self::SetAgentPitch => SetAgentPitch::sample(agent_id, sampler).into(),
            Self::SetAgentPose => SetAgentPose::sample(agent_id, sampler).into(),
            Self::SetSensorPitch => SetSensorPitch::sample(agent_id, sampler).into(),
            Self::SetSensorPose => SetSensorPose::sample(agent_id, sampler).into(),
            Self::SetSensorRotation => SetSensorRotation::sample(agent_id, sampler).into(),
            Self::SetYaw => SetYaw::sample(agent_id, sampler).into(),
            Self::TurnLeft => TurnLeft::sample(agent_id, sampler).into(),
            Self::TurnRight => TurnRight::sample(agent_id, sampler).into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Variant records
// ---------------------------------------------------------------------------

/// Pitch the agent downward by a rotation in degrees.
///
/// The rotation is clamped by the actuator to `constraint_degrees` of
/// total downward pitch; the record only transports both values.
#[derive(Debug, Clone, PartialEq)]
pub struct LookDown {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Downward rotation to apply, in degrees.
    pub rotation_degrees: f64,
    /// Maximum total downward pitch, in degrees.
    pub constraint_degrees: f64,
}

impl LookDown {
    /// Create with the default constraint of [`DEFAULT_CONSTRAINT_DEGREES`].
    pub const fn new(agent_id: AgentId, rotation_degrees: f64) -> Self {
        Self::with_constraint(agent_id, rotation_degrees, DEFAULT_CONSTRAINT_DEGREES)
    }

    /// Create with an explicit pitch constraint.
    pub const fn with_constraint(
        agent_id: AgentId,
        rotation_degrees: f64,
        constraint_degrees: f64,
    ) -> Self {
        Self {
            agent_id,
            rotation_degrees,
            constraint_degrees,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_look_down(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_look_down(self);
    }
}

/// Pitch the agent upward by a rotation in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct LookUp {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Upward rotation to apply, in degrees.
    pub rotation_degrees: f64,
    /// Maximum total upward pitch, in degrees.
    pub constraint_degrees: f64,
}

impl LookUp {
    /// Create with the default constraint of [`DEFAULT_CONSTRAINT_DEGREES`].
    pub const fn new(agent_id: AgentId, rotation_degrees: f64) -> Self {
        Self::with_constraint(agent_id, rotation_degrees, DEFAULT_CONSTRAINT_DEGREES)
    }

    /// Create with an explicit pitch constraint.
    pub const fn with_constraint(
        agent_id: AgentId,
        rotation_degrees: f64,
        constraint_degrees: f64,
    ) -> Self {
        Self {
            agent_id,
            rotation_degrees,
            constraint_degrees,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_look_up(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_look_up(self);
    }
}

/// Translate the agent forward by a distance in its own units.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveForward {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Distance to travel along the forward axis.
    pub distance: f64,
}

impl MoveForward {
    /// Create a forward translation.
    pub const fn new(agent_id: AgentId, distance: f64) -> Self {
        Self { agent_id, distance }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_move_forward(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_move_forward(self);
    }
}

/// Translate the agent tangentially to its current orientation.
///
/// `direction` selects the tangent along which the `distance` is applied;
/// it is carried verbatim, not normalized here.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveTangentially {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Distance to travel along the tangent.
    pub distance: f64,
    /// Tangent direction, as (x, y, z).
    pub direction: VectorXYZ,
}

impl MoveTangentially {
    /// Create a tangential translation.
    pub const fn new(agent_id: AgentId, distance: f64, direction: VectorXYZ) -> Self {
        Self {
            agent_id,
            distance,
            direction,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_move_tangentially(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_move_tangentially(self);
    }
}

/// Translate in the horizontal plane while rotating to compensate.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientHorizontal {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Compensating rotation in the horizontal plane, in degrees.
    pub rotation_degrees: f64,
    /// Distance to translate leftward.
    pub left_distance: f64,
    /// Distance to translate forward.
    pub forward_distance: f64,
}

impl OrientHorizontal {
    /// Create a horizontal orientation move.
    pub const fn new(
        agent_id: AgentId,
        rotation_degrees: f64,
        left_distance: f64,
        forward_distance: f64,
    ) -> Self {
        Self {
            agent_id,
            rotation_degrees,
            left_distance,
            forward_distance,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_orient_horizontal(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_orient_horizontal(self);
    }
}

/// Translate in the vertical plane while rotating to compensate.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientVertical {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Compensating rotation in the vertical plane, in degrees.
    pub rotation_degrees: f64,
    /// Distance to translate downward.
    pub down_distance: f64,
    /// Distance to translate forward.
    pub forward_distance: f64,
}

impl OrientVertical {
    /// Create a vertical orientation move.
    pub const fn new(
        agent_id: AgentId,
        rotation_degrees: f64,
        down_distance: f64,
        forward_distance: f64,
    ) -> Self {
        Self {
            agent_id,
            rotation_degrees,
            down_distance,
            forward_distance,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_orient_vertical(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_orient_vertical(self);
    }
}

/// Set the agent body's absolute pitch, in degrees.
///
/// Sensors keep their orientation relative to the agent, so this shifts
/// their environment-relative pitch as well.
#[derive(Debug, Clone, PartialEq)]
pub struct SetAgentPitch {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Absolute pitch to assume, in degrees.
    pub pitch_degrees: f64,
}

impl SetAgentPitch {
    /// Create an absolute agent pitch assignment.
    pub const fn new(agent_id: AgentId, pitch_degrees: f64) -> Self {
        Self {
            agent_id,
            pitch_degrees,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_set_agent_pitch(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_set_agent_pitch(self);
    }
}

/// Set the agent's absolute pose: location plus orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct SetAgentPose {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Absolute location in environment coordinates.
    pub location: VectorXYZ,
    /// Absolute orientation, as (w, x, y, z).
    pub rotation_quat: QuaternionWXYZ,
}

impl SetAgentPose {
    /// Create an absolute agent pose assignment.
    pub const fn new(
        agent_id: AgentId,
        location: VectorXYZ,
        rotation_quat: QuaternionWXYZ,
    ) -> Self {
        Self {
            agent_id,
            location,
            rotation_quat,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_set_agent_pose(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_set_agent_pose(self);
    }
}

/// Set a sensor's absolute pitch without moving the agent body.
#[derive(Debug, Clone, PartialEq)]
pub struct SetSensorPitch {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Absolute pitch to assume, in degrees.
    pub pitch_degrees: f64,
}

impl SetSensorPitch {
    /// Create an absolute sensor pitch assignment.
    pub const fn new(agent_id: AgentId, pitch_degrees: f64) -> Self {
        Self {
            agent_id,
            pitch_degrees,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_set_sensor_pitch(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_set_sensor_pitch(self);
    }
}

/// Set a sensor's absolute pose: location plus orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct SetSensorPose {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Absolute location in environment coordinates.
    pub location: VectorXYZ,
    /// Absolute orientation, as (w, x, y, z).
    pub rotation_quat: QuaternionWXYZ,
}

impl SetSensorPose {
    /// Create an absolute sensor pose assignment.
    pub const fn new(
        agent_id: AgentId,
        location: VectorXYZ,
        rotation_quat: QuaternionWXYZ,
    ) -> Self {
        Self {
            agent_id,
            location,
            rotation_quat,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_set_sensor_pose(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_set_sensor_pose(self);
    }
}

/// Set a sensor's rotation relative to the agent.
#[derive(Debug, Clone, PartialEq)]
pub struct SetSensorRotation {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Agent-relative orientation, as (w, x, y, z).
    pub rotation_quat: QuaternionWXYZ,
}

impl SetSensorRotation {
    /// Create an agent-relative sensor rotation assignment.
    pub const fn new(agent_id: AgentId, rotation_quat: QuaternionWXYZ) -> Self {
        Self {
            agent_id,
            rotation_quat,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_set_sensor_rotation(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_set_sensor_rotation(self);
    }
}

/// Set the agent body's absolute yaw, in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct SetYaw {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Absolute yaw to assume, in degrees.
    pub rotation_degrees: f64,
}

impl SetYaw {
    /// Create an absolute yaw assignment.
    pub const fn new(agent_id: AgentId, rotation_degrees: f64) -> Self {
        Self {
            agent_id,
            rotation_degrees,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_set_yaw(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_set_yaw(self);
    }
}

/// Yaw the agent leftward by a rotation in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnLeft {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Leftward rotation to apply, in degrees.
    pub rotation_degrees: f64,
}

impl TurnLeft {
    /// Create a leftward turn.
    pub const fn new(agent_id: AgentId, rotation_degrees: f64) -> Self {
        Self {
            agent_id,
            rotation_degrees,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_turn_left(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_turn_left(self);
    }
}

/// Yaw the agent rightward by a rotation in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRight {
    /// The agent this action targets.
    pub agent_id: AgentId,
    /// Rightward rotation to apply, in degrees.
    pub rotation_degrees: f64,
}

impl TurnRight {
    /// Create a rightward turn.
    pub const fn new(agent_id: AgentId, rotation_degrees: f64) -> Self {
        Self {
            agent_id,
            rotation_degrees,
        }
    }

    /// Ask the sampler for an instance of this variant.
    pub fn sample(agent_id: &AgentId, sampler: &mut dyn ActionSampler) -> Self {
        sampler.sample_turn_right(agent_id)
    }

    /// Execute through the actuator's specialized entry point.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        actuator.actuate_turn_right(self);
    }
}

// ---------------------------------------------------------------------------
// The Action sum type
// ---------------------------------------------------------------------------

/// A motor action issued to an agent: one of the fourteen variant records.
///
/// Instances come from a sampler (via [`ActionKind::sample`] or the record
/// constructors) or from the wire decoder, and are consumed by an
/// actuator's dispatch or by the encoder. There are no mutation methods.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// See [`LookDown`].
    LookDown(LookDown),
    /// See [`LookUp`].
    LookUp(LookUp),
    /// See [`MoveForward`].
    MoveForward(MoveForward),
    /// See [`MoveTangentially`].
    MoveTangentially(MoveTangentially),
    /// See [`OrientHorizontal`].
    OrientHorizontal(OrientHorizontal),
    /// See [`OrientVertical`].
    OrientVertical(OrientVertical),
    /// See [`SetAgentPitch`].
    SetAgentPitch(SetAgentPitch),
    /// See [`SetAgentPose`].
    SetAgentPose(SetAgentPose),
    /// See [`SetSensorPitch`].
    SetSensorPitch(SetSensorPitch),
    /// See [`SetSensorPose`].
    SetSensorPose(SetSensorPose),
    /// See [`SetSensorRotation`].
    SetSensorRotation(SetSensorRotation),
    /// See [`SetYaw`].
    SetYaw(SetYaw),
    /// See [`TurnLeft`].
    TurnLeft(TurnLeft),
    /// See [`TurnRight`].
    TurnRight(TurnRight),
}

impl Action {
    /// The variant kind of this action.
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::LookDown(_) => ActionKind::LookDown,
            Self::LookUp(_) => ActionKind::LookUp,
            Self::MoveForward(_) => ActionKind::MoveForward,
            Self::MoveTangentially(_) => ActionKind::MoveTangentially,
            Self::OrientHorizontal(_) => ActionKind::OrientHorizontal,
            Self::OrientVertical(_) => ActionKind::OrientVertical,
            Self::SetAgentPitch(_) => ActionKind::SetAgentPitch,
            Self::SetAgentPose(_) => ActionKind::SetAgentPose,
            Self::SetSensorPitch(_) => ActionKind::SetSensorPitch,
            Self::SetSensorPose(_) => ActionKind::SetSensorPose,
            Self::SetSensorRotation(_) => ActionKind::SetSensorRotation,
            Self::SetYaw(_) => ActionKind::SetYaw,
            Self::TurnLeft(_) => ActionKind::TurnLeft,
            Self::TurnRight(_) => ActionKind::TurnRight,
        }
    }

    /// The action's derived wire name.
    pub fn name(&self) -> String {
        self.kind().name()
    }

    /// The agent this action targets.
    pub const fn agent_id(&self) -> &AgentId {
        match self {
            Self::LookDown(a) => &a.agent_id,
            Self::LookUp(a) => &a.agent_id,
            Self::MoveForward(a) => &a.agent_id,
            Self::MoveTangentially(a) => &a.agent_id,
            Self::OrientHorizontal(a) => &a.agent_id,
            Self::OrientVertical(a) => &a.agent_id,
            Self::SetAgentPitch(a) => &a.agent_id,
            Self::SetAgentPose(a) => &a.agent_id,
            Self::SetSensorPitch(a) => &a.agent_id,
            Self::SetSensorPose(a) => &a.agent_id,
            Self::SetSensorRotation(a) => &a.agent_id,
            Self::SetYaw(a) => &a.agent_id,
            Self::TurnLeft(a) => &a.agent_id,
            Self::TurnRight(a) => &a.agent_id,
        }
    }

    /// Execute through the actuator entry point matching this variant.
    pub fn act(&self, actuator: &mut dyn Actuator) {
        match self {
            Self::LookDown(a) => a.act(actuator),
            Self::LookUp(a) => a.act(actuator),
            Self::MoveForward(a) => a.act(actuator),
            Self::MoveTangentially(a) => a.act(actuator),
            Self::OrientHorizontal(a) => a.act(actuator),
            Self::OrientVertical(a) => a.act(actuator),
            Self::SetAgentPitch(a) => a.act(actuator),
            Self::SetAgentPose(a) => a.act(actuator),
            Self::SetSensorPitch(a) => a.act(actuator),
            Self::SetSensorPose(a) => a.act(actuator),
            Self::SetSensorRotation(a) => a.act(actuator),
            Self::SetYaw(a) => a.act(actuator),
            Self::TurnLeft(a) => a.act(actuator),
            Self::TurnRight(a) => a.act(actuator),
        }
    }

    /// Enumerate the action's wire fields in declaration order.
    ///
    /// Yields `("action", name)` first, then `agent_id`, then every
    /// declared parameter field. The derived name never appears as a
    /// regular field. Spatial values are flattened to plain number arrays.
    /// This enumeration is the single contract the encoder relies on.
    pub fn entries(&self) -> Vec<(&'static str, Value)> {
        let header = [
            (ACTION_KEY, Value::from(self.name())),
            (AGENT_ID_KEY, Value::from(self.agent_id().as_str())),
        ];
        header.into_iter().chain(self.field_entries()).collect()
    }

    /// The variant-specific parameter fields, in declaration order.
    fn field_entries(&self) -> Vec<(&'static str, Value)> {
        match self {
            Self::LookDown(a) => vec![
                ("rotation_degrees", Value::from(a.rotation_degrees)),
                ("constraint_degrees", Value::from(a.constraint_degrees)),
            ],
            Self::LookUp(a) => vec![
                ("rotation_degrees", Value::from(a.rotation_degrees)),
                ("constraint_degrees", Value::from(a.constraint_degrees)),
            ],
            Self::MoveForward(a) => vec![("distance", Value::from(a.distance))],
            Self::MoveTangentially(a) => vec![
                ("distance", Value::from(a.distance)),
                ("direction", Value::from(a.direction)),
            ],
            Self::OrientHorizontal(a) => vec![
                ("rotation_degrees", Value::from(a.rotation_degrees)),
                ("left_distance", Value::from(a.left_distance)),
                ("forward_distance", Value::from(a.forward_distance)),
            ],
            Self::OrientVertical(a) => vec![
                ("rotation_degrees", Value::from(a.rotation_degrees)),
                ("down_distance", Value::from(a.down_distance)),
                ("forward_distance", Value::from(a.forward_distance)),
            ],
            Self::SetAgentPitch(a) => vec![("pitch_degrees", Value::from(a.pitch_degrees))],
            Self::SetAgentPose(a) => vec![
                ("location", Value::from(a.location)),
                ("rotation_quat", Value::from(a.rotation_quat)),
            ],
            Self::SetSensorPitch(a) => vec![("pitch_degrees", Value::from(a.pitch_degrees))],
            Self::SetSensorPose(a) => vec![
                ("location", Value::from(a.location)),
                ("rotation_quat", Value::from(a.rotation_quat)),
            ],
            Self::SetSensorRotation(a) => {
                vec![("rotation_quat", Value::from(a.rotation_quat))]
            }
            Self::SetYaw(a) => vec![("rotation_degrees", Value::from(a.rotation_degrees))],
            Self::TurnLeft(a) => vec![("rotation_degrees", Value::from(a.rotation_degrees))],
            Self::TurnRight(a) => vec![("rotation_degrees", Value::from(a.rotation_degrees))],
        }
    }
}

impl From<LookDown> for Action {
    fn from(action: LookDown) -> Self {
        Self::LookDown(action)
    }
}

impl From<LookUp> for Action {
    fn from(action: LookUp) -> Self {
        Self::LookUp(action)
    }
}

impl From<MoveForward> for Action {
    fn from(action: MoveForward) -> Self {
        Self::MoveForward(action)
    }
}

impl From<MoveTangentially> for Action {
    fn from(action: MoveTangentially) -> Self {
        Self::MoveTangentially(action)
    }
}

impl From<OrientHorizontal> for Action {
    fn from(action: OrientHorizontal) -> Self {
        Self::OrientHorizontal(action)
    }
}

impl From<OrientVertical> for Action {
    fn from(action: OrientVertical) -> Self {
        Self::OrientVertical(action)
    }
}

impl From<SetAgentPitch> for Action {
    fn from(action: SetAgentPitch) -> Self {
        Self::SetAgentPitch(action)
    }
}

impl From<SetAgentPose> for Action {
    fn from(action: SetAgentPose) -> Self {
        Self::SetAgentPose(action)
    }
}

impl From<SetSensorPitch> for Action {
    fn from(action: SetSensorPitch) -> Self {
        Self::SetSensorPitch(action)
    }
}

impl From<SetSensorPose> for Action {
    fn from(action: SetSensorPose) -> Self {
        Self::SetSensorPose(action)
    }
}

impl From<SetSensorRotation> for Action {
    fn from(action: SetSensorRotation) -> Self {
        Self::SetSensorRotation(action)
    }
}

impl From<SetYaw> for Action {
    fn from(action: SetYaw) -> Self {
        Self::SetYaw(action)
    }
}

impl From<TurnLeft> for Action {
    fn from(action: TurnLeft) -> Self {
        Self::TurnLeft(action)
    }
}

impl From<TurnRight> for Action {
    fn from(action: TurnRight) -> Self {
        Self::TurnRight(action)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn agent() -> AgentId {
        AgentId::new("agent_01")
    }

    #[test]
    fn derive_name_splits_on_uppercase() {
        assert_eq!(derive_name("LookDown"), "look_down");
        assert_eq!(derive_name("SetSensorPitch"), "set_sensor_pitch");
        assert_eq!(derive_name("MoveTangentially"), "move_tangentially");
    }

    #[test]
    fn derive_name_ignores_leading_uppercase() {
        assert_eq!(derive_name("Turn"), "turn");
    }

    #[test]
    fn derive_name_passes_lowercase_through() {
        assert_eq!(derive_name("already_snake"), "already_snake");
    }

    #[test]
    fn derived_names_match_catalog() {
        let expected = [
            (ActionKind::LookDown, "look_down"),
            (ActionKind::LookUp, "look_up"),
            (ActionKind::MoveForward, "move_forward"),
            (ActionKind::MoveTangentially, "move_tangentially"),
            (ActionKind::OrientHorizontal, "orient_horizontal"),
            (ActionKind::OrientVertical, "orient_vertical"),
            (ActionKind::SetAgentPitch, "set_agent_pitch"),
            (ActionKind::SetAgentPose, "set_agent_pose"),
            (ActionKind::SetSensorPitch, "set_sensor_pitch"),
            (ActionKind::SetSensorPose, "set_sensor_pose"),
            (ActionKind::SetSensorRotation, "set_sensor_rotation"),
            (ActionKind::SetYaw, "set_yaw"),
            (ActionKind::TurnLeft, "turn_left"),
            (ActionKind::TurnRight, "turn_right"),
        ];
        for (kind, token) in expected {
            assert_eq!(kind.name(), token);
        }
    }

    #[test]
    fn derived_names_are_unique() {
        let names: BTreeSet<String> = ActionKind::ALL.into_iter().map(ActionKind::name).collect();
        assert_eq!(names.len(), ActionKind::ALL.len());
    }

    #[test]
    fn from_name_resolves_every_token() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::from_name(&kind.name()), Some(kind));
        }
    }

    #[test]
    fn from_name_rejects_unknown_tokens() {
        assert_eq!(ActionKind::from_name("not_a_real_action"), None);
        // The CamelCase identifier is not a wire token.
        assert_eq!(ActionKind::from_name("LookDown"), None);
    }

    #[test]
    fn look_constructors_default_the_constraint() {
        assert_eq!(
            LookDown::new(agent(), 10.0),
            LookDown::with_constraint(agent(), 10.0, 90.0)
        );
        assert_eq!(
            LookUp::new(agent(), 5.0),
            LookUp::with_constraint(agent(), 5.0, 90.0)
        );
    }

    #[test]
    fn entries_lead_with_discriminator() {
        let action = Action::from(MoveForward::new(agent(), 1.5));
        let entries = action.entries();
        let keys: Vec<&str> = entries.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["action", "agent_id", "distance"]);
        assert_eq!(
            entries.first(),
            Some(&("action", Value::from("move_forward")))
        );
    }

    #[test]
    fn entries_flatten_spatial_fields() {
        let action = Action::from(SetAgentPose::new(
            agent(),
            VectorXYZ::new(0.0, 1.0, 0.0),
            QuaternionWXYZ::new(1.0, 0.0, 0.0, 0.0),
        ));
        let entries = action.entries();
        assert!(entries.contains(&("location", serde_json::json!([0.0, 1.0, 0.0]))));
        assert!(entries.contains(&("rotation_quat", serde_json::json!([1.0, 0.0, 0.0, 0.0]))));
    }

    #[test]
    fn entries_never_include_a_name_field() {
        for action in all_variants() {
            assert!(action.entries().iter().all(|(key, _)| *key != "name"));
        }
    }

    /// One instance of every variant, in catalog order.
    fn all_variants() -> Vec<Action> {
        vec![
            LookDown::new(agent(), 10.0).into(),
            LookUp::new(agent(), 10.0).into(),
            MoveForward::new(agent(), 0.25).into(),
            MoveTangentially::new(agent(), 0.1, VectorXYZ::new(0.0, 1.0, 0.0)).into(),
            OrientHorizontal::new(agent(), 15.0, 0.2, 0.3).into(),
            OrientVertical::new(agent(), 15.0, 0.2, 0.3).into(),
            SetAgentPitch::new(agent(), 30.0).into(),
            SetAgentPose::new(
                agent(),
                VectorXYZ::new(0.0, 1.0, 0.0),
                QuaternionWXYZ::new(1.0, 0.0, 0.0, 0.0),
            )
            .into(),
            SetSensorPitch::new(agent(), 30.0).into(),
            SetSensorPose::new(
                agent(),
                VectorXYZ::new(1.0, 0.0, 1.0),
                QuaternionWXYZ::new(0.0, 1.0, 0.0, 0.0),
            )
            .into(),
            SetSensorRotation::new(agent(), QuaternionWXYZ::new(1.0, 0.0, 0.0, 0.0)).into(),
            SetYaw::new(agent(), 180.0).into(),
            TurnLeft::new(agent(), 45.0).into(),
            TurnRight::new(agent(), 45.0).into(),
        ]
    }

    /// Actuator that records which entry point each dispatch hit.
    #[derive(Default)]
    struct RecordingActuator {
        calls: Vec<&'static str>,
    }

    impl Actuator for RecordingActuator {
        fn actuate_look_down(&mut self, _action: &LookDown) {
            self.calls.push("look_down");
        }
        fn actuate_look_up(&mut self, _action: &LookUp) {
            self.calls.push("look_up");
        }
        fn actuate_move_forward(&mut self, _action: &MoveForward) {
            self.calls.push("move_forward");
        }
        fn actuate_move_tangentially(&mut self, _action: &MoveTangentially) {
            self.calls.push("move_tangentially");
        }
        fn actuate_orient_horizontal(&mut self, _action: &OrientHorizontal) {
            self.calls.push("orient_horizontal");
        }
        fn actuate_orient_vertical(&mut self, _action: &OrientVertical) {
            self.calls.push("orient_vertical");
        }
        fn actuate_set_agent_pitch(&mut self, _action: &SetAgentPitch) {
            self.calls.push("set_agent_pitch");
        }
        fn actuate_set_agent_pose(&mut self, _action: &SetAgentPose) {
            self.calls.push("set_agent_pose");
        }
        fn actuate_set_sensor_pitch(&mut self, _action: &SetSensorPitch) {
            self.calls.push("set_sensor_pitch");
        }
        fn actuate_set_sensor_pose(&mut self, _action: &SetSensorPose) {
            self.calls.push("set_sensor_pose");
        }
        fn actuate_set_sensor_rotation(&mut self, _action: &SetSensorRotation) {
            self.calls.push("set_sensor_rotation");
        }
        fn actuate_set_yaw(&mut self, _action: &SetYaw) {
            self.calls.push("set_yaw");
        }
        fn actuate_turn_left(&mut self, _action: &TurnLeft) {
            self.calls.push("turn_left");
        }
        fn actuate_turn_right(&mut self, _action: &TurnRight) {
            self.calls.push("turn_right");
        }
    }

    #[test]
    fn act_routes_to_the_matching_entry_point() {
        let mut actuator = RecordingActuator::default();
        for action in all_variants() {
            action.act(&mut actuator);
        }
        let expected: Vec<String> = ActionKind::ALL.into_iter().map(ActionKind::name).collect();
        assert_eq!(actuator.calls, expected);
    }

    /// Sampler that returns fixed instances, for routing verification.
    struct CannedSampler;

    impl ActionSampler for CannedSampler {
        fn sample_look_down(&mut self, agent_id: &AgentId) -> LookDown {
            LookDown::new(agent_id.clone(), 1.0)
        }
        fn sample_look_up(&mut self, agent_id: &AgentId) -> LookUp {
            LookUp::new(agent_id.clone(), 1.0)
        }
        fn sample_move_forward(&mut self, agent_id: &AgentId) -> MoveForward {
            MoveForward::new(agent_id.clone(), 1.0)
        }
        fn sample_move_tangentially(&mut self, agent_id: &AgentId) -> MoveTangentially {
            MoveTangentially::new(agent_id.clone(), 1.0, VectorXYZ::new(0.0, 0.0, 1.0))
        }
        fn sample_orient_horizontal(&mut self, agent_id: &AgentId) -> OrientHorizontal {
            OrientHorizontal::new(agent_id.clone(), 1.0, 1.0, 1.0)
        }
        fn sample_orient_vertical(&mut self, agent_id: &AgentId) -> OrientVertical {
            OrientVertical::new(agent_id.clone(), 1.0, 1.0, 1.0)
        }
        fn sample_set_agent_pitch(&mut self, agent_id: &AgentId) -> SetAgentPitch {
            SetAgentPitch::new(agent_id.clone(), 1.0)
        }
        fn sample_set_agent_pose(&mut self, agent_id: &AgentId) -> SetAgentPose {
            SetAgentPose::new(
                agent_id.clone(),
                VectorXYZ::new(0.0, 0.0, 0.0),
                QuaternionWXYZ::new(1.0, 0.0, 0.0, 0.0),
            )
        }
        fn sample_set_sensor_pitch(&mut self, agent_id: &AgentId) -> SetSensorPitch {
            SetSensorPitch::new(agent_id.clone(), 1.0)
        }
        fn sample_set_sensor_pose(&mut self, agent_id: &AgentId) -> SetSensorPose {
            SetSensorPose::new(
                agent_id.clone(),
                VectorXYZ::new(0.0, 0.0, 0.0),
                QuaternionWXYZ::new(1.0, 0.0, 0.0, 0.0),
            )
        }
        fn sample_set_sensor_rotation(&mut self, agent_id: &AgentId) -> SetSensorRotation {
            SetSensorRotation::new(agent_id.clone(), QuaternionWXYZ::new(1.0, 0.0, 0.0, 0.0))
        }
        fn sample_set_yaw(&mut self, agent_id: &AgentId) -> SetYaw {
            SetYaw::new(agent_id.clone(), 1.0)
        }
        fn sample_turn_left(&mut self, agent_id: &AgentId) -> TurnLeft {
            TurnLeft::new(agent_id.clone(), 1.0)
        }
        fn sample_turn_right(&mut self, agent_id: &AgentId) -> TurnRight {
            TurnRight::new(agent_id.clone(), 1.0)
        }
    }

    #[test]
    fn sample_routes_to_the_matching_entry_point() {
        let id = agent();
        let mut sampler = CannedSampler;
        for kind in ActionKind::ALL {
            let action = kind.sample(&id, &mut sampler);
            assert_eq!(action.kind(), kind);
            assert_eq!(action.agent_id(), &id);
        }
    }
}
