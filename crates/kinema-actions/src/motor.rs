//! Capability interfaces for the external motor collaborators.
//!
//! The action model routes to these traits but never implements them: a
//! sampler decides *which* parameters an action gets, an actuator performs
//! the physical or simulated effect. Both live in whatever system embeds
//! this crate. Each trait exposes one specialized entry point per variant,
//! so a collaborator handles exactly the variants it claims to support and
//! the compiler flags any missing coverage when the vocabulary grows.

use kinema_types::AgentId;

use crate::action::{
    LookDown, LookUp, MoveForward, MoveTangentially, OrientHorizontal, OrientVertical,
    SetAgentPitch, SetAgentPose, SetSensorPitch, SetSensorPose, SetSensorRotation, SetYaw,
    TurnLeft, TurnRight,
};

/// Produces fully-populated action instances, one entry point per variant.
///
/// Samplers are typically stochastic or policy-driven, hence `&mut self`.
/// Every method returns an instance of exactly the requested variant for
/// the given agent.
pub trait ActionSampler {
    /// Sample a [`LookDown`] for the given agent.
    fn sample_look_down(&mut self, agent_id: &AgentId) -> LookDown;

    /// Sample a [`LookUp`] for the given agent.
    fn sample_look_up(&mut self, agent_id: &AgentId) -> LookUp;

    /// Sample a [`MoveForward`] for the given agent.
    fn sample_move_forward(&mut self, agent_id: &AgentId) -> MoveForward;

    /// Sample a [`MoveTangentially`] for the given agent.
    fn sample_move_tangentially(&mut self, agent_id: &AgentId) -> MoveTangentially;

    /// Sample an [`OrientHorizontal`] for the given agent.
    fn sample_orient_horizontal(&mut self, agent_id: &AgentId) -> OrientHorizontal;

    /// Sample an [`OrientVertical`] for the given agent.
    fn sample_orient_vertical(&mut self, agent_id: &AgentId) -> OrientVertical;

    /// Sample a [`SetAgentPitch`] for the given agent.
    fn sample_set_agent_pitch(&mut self, agent_id: &AgentId) -> SetAgentPitch;

    /// Sample a [`SetAgentPose`] for the given agent.
    fn sample_set_agent_pose(&mut self, agent_id: &AgentId) -> SetAgentPose;

    /// Sample a [`SetSensorPitch`] for the given agent.
    fn sample_set_sensor_pitch(&mut self, agent_id: &AgentId) -> SetSensorPitch;

    /// Sample a [`SetSensorPose`] for the given agent.
    fn sample_set_sensor_pose(&mut self, agent_id: &AgentId) -> SetSensorPose;

    /// Sample a [`SetSensorRotation`] for the given agent.
    fn sample_set_sensor_rotation(&mut self, agent_id: &AgentId) -> SetSensorRotation;

    /// Sample a [`SetYaw`] for the given agent.
    fn sample_set_yaw(&mut self, agent_id: &AgentId) -> SetYaw;

    /// Sample a [`TurnLeft`] for the given agent.
    fn sample_turn_left(&mut self, agent_id: &AgentId) -> TurnLeft;

    /// Sample a [`TurnRight`] for the given agent.
    fn sample_turn_right(&mut self, agent_id: &AgentId) -> TurnRight;
}

/// Executes action effects, one entry point per variant.
///
/// Failure modes are environment concerns (collision, joint limits, lost
/// connection) and belong to the implementor; the capability surface is
/// effect-only.
pub trait Actuator {
    /// Execute a [`LookDown`].
    fn actuate_look_down(&mut self, action: &LookDown);

    /// Execute a [`LookUp`].
    fn actuate_look_up(&mut self, action: &LookUp);

    /// Execute a [`MoveForward`].
    fn actuate_move_forward(&mut self, action: &MoveForward);

    /// Execute a [`MoveTangentially`].
    fn actuate_move_tangentially(&mut self, action: &MoveTangentially);

    /// Execute an [`OrientHorizontal`].
    fn actuate_orient_horizontal(&mut self, action: &OrientHorizontal);

    /// Execute an [`OrientVertical`].
    fn actuate_orient_vertical(&mut self, action: &OrientVertical);

    /// Execute a [`SetAgentPitch`].
    fn actuate_set_agent_pitch(&mut self, action: &SetAgentPitch);

    /// Execute a [`SetAgentPose`].
    fn actuate_set_agent_pose(&mut self, action: &SetAgentPose);

    /// Execute a [`SetSensorPitch`].
    fn actuate_set_sensor_pitch(&mut self, action: &SetSensorPitch);

    /// Execute a [`SetSensorPose`].
    fn actuate_set_sensor_pose(&mut self, action: &SetSensorPose);

    /// Execute a [`SetSensorRotation`].
    fn actuate_set_sensor_rotation(&mut self, action: &SetSensorRotation);

    /// Execute a [`SetYaw`].
    fn actuate_set_yaw(&mut self, action: &SetYaw);

    /// Execute a [`TurnLeft`].
    fn actuate_turn_left(&mut self, action: &TurnLeft);

    /// Execute a [`TurnRight`].
    fn actuate_turn_right(&mut self, action: &TurnRight);
}
