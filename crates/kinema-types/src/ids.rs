//! The opaque agent identifier.
//!
//! Agents are named by whatever system embeds this crate (a simulator, a
//! robot runtime, a recorded log). The identifier is an opaque string on
//! the wire, so the wrapper adds type safety without constraining the
//! format.

use serde::{Deserialize, Serialize};

/// Identifier of the agent an action targets.
///
/// Serializes as a bare JSON string. The content is opaque: no length,
/// charset, or uniqueness rules are enforced at this layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    /// Create an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the inner [`String`] value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AgentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for AgentId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<AgentId> for String {
    fn from(id: AgentId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_roundtrip_serde() {
        let original = AgentId::new("agent_01");
        let json = serde_json::to_string(&original).ok();
        assert_eq!(json.as_deref(), Some("\"agent_01\""));
        let restored: Result<AgentId, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn id_display_matches_inner() {
        let id = AgentId::from("camera-rig-3");
        assert_eq!(id.to_string(), "camera-rig-3");
        assert_eq!(id.as_str(), "camera-rig-3");
    }

    #[test]
    fn id_conversions() {
        let id = AgentId::from("a".to_owned());
        let back: String = id.clone().into();
        assert_eq!(back, "a");
        assert_eq!(id.into_inner(), "a");
    }
}
