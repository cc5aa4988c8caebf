//! Caller identity and role checks
//!
//! An [`Agent`] is a user or service account acting on the map. Agents are
//! built by the identity layer and only ever read by the map.

use crate::common::errors::{InstrumentMapError, Result};
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Role an agent acts under
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum AgentRole {
    Reader = 0,
    Maintainer = 1,
}

impl AgentRole {
    pub fn num(&self) -> u8 {
        *self as u8
    }

    pub fn description(&self) -> &'static str {
        match self {
            AgentRole::Reader => "Reader",
            AgentRole::Maintainer => "Maintainer",
        }
    }

    /// Look up a role by its stable number
    pub fn from_num(num: u8) -> Result<Self> {
        AgentRole::try_from(num).map_err(|_| {
            InstrumentMapError::invalid_argument(format!("unknown agent role number {}", num))
        })
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for AgentRole {
    type Err = InstrumentMapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reader" => Ok(AgentRole::Reader),
            "maintainer" => Ok(AgentRole::Maintainer),
            _ => Err(InstrumentMapError::invalid_argument(format!(
                "unknown agent role '{}'",
                s
            ))),
        }
    }
}

/// A user or service account acting on the map
///
/// # Invariants
/// - `id` is a valid UUID string
/// - `name` is non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAgent", into = "RawAgent")]
pub struct Agent {
    role: AgentRole,
    id: String,
    name: String,
}

impl Agent {
    pub fn new(role: AgentRole, id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let name = name.into();

        if name.is_empty() {
            return Err(InstrumentMapError::invalid_argument(
                "agent name must be a non-empty string",
            ));
        }
        if id.is_empty() {
            return Err(InstrumentMapError::invalid_argument(
                "agent id must be a non-empty GUID",
            ));
        }
        if Uuid::parse_str(&id).is_err() {
            return Err(InstrumentMapError::invalid_argument(format!(
                "agent id '{}' is not a valid GUID",
                id
            )));
        }

        Ok(Self { role, id, name })
    }

    /// Build an agent with a freshly generated id
    pub fn with_generated_id(role: AgentRole, name: impl Into<String>) -> Result<Self> {
        Self::new(role, Self::gen_agent_id(), name)
    }

    /// Fresh globally unique agent id
    pub fn gen_agent_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn role(&self) -> AgentRole {
        self.role
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact-match role check, not hierarchical
    pub fn has_required_permissions(&self, required_role: AgentRole) -> bool {
        self.role == required_role
    }

    /// Role check against a raw role number
    pub fn has_required_permissions_raw(&self, required_role: u8) -> Result<bool> {
        Ok(self.has_required_permissions(AgentRole::from_num(required_role)?))
    }

    /// True if the agent's role is one of `roles`
    pub fn has_any_role(&self, roles: &[AgentRole]) -> bool {
        roles.iter().any(|role| self.has_required_permissions(*role))
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {} : Id: {} : Role: {}", self.name, self.id, self.role)
    }
}

#[derive(Serialize, Deserialize)]
struct RawAgent {
    role: AgentRole,
    id: String,
    name: String,
}

impl TryFrom<RawAgent> for Agent {
    type Error = InstrumentMapError;

    fn try_from(raw: RawAgent) -> Result<Self> {
        Agent::new(raw.role, raw.id, raw.name)
    }
}

impl From<Agent> for RawAgent {
    fn from(agent: Agent) -> Self {
        RawAgent {
            role: agent.role,
            id: agent.id,
            name: agent.name,
        }
    }
}
