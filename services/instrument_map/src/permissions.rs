//! Operation permission table
//!
//! Each map operation lists the roles it accepts. Mutations accept only
//! `Maintainer`; reads accept `Reader` or `Maintainer`.

use std::fmt;
use tracing::warn;
use types::{Agent, AgentRole, InstrumentMapError, Result};

const MAINTAINER_ONLY: &[AgentRole] = &[AgentRole::Maintainer];
const READER_OR_MAINTAINER: &[AgentRole] = &[AgentRole::Reader, AgentRole::Maintainer];

/// The four operations an agent can perform on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateInstrument,
    AddCodes,
    GetCodes,
    GetCodeOfType,
}

impl Operation {
    /// Roles accepted by this operation
    pub fn required_roles(&self) -> &'static [AgentRole] {
        match self {
            Operation::CreateInstrument | Operation::AddCodes => MAINTAINER_ONLY,
            Operation::GetCodes | Operation::GetCodeOfType => READER_OR_MAINTAINER,
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, Operation::CreateInstrument | Operation::AddCodes)
    }

    /// Check `agent` may perform this operation
    pub fn authorize(&self, agent: &Agent) -> Result<()> {
        let required = self.required_roles();
        if agent.has_any_role(required) {
            return Ok(());
        }

        warn!(agent = %agent, operation = %self, "Rejected call: insufficient permissions");
        Err(InstrumentMapError::IncorrectPermissions {
            agent: agent.to_string(),
            operation: self.to_string(),
            required: required.to_vec(),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::CreateInstrument => "create an instrument",
            Operation::AddCodes => "add instrument codes",
            Operation::GetCodes => "get instrument codes",
            Operation::GetCodeOfType => "get an instrument code of a given type",
        };
        f.write_str(name)
    }
}
