//! Error types for instrument identifier mapping
//!
//! Every failure the map can report is a variant of [`InstrumentMapError`].
//! Failures are synchronous and never retried; argument and permission
//! failures are raised before any state is touched.

use crate::agent::AgentRole;
use crate::identifiers::{Code, CodeScheme};
use thiserror::Error;

/// Result alias used across the identifier map crates
pub type Result<T> = std::result::Result<T, InstrumentMapError>;

/// Errors raised by code construction, agent validation and map operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstrumentMapError {
    /// A parameter is missing, malformed or fails a value constraint
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The caller's role is not accepted by the operation
    #[error("Agent {agent} does not have the required permissions {required:?} to {operation}")]
    IncorrectPermissions {
        agent: String,
        operation: String,
        required: Vec<AgentRole>,
    },

    /// The referenced code is not present in its scheme bucket
    #[error("Code {code} does not exist in the map")]
    CodeNotFound { code: Code },

    /// An alternate code is already bound to a different instrument
    #[error("Code {code} is already mapped to base code {existing_base}, cannot map it to {requested_base}")]
    ConflictingAssociation {
        code: Code,
        existing_base: Code,
        requested_base: Code,
    },

    /// The instrument already carries a different code of the same scheme
    #[error("Instrument already has a {scheme} code ({existing}), rejected {rejected}")]
    SchemeAlreadyRepresented {
        scheme: CodeScheme,
        existing: Code,
        rejected: Code,
    },

    /// The instrument exists but has no code of the requested scheme
    #[error("Code {code} has no matching codes for code scheme {scheme}")]
    OnlyBaseCodeDefined { code: Code, scheme: CodeScheme },

    /// The unique value generator kept returning values already in use
    #[error("Failed to generate a unique base code after {attempts} attempts")]
    IdentifierCollision { attempts: u32 },
}

/// Fieldless mirror of [`InstrumentMapError`] for matching on category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    IncorrectPermissions,
    CodeNotFound,
    ConflictingAssociation,
    SchemeAlreadyRepresented,
    OnlyBaseCodeDefined,
    IdentifierCollision,
}

impl InstrumentMapError {
    /// Shorthand for an [`InstrumentMapError::InvalidArgument`]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::IncorrectPermissions { .. } => ErrorKind::IncorrectPermissions,
            Self::CodeNotFound { .. } => ErrorKind::CodeNotFound,
            Self::ConflictingAssociation { .. } => ErrorKind::ConflictingAssociation,
            Self::SchemeAlreadyRepresented { .. } => ErrorKind::SchemeAlreadyRepresented,
            Self::OnlyBaseCodeDefined { .. } => ErrorKind::OnlyBaseCodeDefined,
            Self::IdentifierCollision { .. } => ErrorKind::IdentifierCollision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let code = Code::new(CodeScheme::Isin, "US0378331005").unwrap();
        let err = InstrumentMapError::OnlyBaseCodeDefined {
            code,
            scheme: CodeScheme::Ric,
        };
        assert_eq!(err.kind(), ErrorKind::OnlyBaseCodeDefined);
        assert_eq!(
            InstrumentMapError::invalid_argument("x").kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_error_messages_name_the_codes() {
        let base = Code::new(CodeScheme::Base, "b-1").unwrap();
        let err = InstrumentMapError::CodeNotFound { code: base };
        assert_eq!(
            err.to_string(),
            "Code scheme: BASE : value: b-1 does not exist in the map"
        );
    }
}
