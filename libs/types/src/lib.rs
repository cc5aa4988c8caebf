//! # Instrument Map Types
//!
//! Value types shared by the instrument identifier map:
//!
//! - **Identifiers**: [`CodeScheme`], [`Code`] and the [`UniqueValueGenerator`] seam
//! - **Callers**: [`Agent`] and [`AgentRole`]
//! - **Errors**: [`InstrumentMapError`] with its [`ErrorKind`] mirror
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{Agent, AgentRole, Code, CodeScheme};
//!
//! let sedol = Code::new(CodeScheme::Sedol, "2046251")?;
//! let reader = Agent::with_generated_id(AgentRole::Reader, "ops-dashboard")?;
//!
//! assert_eq!(sedol.scheme(), CodeScheme::Sedol);
//! assert!(reader.has_required_permissions(AgentRole::Reader));
//! # Ok::<(), types::InstrumentMapError>(())
//! ```

pub mod agent;
pub mod common;
pub mod identifiers;

pub use agent::{Agent, AgentRole};
pub use common::errors::{ErrorKind, InstrumentMapError, Result};
pub use identifiers::{Code, CodeScheme, SequentialGenerator, UniqueValueGenerator, UuidGenerator};
