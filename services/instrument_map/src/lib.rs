//! # Instrument Identifier Map
//!
//! Resolves the many external identifiers of a tradable instrument (SEDOL,
//! ISIN, RIC) to one canonical `BASE` code, and moves between them.
//!
//! ## Architecture Role
//!
//! ```text
//! Agent (role) ──► Operation::authorize ──► InstrumentMap ──► buckets + groups
//!                                              ▲
//!                       SharedInstrumentMap ───┘ (Arc<RwLock<_>> for shared use)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use instrument_map::InstrumentMap;
//! use types::{Agent, AgentRole, Code, CodeScheme, ErrorKind};
//!
//! let maintainer = Agent::with_generated_id(AgentRole::Maintainer, "loader")?;
//! let reader = Agent::with_generated_id(AgentRole::Reader, "desk")?;
//! let mut map = InstrumentMap::new();
//!
//! let base = map.create_instr(&maintainer)?;
//! let isin = Code::new(CodeScheme::Isin, "US0378331005")?;
//! let sedol = Code::new(CodeScheme::Sedol, "2046251")?;
//! map.add_instr_codes(&base, &[isin.clone(), sedol], &maintainer)?;
//!
//! assert_eq!(map.get_instr_code_of_type(&base, CodeScheme::Isin, &reader)?, isin);
//! let err = map.get_instr_code_of_type(&base, CodeScheme::Ric, &reader).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OnlyBaseCodeDefined);
//! # Ok::<(), types::InstrumentMapError>(())
//! ```

pub mod map;
pub mod permissions;
pub mod shared;

pub use map::{InstrumentMap, MapStats};
pub use permissions::Operation;
pub use shared::SharedInstrumentMap;
