//! # Instrument Identifiers
//!
//! Value types the identifier map is built from:
//!
//! - [`CodeScheme`]: closed set of identification schemes (`BASE`, `SEDOL`, `ISIN`, `RIC`)
//! - [`Code`]: a scheme plus a non-empty value
//! - [`UniqueValueGenerator`]: the seam through which `BASE` values are allocated
//!
//! ```rust
//! use types::{Code, CodeScheme};
//!
//! let isin = Code::new(CodeScheme::Isin, "US0378331005")?;
//! assert_eq!(isin.to_string(), "scheme: ISIN : value: US0378331005");
//! # Ok::<(), types::InstrumentMapError>(())
//! ```

pub mod code;
pub mod generator;
pub mod scheme;

pub use code::Code;
pub use generator::{SequentialGenerator, UniqueValueGenerator, UuidGenerator};
pub use scheme::CodeScheme;
