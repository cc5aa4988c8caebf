//! Code scheme classification
//!
//! A [`CodeScheme`] names the identification system a code value belongs to.
//! The set is closed: adding a scheme means recompiling. `BASE` is the
//! canonical anchor scheme; every other member is an alternate scheme.

use crate::common::errors::{InstrumentMapError, Result};
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identification scheme of a [`Code`](super::Code)
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
pub enum CodeScheme {
    /// Canonical anchor scheme, values are allocated by the map
    #[serde(rename = "BASE")]
    Base = 0,
    /// Stock Exchange Daily Official List number
    #[serde(rename = "SEDOL")]
    Sedol = 1,
    /// International Securities Identification Number
    #[serde(rename = "ISIN")]
    Isin = 2,
    /// Refinitiv Instrument Code
    #[serde(rename = "RIC")]
    Ric = 3,
}

impl CodeScheme {
    /// Every scheme, in numeric order. This is the canonical iteration order.
    pub const ALL: [CodeScheme; 4] = [
        CodeScheme::Base,
        CodeScheme::Sedol,
        CodeScheme::Isin,
        CodeScheme::Ric,
    ];

    /// Stable number of this scheme
    pub fn num(&self) -> u8 {
        *self as u8
    }

    /// Upper-case name of this scheme
    pub fn description(&self) -> &'static str {
        match self {
            CodeScheme::Base => "BASE",
            CodeScheme::Sedol => "SEDOL",
            CodeScheme::Isin => "ISIN",
            CodeScheme::Ric => "RIC",
        }
    }

    /// True for the canonical anchor scheme
    pub fn is_base(&self) -> bool {
        matches!(self, CodeScheme::Base)
    }

    /// Look up a scheme by its stable number
    pub fn from_num(num: u8) -> Result<Self> {
        CodeScheme::try_from(num).map_err(|_| {
            InstrumentMapError::invalid_argument(format!("unknown code scheme number {}", num))
        })
    }
}

impl fmt::Display for CodeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for CodeScheme {
    type Err = InstrumentMapError;

    fn from_str(s: &str) -> Result<Self> {
        CodeScheme::ALL
            .into_iter()
            .find(|scheme| scheme.description().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                InstrumentMapError::invalid_argument(format!("unknown code scheme '{}'", s))
            })
    }
}
