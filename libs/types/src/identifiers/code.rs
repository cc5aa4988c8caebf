//! Instrument codes
//!
//! A [`Code`] pairs a [`CodeScheme`] with a non-empty value. Codes are
//! immutable once built; equality, hashing and ordering all use both fields.

use super::generator::{UniqueValueGenerator, UuidGenerator};
use super::scheme::CodeScheme;
use crate::common::errors::{InstrumentMapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier value under a specific scheme
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCode", into = "RawCode")]
pub struct Code {
    scheme: CodeScheme,
    value: String,
}

impl Code {
    /// Build a code, rejecting empty values
    pub fn new(scheme: CodeScheme, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(InstrumentMapError::invalid_argument(format!(
                "{} code value must be a non-empty string",
                scheme
            )));
        }
        Ok(Self { scheme, value })
    }

    /// Build a code from a scheme name such as `"ISIN"`
    pub fn parse(scheme: &str, value: impl Into<String>) -> Result<Self> {
        Self::new(scheme.parse()?, value)
    }

    /// Build a `BASE` scheme code
    pub fn base(value: impl Into<String>) -> Result<Self> {
        Self::new(CodeScheme::Base, value)
    }

    /// Fresh candidate value for a `BASE` code
    pub fn gen_base_code_value() -> String {
        UuidGenerator.new_unique_string()
    }

    pub fn scheme(&self) -> CodeScheme {
        self.scheme
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_base(&self) -> bool {
        self.scheme.is_base()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scheme: {} : value: {}", self.scheme, self.value)
    }
}

/// Wire shape of a [`Code`]; deserialization goes through [`Code::new`]
#[derive(Serialize, Deserialize)]
struct RawCode {
    scheme: CodeScheme,
    value: String,
}

impl TryFrom<RawCode> for Code {
    type Error = InstrumentMapError;

    fn try_from(raw: RawCode) -> Result<Self> {
        Code::new(raw.scheme, raw.value)
    }
}

impl From<Code> for RawCode {
    fn from(code: Code) -> Self {
        RawCode {
            scheme: code.scheme,
            value: code.value,
        }
    }
}
