//! Shared building blocks used by every identifier-map crate

pub mod errors;
