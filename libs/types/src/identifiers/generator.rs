//! Unique value generation for base codes
//!
//! The map never invents identifier values itself; it asks a
//! [`UniqueValueGenerator`]. Production uses random v4 UUIDs, tests can plug
//! in the deterministic [`SequentialGenerator`].

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of practically collision-free strings
pub trait UniqueValueGenerator: Send + Sync {
    /// Produce a value never returned before by this generator
    fn new_unique_string(&self) -> String;
}

/// Random v4 UUID generator
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UniqueValueGenerator for UuidGenerator {
    fn new_unique_string(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix>-<n>` generator
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialGenerator {
    /// Start counting from 1
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    /// Start counting from `start`
    pub fn starting_at(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(start),
        }
    }
}

impl UniqueValueGenerator for SequentialGenerator {
    fn new_unique_string(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
