//! Thread-safe handle over an [`InstrumentMap`]
//!
//! One reader-writer lock guards the whole map. Mutations hold the write lock
//! for their entire check-then-insert, so two writers can never both claim
//! the same code.

use crate::map::{InstrumentMap, MapStats};
use map_config::InstrumentMapConfig;
use parking_lot::RwLock;
use std::sync::Arc;
use types::{Agent, Code, CodeScheme, Result, UniqueValueGenerator};

/// Cloneable, shareable instrument map
#[derive(Debug, Clone, Default)]
pub struct SharedInstrumentMap {
    inner: Arc<RwLock<InstrumentMap>>,
}

impl SharedInstrumentMap {
    pub fn new(map: InstrumentMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub fn with_config(config: InstrumentMapConfig) -> Self {
        Self::new(InstrumentMap::with_config(config))
    }

    pub fn with_generator(
        config: InstrumentMapConfig,
        generator: impl UniqueValueGenerator + 'static,
    ) -> Self {
        Self::new(InstrumentMap::with_generator(config, generator))
    }

    pub fn create_instr(&self, agent: &Agent) -> Result<Code> {
        self.inner.write().create_instr(agent)
    }

    pub fn add_instr_codes(&self, code: &Code, codes: &[Code], agent: &Agent) -> Result<()> {
        self.inner.write().add_instr_codes(code, codes, agent)
    }

    pub fn get_instr_codes(&self, code: &Code, agent: &Agent) -> Result<Vec<Code>> {
        self.inner.read().get_instr_codes(code, agent)
    }

    pub fn get_instr_code_of_type(
        &self,
        code: &Code,
        scheme: CodeScheme,
        agent: &Agent,
    ) -> Result<Code> {
        self.inner.read().get_instr_code_of_type(code, scheme, agent)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn contains(&self, code: &Code) -> bool {
        self.inner.read().contains(code)
    }

    pub fn stats(&self) -> MapStats {
        self.inner.read().stats()
    }

    pub fn is_consistent(&self) -> bool {
        self.inner.read().is_consistent()
    }
}

impl From<InstrumentMap> for SharedInstrumentMap {
    fn from(map: InstrumentMap) -> Self {
        Self::new(map)
    }
}
