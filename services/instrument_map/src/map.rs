//! Instrument identifier map
//!
//! Groups codes from different schemes under one canonical `BASE` code.
//!
//! ## Layout
//!
//! ```text
//! buckets[BASE]  : B1 -> B1, B2 -> B2
//! buckets[ISIN]  : US0378331005 -> B1
//! buckets[SEDOL] : 2046251 -> B1
//! groups         : B1 -> {BASE: B1, SEDOL: 2046251, ISIN: US0378331005}
//!                  B2 -> {BASE: B2}
//! ```
//!
//! `buckets` answers "which instrument is this code?", `groups` answers
//! "which codes does this instrument have?". Both are updated together under
//! `&mut self`, so they never disagree.
//!
//! ## Invariants
//!
//! - Every `BASE` code maps to itself.
//! - A code, once mapped, keeps its base code forever.
//! - A `(scheme, value)` pair belongs to at most one instrument.
//! - An instrument holds at most one code per scheme.
//! - Nothing is ever removed.

use crate::permissions::Operation;
use map_config::InstrumentMapConfig;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use types::{
    Agent, Code, CodeScheme, InstrumentMapError, Result, UniqueValueGenerator, UuidGenerator,
};

/// Codes of one instrument, keyed by scheme
type Group = BTreeMap<CodeScheme, Code>;

/// Counts describing the current contents of a map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapStats {
    /// Number of instruments (base codes)
    pub instruments: usize,
    /// Number of codes across all schemes, base codes included
    pub codes: usize,
    /// Number of codes per configured scheme
    pub codes_per_scheme: BTreeMap<CodeScheme, usize>,
}

/// Groups identifier codes under canonical base codes
pub struct InstrumentMap {
    config: InstrumentMapConfig,
    generator: Arc<dyn UniqueValueGenerator>,
    /// Per configured scheme: code -> base code
    buckets: HashMap<CodeScheme, HashMap<Code, Code>>,
    /// Base code -> all codes of that instrument
    groups: HashMap<Code, Group>,
}

impl InstrumentMap {
    /// Map over every scheme, allocating base codes as random UUIDs
    pub fn new() -> Self {
        Self::with_config(InstrumentMapConfig::default())
    }

    pub fn with_config(config: InstrumentMapConfig) -> Self {
        Self::with_generator(config, UuidGenerator)
    }

    pub fn with_generator(
        config: InstrumentMapConfig,
        generator: impl UniqueValueGenerator + 'static,
    ) -> Self {
        let config = config.normalized();
        let buckets = config
            .schemes
            .iter()
            .map(|scheme| (*scheme, HashMap::new()))
            .collect();

        debug!("Created instrument map with schemes {:?}", config.schemes);

        Self {
            config,
            generator: Arc::new(generator),
            buckets,
            groups: HashMap::new(),
        }
    }

    /// Create an instrument and allocate its base code
    pub fn create_instr(&mut self, agent: &Agent) -> Result<Code> {
        Operation::CreateInstrument.authorize(agent)?;

        let attempts = self.config.max_generation_attempts;
        for attempt in 1..=attempts {
            let code = Code::base(self.generator.new_unique_string())?;

            if self.bucket(CodeScheme::Base)?.contains_key(&code) {
                warn!(
                    attempt,
                    "Generated base code {} already exists, retrying", code
                );
                continue;
            }

            self.bucket_mut(CodeScheme::Base)?
                .insert(code.clone(), code.clone());
            self.groups
                .insert(code.clone(), Group::from([(CodeScheme::Base, code.clone())]));

            info!(agent = agent.name(), "Created instrument {}", code);
            return Ok(code);
        }

        Err(InstrumentMapError::IdentifierCollision { attempts })
    }

    /// Attach alternate codes to the instrument `code` belongs to
    ///
    /// Codes already attached to this instrument are ignored. The batch is
    /// all-or-nothing: if any entry conflicts, nothing is added.
    pub fn add_instr_codes(&mut self, code: &Code, codes: &[Code], agent: &Agent) -> Result<()> {
        self.check_scheme(code.scheme())?;
        for c in codes {
            self.check_scheme(c.scheme())?;
        }
        Operation::AddCodes.authorize(agent)?;

        let base = self.resolve(code)?.clone();
        let group = &self.groups[&base];

        let mut staged: BTreeMap<CodeScheme, &Code> = BTreeMap::new();
        for c in codes {
            if let Some(existing_base) = self.buckets[&c.scheme()].get(c) {
                if *existing_base != base {
                    warn!("Rejected {}: already mapped to {}", c, existing_base);
                    return Err(InstrumentMapError::ConflictingAssociation {
                        code: c.clone(),
                        existing_base: existing_base.clone(),
                        requested_base: base,
                    });
                }
                continue;
            }

            let existing = group
                .get(&c.scheme())
                .or_else(|| staged.get(&c.scheme()).copied());
            match existing {
                Some(existing) if existing == c => {}
                Some(existing) => {
                    warn!("Rejected {}: instrument {} already has {}", c, base, existing);
                    return Err(InstrumentMapError::SchemeAlreadyRepresented {
                        scheme: c.scheme(),
                        existing: existing.clone(),
                        rejected: c.clone(),
                    });
                }
                None => {
                    staged.insert(c.scheme(), c);
                }
            }
        }

        let added: Vec<Code> = staged.into_values().cloned().collect();
        for c in &added {
            debug!("Mapping {} -> {}", c, base);
            self.bucket_mut(c.scheme())?.insert(c.clone(), base.clone());
        }
        let count = added.len();
        if let Some(group) = self.groups.get_mut(&base) {
            group.extend(added.into_iter().map(|c| (c.scheme(), c)));
        }

        info!(
            agent = agent.name(),
            "Added {} of {} codes to instrument {}",
            count,
            codes.len(),
            base
        );
        Ok(())
    }

    /// All codes of the instrument `code` belongs to, base code first
    pub fn get_instr_codes(&self, code: &Code, agent: &Agent) -> Result<Vec<Code>> {
        self.check_scheme(code.scheme())?;
        Operation::GetCodes.authorize(agent)?;

        Ok(self.group_of(code)?.values().cloned().collect())
    }

    /// The code of scheme `scheme` for the instrument `code` belongs to
    pub fn get_instr_code_of_type(
        &self,
        code: &Code,
        scheme: CodeScheme,
        agent: &Agent,
    ) -> Result<Code> {
        self.check_scheme(code.scheme())?;
        self.check_scheme(scheme)?;
        Operation::GetCodeOfType.authorize(agent)?;

        self.group_of(code)?
            .values()
            .find(|c| c.scheme() == scheme)
            .cloned()
            .ok_or_else(|| InstrumentMapError::OnlyBaseCodeDefined {
                code: code.clone(),
                scheme,
            })
    }

    pub fn config(&self) -> &InstrumentMapConfig {
        &self.config
    }

    /// Number of instruments
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True if `code` is mapped to an instrument
    pub fn contains(&self, code: &Code) -> bool {
        self.buckets
            .get(&code.scheme())
            .is_some_and(|bucket| bucket.contains_key(code))
    }

    pub fn stats(&self) -> MapStats {
        let codes_per_scheme: BTreeMap<CodeScheme, usize> = self
            .buckets
            .iter()
            .map(|(scheme, bucket)| (*scheme, bucket.len()))
            .collect();

        MapStats {
            instruments: self.groups.len(),
            codes: codes_per_scheme.values().sum(),
            codes_per_scheme,
        }
    }

    /// Check that buckets and groups describe the same grouping
    pub fn is_consistent(&self) -> bool {
        let bucket_codes: usize = self.buckets.values().map(HashMap::len).sum();
        let group_codes: usize = self.groups.values().map(BTreeMap::len).sum();
        if bucket_codes != group_codes {
            return false;
        }

        self.groups.iter().all(|(base, group)| {
            group.get(&CodeScheme::Base) == Some(base)
                && group.iter().all(|(scheme, c)| {
                    c.scheme() == *scheme
                        && self
                            .buckets
                            .get(scheme)
                            .and_then(|bucket| bucket.get(c))
                            == Some(base)
                })
        })
    }

    fn check_scheme(&self, scheme: CodeScheme) -> Result<()> {
        if self.buckets.contains_key(&scheme) {
            Ok(())
        } else {
            Err(InstrumentMapError::invalid_argument(format!(
                "code scheme {} is not configured for this map",
                scheme
            )))
        }
    }

    fn bucket(&self, scheme: CodeScheme) -> Result<&HashMap<Code, Code>> {
        self.check_scheme(scheme)?;
        Ok(&self.buckets[&scheme])
    }

    fn bucket_mut(&mut self, scheme: CodeScheme) -> Result<&mut HashMap<Code, Code>> {
        self.buckets.get_mut(&scheme).ok_or_else(|| {
            InstrumentMapError::invalid_argument(format!(
                "code scheme {} is not configured for this map",
                scheme
            ))
        })
    }

    /// Base code of the instrument `code` belongs to
    fn resolve(&self, code: &Code) -> Result<&Code> {
        self.bucket(code.scheme())?
            .get(code)
            .ok_or_else(|| InstrumentMapError::CodeNotFound { code: code.clone() })
    }

    fn group_of(&self, code: &Code) -> Result<&Group> {
        let base = self.resolve(code)?;
        self.groups
            .get(base)
            .ok_or_else(|| InstrumentMapError::CodeNotFound { code: code.clone() })
    }
}

impl Default for InstrumentMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InstrumentMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentMap")
            .field("schemes", &self.config.schemes)
            .field("instruments", &self.groups.len())
            .finish_non_exhaustive()
    }
}
