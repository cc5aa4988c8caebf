//! Service Configuration Module
//!
//! Provides configuration loading for the instrument map service.
//! Loads from a TOML file, applies an optional per-environment overlay, then
//! `IMAP_` prefixed environment variables. Every key has a default, so an
//! absent file section falls back cleanly.

use crate::defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_LOG_LEVEL, DEFAULT_MAX_GENERATION_ATTEMPTS, ENVIRONMENTS_DIR,
    ENV_PREFIX, ENV_SEPARATOR,
};
use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use types::CodeScheme;

/// Main service configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Identifier map settings
    pub map: InstrumentMapConfig,

    /// Tracing settings
    pub logging: LoggingConfig,
}

/// Settings for one instrument map instance
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct InstrumentMapConfig {
    /// Schemes that get a bucket in the map. `BASE` is always added.
    pub schemes: Vec<CodeScheme>,

    /// Generator calls allowed per `create_instr` before reporting a collision
    pub max_generation_attempts: u32,
}

/// Tracing output settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `instrument_map=debug`
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Default for InstrumentMapConfig {
    fn default() -> Self {
        Self {
            schemes: CodeScheme::ALL.to_vec(),
            max_generation_attempts: DEFAULT_MAX_GENERATION_ATTEMPTS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl InstrumentMapConfig {
    /// Only the given schemes (plus `BASE`)
    pub fn with_schemes(schemes: impl IntoIterator<Item = CodeScheme>) -> Self {
        Self {
            schemes: schemes.into_iter().collect(),
            ..Self::default()
        }
        .normalized()
    }

    /// Canonical form: `BASE` present, no duplicates, canonical scheme order,
    /// at least one generation attempt
    pub fn normalized(mut self) -> Self {
        self.schemes.push(CodeScheme::Base);
        self.schemes.sort();
        self.schemes.dedup();
        self.max_generation_attempts = self.max_generation_attempts.max(1);
        self
    }

    pub fn has_scheme(&self, scheme: CodeScheme) -> bool {
        scheme.is_base() || self.schemes.contains(&scheme)
    }

    /// Reject settings that `normalized` would otherwise silently repair
    pub fn validate(&self) -> Result<()> {
        if self.max_generation_attempts == 0 {
            bail!("map.max_generation_attempts must be at least 1");
        }
        Ok(())
    }
}

impl ServiceConfig {
    /// Load configuration from files with environment overrides
    ///
    /// `base_path` defaults to [`DEFAULT_CONFIG_PATH`] and may be missing, in
    /// which case defaults plus environment variables are used.
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        Self::load_with_env(base_path, environment, None)
    }

    /// Like [`ServiceConfig::load`], reading overrides from `env_vars` instead
    /// of the process environment when given
    pub fn load_with_env(
        base_path: Option<&Path>,
        environment: Option<&str>,
        env_vars: Option<Map<String, String>>,
    ) -> Result<Self> {
        let base = base_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));

        let mut builder = Config::builder();
        if base.exists() {
            debug!("Loading base config: {:?}", base);
            builder = builder.add_source(File::from(base).required(true));
        } else if base_path.is_some() {
            bail!("Configuration file not found: {:?}", base);
        } else {
            info!("No config file at {:?}, using defaults", base);
        }

        // Add environment-specific overrides if specified
        if let Some(env) = environment {
            let env_file = environment_file(base, env);
            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        // Override with environment variables (IMAP_ prefix)
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .list_separator(",")
                .with_list_parse_key("map.schemes")
                .try_parsing(true)
                .source(env_vars),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let config: ServiceConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.map.validate()?;

        Ok(Self {
            map: config.map.normalized(),
            logging: config.logging,
        })
    }
}

fn environment_file(base: &Path, environment: &str) -> PathBuf {
    base.parent()
        .unwrap_or(Path::new("."))
        .join(ENVIRONMENTS_DIR)
        .join(format!("{}.toml", environment))
}

/// Convenience function to load configuration from the default location
pub fn load_config(environment: Option<&str>) -> Result<ServiceConfig> {
    ServiceConfig::load(None, environment)
}
