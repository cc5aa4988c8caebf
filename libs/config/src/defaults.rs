//! Default values shared by configuration loading and the map service

/// Prefix for environment variable overrides (`IMAP_MAP__MAX_GENERATION_ATTEMPTS`)
pub const ENV_PREFIX: &str = "IMAP";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Base configuration file used when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config/instrument_map.toml";

/// Directory, relative to the base file, holding per-environment overrides
pub const ENVIRONMENTS_DIR: &str = "environments";

/// How many times the map asks the generator for a fresh base value
/// before giving up on a collision
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: u32 = 3;

/// Default tracing filter
pub const DEFAULT_LOG_LEVEL: &str = "info";
