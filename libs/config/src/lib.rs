//! # Instrument Map Configuration
//!
//! Configuration loading and defaults for the instrument identifier map.
//!
//! ## Features
//!
//! - **Map Settings**: which code schemes get a bucket, base code generation retries
//! - **Logging Settings**: tracing filter and output format
//! - **Layered Loading**: TOML file, per-environment overlay, `IMAP_` environment variables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use map_config::ServiceConfig;
//! use std::path::Path;
//!
//! let config = ServiceConfig::load(Some(Path::new("config/instrument_map.toml")), Some("dev"))?;
//! println!("schemes: {:?}", config.map.schemes);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod defaults;
pub mod service_config;

pub use service_config::{load_config, InstrumentMapConfig, LogFormat, LoggingConfig, ServiceConfig};
