//! Instrument map demo service
//!
//! Usage:
//!   instrument-map
//!   instrument-map --config config/instrument_map.toml --environment prod
//!   instrument-map --log-level debug --json-logs

use anyhow::{Context, Result};
use clap::Parser;
use instrument_map::SharedInstrumentMap;
use map_config::{LogFormat, LoggingConfig, ServiceConfig};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use types::{Agent, AgentRole, Code, CodeScheme};

#[derive(Parser, Debug)]
#[command(name = "instrument-map")]
#[command(about = "Instrument identifier map demo")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment overlay to apply (config/environments/<name>.toml)
    #[arg(short, long)]
    environment: Option<String>,

    /// Log level, overrides the configured one
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON logging format
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServiceConfig::load(args.config.as_deref(), args.environment.as_deref())?;
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = LogFormat::Json;
    }

    init_logging(&config.logging)?;

    info!("Starting instrument map");
    info!("Configured schemes: {:?}", config.map.schemes);

    let map = SharedInstrumentMap::with_config(config.map.clone());

    if let Err(e) = run_scenario(&map) {
        error!("Scenario failed: {}", e);
        return Err(e);
    }

    let stats = map.stats();
    info!(
        "Shutting down with {} instruments and {} codes",
        stats.instruments, stats.codes
    );
    Ok(())
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&logging.level)
        .with_context(|| format!("Invalid log level '{}'", logging.level))?;

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    Ok(())
}

/// Create an instrument, attach an ISIN and a SEDOL, then look them up
fn run_scenario(map: &SharedInstrumentMap) -> Result<()> {
    let maintainer = Agent::with_generated_id(AgentRole::Maintainer, "demo-maintainer")?;
    let reader = Agent::with_generated_id(AgentRole::Reader, "demo-reader")?;

    let base = map.create_instr(&maintainer)?;
    let isin = Code::new(CodeScheme::Isin, "US0378331005")?;
    let sedol = Code::new(CodeScheme::Sedol, "2046251")?;
    map.add_instr_codes(&base, &[isin.clone(), sedol], &maintainer)?;

    for code in map.get_instr_codes(&isin, &reader)? {
        println!("{}", code);
    }

    let found = map.get_instr_code_of_type(&base, CodeScheme::Isin, &reader)?;
    println!("ISIN of {}: {}", base.value(), found.value());

    match map.get_instr_code_of_type(&base, CodeScheme::Ric, &reader) {
        Ok(ric) => println!("RIC of {}: {}", base.value(), ric.value()),
        Err(e) => println!("No RIC: {}", e),
    }

    if let Err(e) = map.create_instr(&reader) {
        println!("Reader cannot create instruments: {}", e);
    }

    Ok(())
}
