//! RSA benchmark charts - Main Entry Point

use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing::{debug, info};

use rsa_bench_common::{init_logging, LoggingConfig};
use rsa_bench_config::ConfigLoader;
use rsa_bench_plot::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ConfigLoader::load(args.config.as_deref())?;
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    init_logging(LoggingConfig {
        level: config.logging.level.clone(),
        pretty_format: config.logging.pretty,
        ansi: io::stderr().is_terminal(),
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!(e))?;

    debug!(?config, "Configuration resolved");
    info!("Reading benchmark results from {}", config.input.path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(config, &mut out)?;

    Ok(())
}
