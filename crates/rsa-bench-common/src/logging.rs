//! Structured logging setup
//!
//! Diagnostics always go to stderr; stdout carries only the report lines
//! (`Saved <path>`, `All charts saved.`).

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "rsa_bench_graphs=trace")
    pub level: String,
    /// Whether to enable pretty multi-line formatting
    pub pretty_format: bool,
    /// Whether to emit ANSI colours
    pub ansi: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            pretty_format: false,
            ansi: true,
            include_targets: true,
        }
    }
}

/// Build the level filter: `RUST_LOG` wins, then the configured level, then `info`
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let registry = tracing_subscriber::registry().with(build_filter(&config.level));

    if config.pretty_format {
        let layer = fmt::layer()
            .pretty()
            .with_writer(io::stderr)
            .with_ansi(config.ansi)
            .with_target(config.include_targets);
        registry.with(layer).try_init()?;
    } else {
        let layer = fmt::layer()
            .compact()
            .with_writer(io::stderr)
            .with_ansi(config.ansi)
            .with_target(config.include_targets);
        registry.with(layer).try_init()?;
    }

    Ok(())
}
