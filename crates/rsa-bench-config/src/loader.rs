//! Configuration loading utilities

use crate::PlotConfig;
use rsa_bench_common::{BenchPlotError, Result as BenchResult};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl From<ConfigError> for BenchPlotError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError(errors) => {
                let field = errors.errors().keys().next().map(ToString::to_string);
                match field {
                    Some(field) => BenchPlotError::validation_field(errors.to_string(), field),
                    None => BenchPlotError::validation(errors.to_string()),
                }
            }
            other => BenchPlotError::config_with_source(other.to_string(), other),
        }
    }
}

/// Configuration loader for the chart tool
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlotConfig, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&content)?;
        debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn parse(content: &str) -> Result<PlotConfig, ConfigError> {
        // serde_yaml rejects an empty document for a struct
        let config: PlotConfig = if content.trim().is_empty() {
            PlotConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };

        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration from an optional file, falling back to defaults
    pub fn load(path: Option<&Path>) -> BenchResult<PlotConfig> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                info!("No configuration file given, using defaults");
                Ok(PlotConfig::default())
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BenchResult<PlotConfig> {
        Ok(Self::load_config(path)?)
    }
}
