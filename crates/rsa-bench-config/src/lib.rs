//! Configuration management for the RSA benchmark chart tool

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{InputConfig, LogSettings, OutputConfig, PlotConfig, StyleSettings};
