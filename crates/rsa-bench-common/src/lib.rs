//! Common error types and logging setup for the RSA benchmark chart tool

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{BenchPlotError, Result};
pub use logging::{init_logging, LoggingConfig};
