//! Error types and utilities for the RSA benchmark chart tool

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for chart tool operations
pub type Result<T> = std::result::Result<T, BenchPlotError>;

/// Main error type for loading benchmark data and rendering charts
#[derive(Error, Debug)]
pub enum BenchPlotError {
    /// The benchmark CSV does not exist at the expected path
    #[error("CSV not found at: {}", path.display())]
    MissingInput { path: PathBuf },

    /// The benchmark CSV exists but its content cannot be used
    #[error("Malformed input: {message}")]
    MalformedInput {
        message: String,
        line: Option<u64>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for settings
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BenchPlotError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a missing input error for the given path
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    /// Create a new malformed input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: msg.into(),
            line: None,
            source: None,
        }
    }

    /// Create a new malformed input error pointing at a CSV line
    pub fn malformed_at_line(msg: impl Into<String>, line: u64) -> Self {
        Self::MalformedInput {
            message: msg.into(),
            line: Some(line),
            source: None,
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// CSV line the error refers to, if any
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::MalformedInput { line, .. } => *line,
            _ => None,
        }
    }
}

// Error conversion implementations for external types

/// Convert from csv::Error to BenchPlotError
impl From<csv::Error> for BenchPlotError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            return match err.into_kind() {
                csv::ErrorKind::Io(io) => Self::Io(io),
                kind => Self::malformed(format!("{kind:?}")),
            };
        }

        let line = err.position().map(csv::Position::line);
        let message = match line {
            Some(line) => format!("line {line}: {err}"),
            None => err.to_string(),
        };
        Self::MalformedInput {
            message,
            line,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to BenchPlotError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for BenchPlotError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}
