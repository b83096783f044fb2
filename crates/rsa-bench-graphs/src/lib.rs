//! # RSA benchmark graphs
//!
//! Loads benchmark CSV tables, groups timings by message length and renders
//! them as line charts using plotters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod metric;
pub mod record;
pub mod renderer;
pub mod report;
pub mod series;
pub mod types;

pub use metric::Metric;
pub use record::{BenchmarkRecord, BenchmarkTable, REQUIRED_COLUMNS, STATUS_OK};
pub use renderer::{ChartRenderer, LineChartRenderer};
pub use report::ReportGenerator;
pub use series::build_series;
pub use types::*;
