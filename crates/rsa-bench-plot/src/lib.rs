//! RSA benchmark charts: load → filter → render the three timing charts

use clap::Parser;
use rsa_bench_common::Result;
use rsa_bench_config::PlotConfig;
use rsa_bench_graphs::{BenchmarkTable, ChartRenderer, LineChartRenderer, ReportGenerator};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Command line arguments; with none given the built-in defaults apply
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YAML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overriding the settings file
    #[arg(short, long, value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: Option<String>,
}

/// Run the report with the PNG line chart renderer
pub fn run<W: Write>(config: PlotConfig, out: &mut W) -> Result<Vec<PathBuf>> {
    run_with(LineChartRenderer::new(), config, out)
}

/// Run the report through any renderer
pub fn run_with<R: ChartRenderer, W: Write>(
    renderer: R,
    config: PlotConfig,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    let table = BenchmarkTable::load(&config.input.path)?;
    let ok = table.ok_only();
    info!(total = table.len(), ok = ok.len(), "Benchmark table filtered");

    ReportGenerator::new(renderer, config).render_all(&ok, out)
}
