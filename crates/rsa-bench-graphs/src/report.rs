//! Chart report generation: one PNG per metric plus console confirmations

use crate::{build_series, BenchmarkTable, ChartRenderer, GraphConfig, Metric};
use rsa_bench_config::PlotConfig;
use rsa_bench_common::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Final console line once every chart is written
pub const COMPLETION_MESSAGE: &str = "All charts saved.";

/// Renders the metric charts of an OK-filtered benchmark table
pub struct ReportGenerator<R> {
    renderer: R,
    config: PlotConfig,
}

impl<R: ChartRenderer> ReportGenerator<R> {
    /// Create a generator drawing through `renderer`
    pub fn new(renderer: R, config: PlotConfig) -> Self {
        Self { renderer, config }
    }

    /// Underlying renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Where the chart for `metric` is written
    pub fn output_path(&self, metric: Metric) -> PathBuf {
        self.config.output_path(&metric.file_name())
    }

    /// Draw one chart of `metric` to `path` and confirm it on `out`.
    ///
    /// The file is fully written before the `Saved` line appears.
    pub fn render<W: Write>(
        &self,
        table: &BenchmarkTable,
        metric: Metric,
        path: &Path,
        out: &mut W,
    ) -> Result<()> {
        let datasets = build_series(table, metric)?;
        let graph = GraphConfig::for_metric(metric, &self.config);

        self.renderer.render_to_file(&graph, &datasets, path)?;
        info!(%metric, series = datasets.len(), "Chart written to {}", path.display());

        writeln!(out, "Saved {}", path.display())?;
        Ok(())
    }

    /// Render every metric in order, then print the completion line.
    ///
    /// Stops at the first failure; charts already written stay on disk.
    pub fn render_all<W: Write>(
        &self,
        table: &BenchmarkTable,
        out: &mut W,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(Metric::ALL.len());
        for metric in Metric::ALL {
            let path = self.output_path(metric);
            self.render(table, metric, &path, out)?;
            written.push(path);
        }

        writeln!(out, "{COMPLETION_MESSAGE}")?;
        out.flush()?;
        Ok(written)
    }
}
