//! Graph rendering trait and the plotters line chart implementation

use crate::{ColorScheme, DataSet, FontConfig, GraphConfig};
use plotters::prelude::*;
use rsa_bench_common::{BenchPlotError, Result};
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// Ten-colour categorical palette used when no custom palette is configured
const DEFAULT_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
    RGBColor(140, 86, 75),   // Brown
    RGBColor(227, 119, 194), // Pink
    RGBColor(127, 127, 127), // Gray
    RGBColor(188, 189, 34),  // Olive
    RGBColor(23, 190, 207),  // Cyan
];

/// Trait for rendering charts to image files
pub trait ChartRenderer {
    /// Render a chart to a file path, replacing any existing file
    fn render_to_file(&self, config: &GraphConfig, datasets: &[DataSet], path: &Path) -> Result<()>;

    /// Get colors from color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Custom(colors) if !colors.is_empty() => colors
                .iter()
                .map(|color_str| self.parse_color(color_str))
                .collect(),
            _ => DEFAULT_PALETTE.to_vec(),
        }
    }

    /// Parse a color string (hex format) to RGBColor
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }

    /// Get background color from style config
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map(|color| self.parse_color(color))
            .unwrap_or(RGBColor(255, 255, 255))
    }
}

/// Line chart renderer backed by the plotters bitmap backend (PNG output)
#[derive(Debug, Default, Clone, Copy)]
pub struct LineChartRenderer;

impl LineChartRenderer {
    /// Create a new line chart renderer
    pub fn new() -> Self {
        Self
    }

    /// Data ranges for all datasets, padded by 5% on each side
    fn calculate_data_ranges(&self, datasets: &[DataSet]) -> Result<(Range<f64>, Range<f64>)> {
        let mut points = datasets.iter().flat_map(|dataset| dataset.data.iter()).peekable();
        if points.peek().is_none() {
            return Ok((0.0..1.0, 0.0..1.0));
        }

        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for point in points {
            x_min = x_min.min(point.x);
            x_max = x_max.max(point.x);
            y_min = y_min.min(point.y);
            y_max = y_max.max(point.y);
        }

        Ok((padded(x_min, x_max)?, padded(y_min, y_max)?))
    }
}

/// Pad a span by 5%; a zero-width span is widened to at least one unit each way.
///
/// Fails when the padded bounds are not finite.
fn padded(min: f64, max: f64) -> Result<Range<f64>> {
    let span = max - min;
    let padding = if span > 0.0 {
        span * 0.05
    } else {
        (min.abs() * 0.05).max(1.0)
    };

    let (start, end) = (min - padding, max + padding);
    if !(start.is_finite() && end.is_finite()) {
        return Err(BenchPlotError::graph(format!(
            "axis range {min}..{max} cannot be plotted"
        )));
    }
    Ok(start..end)
}

fn text_font(font: &FontConfig) -> FontDesc<'_> {
    (font.family.as_str(), f64::from(font.size)).into_font()
}

impl ChartRenderer for LineChartRenderer {
    fn render_to_file(
        &self,
        config: &GraphConfig,
        datasets: &[DataSet],
        path: &Path,
    ) -> Result<()> {
        let style = &config.style;
        let (x_range, y_range) = self.calculate_data_ranges(datasets)?;

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.get_background_color(config))?;

        let title_font = text_font(&style.title_font);
        let label_font = text_font(&style.label_font);
        let tick_font = text_font(&style.tick_font);

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(style.margins.outer)
            .x_label_area_size(style.margins.x_label_area)
            .y_label_area_size(style.margins.y_label_area)
            .build_cartesian_2d(x_range, y_range)?;

        // Key sizes are whole bits
        let x_formatter = |x: &f64| format!("{x:.0}");
        let grid_color = BLACK.mix(style.grid.opacity);

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(config.x_label.as_deref().unwrap_or(""))
            .y_desc(config.y_label.as_deref().unwrap_or(""))
            .axis_desc_style(label_font.clone())
            .label_style(tick_font)
            .x_label_formatter(&x_formatter)
            .bold_line_style(grid_color)
            .light_line_style(WHITE.mix(0.0));
        if !style.grid.show {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        if !datasets.is_empty() {
            if let Some(legend_title) = &config.legend_title {
                // Label-only entry: no glyph, heads the legend
                chart
                    .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?
                    .label(legend_title.as_str());
            }
        }

        let colors = self.get_colors(&style.color_scheme);
        for (i, dataset) in datasets.iter().enumerate() {
            let color = colors[i % colors.len()];
            let line_data: Vec<(f64, f64)> =
                dataset.data.iter().map(|point| (point.x, point.y)).collect();

            chart
                .draw_series(LineSeries::new(
                    line_data.iter().copied(),
                    color.stroke_width(style.line_width),
                ))?
                .label(dataset.name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            if style.point_size > 0 {
                let radius = style.point_size as i32;
                chart.draw_series(
                    line_data
                        .iter()
                        .map(|&point| Circle::new(point, radius, color.filled())),
                )?;
            }
        }

        if !datasets.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font(label_font)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK.mix(0.3))
                .draw()?;
        }

        root.present()?;

        debug!(
            series = datasets.len(),
            width = config.width,
            height = config.height,
            "Rendered line chart to {}",
            path.display()
        );
        Ok(())
    }
}
