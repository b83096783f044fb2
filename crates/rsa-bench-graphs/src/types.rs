//! Chart configuration and plotted data structures

use crate::Metric;
use rsa_bench_config::PlotConfig;

/// X axis description shared by every chart
pub const KEY_SIZE_LABEL: &str = "Key Size (bits)";

/// Legend heading above the series entries
pub const LEGEND_TITLE: &str = "Message length";

/// Chart configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Caption above the plot
    pub title: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// X axis description
    pub x_label: Option<String>,
    /// Y axis description
    pub y_label: Option<String>,
    /// Heading drawn as the first legend entry
    pub legend_title: Option<String>,
    /// Colours, fonts and strokes
    pub style: StyleConfig,
}

impl GraphConfig {
    /// Chart configuration for one metric
    pub fn for_metric(metric: Metric, config: &PlotConfig) -> Self {
        let (width, height) = config.pixel_size();
        Self {
            title: metric.title(),
            width,
            height,
            x_label: Some(KEY_SIZE_LABEL.to_string()),
            y_label: Some(metric.y_label()),
            legend_title: Some(LEGEND_TITLE.to_string()),
            style: StyleConfig::from_settings(config),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            title: "Graph".to_string(),
            width: 840,
            height: 600,
            x_label: None,
            y_label: None,
            legend_title: None,
            style: StyleConfig::default(),
        }
    }
}

/// Data point for graphs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// Key size in bits
    pub x: f64,
    /// Timing in milliseconds
    pub y: f64,
}

/// One plotted line
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Legend label, e.g. `MsgLen=16`
    pub name: String,
    /// Points in drawing order
    pub data: Vec<DataPoint>,
}

/// Color scheme for graphs
#[derive(Debug, Clone, PartialEq)]
pub enum ColorScheme {
    /// Ten-colour categorical palette
    Default,
    /// `#RRGGBB` strings, cycled in order
    Custom(Vec<String>),
}

/// Font configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FontConfig {
    /// Font family name
    pub family: String,
    /// Size in pixels
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 17,
        }
    }
}

/// Margin configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MarginConfig {
    /// Outer margin around the chart
    pub outer: u32,
    /// Height reserved for x tick labels and description
    pub x_label_area: u32,
    /// Width reserved for y tick labels and description
    pub y_label_area: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            outer: 15,
            x_label_area: 55,
            y_label_area: 75,
        }
    }
}

/// Grid line configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Whether mesh lines are drawn
    pub show: bool,
    /// Opacity of the mesh lines
    pub opacity: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            show: true,
            opacity: 0.3,
        }
    }
}

/// Comprehensive styling configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Series colours
    pub color_scheme: ColorScheme,
    /// Background fill, `#RRGGBB`
    pub background_color: Option<String>,
    /// Caption font
    pub title_font: FontConfig,
    /// Axis description and legend font
    pub label_font: FontConfig,
    /// Tick label font
    pub tick_font: FontConfig,
    /// Plot area margins
    pub margins: MarginConfig,
    /// Mesh lines
    pub grid: GridConfig,
    /// Series stroke width
    pub line_width: u32,
    /// Marker radius; 0 disables markers
    pub point_size: u32,
}

impl StyleConfig {
    /// Derive chart styling from the tool settings
    pub fn from_settings(config: &PlotConfig) -> Self {
        let style = &config.style;
        let color_scheme = if style.palette.is_empty() {
            ColorScheme::Default
        } else {
            ColorScheme::Custom(style.palette.clone())
        };

        Self {
            color_scheme,
            background_color: Some(style.background_color.clone()),
            title_font: FontConfig {
                family: style.font_family.clone(),
                size: style.title_font_size,
            },
            label_font: FontConfig {
                family: style.font_family.clone(),
                size: style.label_font_size,
            },
            tick_font: FontConfig {
                family: style.font_family.clone(),
                size: (style.label_font_size * 4 / 5).max(6),
            },
            margins: MarginConfig::default(),
            grid: GridConfig {
                show: style.grid_opacity > 0.0,
                opacity: style.grid_opacity,
            },
            line_width: style.line_width,
            point_size: style.point_size,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::from_settings(&PlotConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_config_for_metric() {
        let config = GraphConfig::for_metric(Metric::Encrypt, &PlotConfig::default());
        assert_eq!(config.title, "RSA EncryptMS vs Key Size");
        assert_eq!(config.x_label.as_deref(), Some("Key Size (bits)"));
        assert_eq!(config.y_label.as_deref(), Some("EncryptMS (ms)"));
        assert_eq!(config.legend_title.as_deref(), Some("Message length"));
        assert_eq!((config.width, config.height), (840, 600));
    }

    #[test]
    fn test_style_from_settings() {
        let mut settings = PlotConfig::default();
        settings.style.palette = vec!["#FF0000".to_string()];
        settings.style.grid_opacity = 0.0;

        let style = StyleConfig::from_settings(&settings);
        assert_eq!(style.color_scheme, ColorScheme::Custom(vec!["#FF0000".to_string()]));
        assert!(!style.grid.show);
        assert_eq!(style.title_font.size, 20);
    }

    #[test]
    fn test_default_style() {
        let style = StyleConfig::default();
        assert_eq!(style.color_scheme, ColorScheme::Default);
        assert_eq!(style.background_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(style.grid.opacity, 0.3);
    }
}
