//! Chart tool configuration structures
//!
//! Every field has a default, so an absent or empty settings file reproduces the
//! fixed behaviour: read `build/rsa_benchmark.csv`, write 7x5 inch charts at
//! 120 DPI into the current directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlotConfig {
    /// Benchmark input settings
    #[validate(nested)]
    pub input: InputConfig,

    /// Where and how large the charts are written
    #[validate(nested)]
    pub output: OutputConfig,

    /// Chart styling
    #[validate(nested)]
    pub style: StyleSettings,

    /// Logging settings
    #[validate(nested)]
    pub logging: LogSettings,
}

/// Benchmark input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct InputConfig {
    /// Path of the benchmark CSV, relative to the working directory
    pub path: PathBuf,
}

/// Output image configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for the PNG files; `None` writes bare filenames into the working directory
    pub directory: Option<PathBuf>,

    /// Figure width in inches
    #[validate(range(
        min = 1.0,
        max = 40.0,
        message = "Figure width must be between 1 and 40 inches"
    ))]
    pub figure_width_in: f64,

    /// Figure height in inches
    #[validate(range(
        min = 1.0,
        max = 40.0,
        message = "Figure height must be between 1 and 40 inches"
    ))]
    pub figure_height_in: f64,

    /// Raster resolution in dots per inch
    #[validate(range(min = 50, max = 600, message = "DPI must be between 50 and 600"))]
    pub dpi: u32,
}

/// Chart styling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StyleSettings {
    /// Background color (hex format)
    #[validate(custom(
        function = "crate::validation::validate_hex_color",
        message = "Background color must be a #RRGGBB hex color"
    ))]
    pub background_color: String,

    /// Series colours (`#RRGGBB`), cycled in order; empty uses the default palette
    #[validate(custom(
        function = "crate::validation::validate_palette",
        message = "Palette entries must be #RRGGBB hex colors"
    ))]
    pub palette: Vec<String>,

    /// Font family for all chart text
    #[validate(custom(
        function = "crate::validation::validate_font_family",
        message = "Font family cannot be empty"
    ))]
    pub font_family: String,

    /// Title font size in pixels
    #[validate(range(min = 6, max = 96, message = "Title font size must be between 6 and 96"))]
    pub title_font_size: u32,

    /// Axis description and legend font size in pixels
    #[validate(range(min = 6, max = 96, message = "Label font size must be between 6 and 96"))]
    pub label_font_size: u32,

    /// Opacity of the grid lines
    #[validate(range(min = 0.0, max = 1.0, message = "Grid opacity must be between 0 and 1"))]
    pub grid_opacity: f64,

    /// Stroke width of series lines
    #[validate(range(min = 1, max = 10, message = "Line width must be between 1 and 10"))]
    pub line_width: u32,

    /// Radius of the point markers; 0 disables them
    #[validate(range(max = 10, message = "Point size cannot exceed 10"))]
    pub point_size: u32,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LogSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error"
    ))]
    pub level: String,

    /// Multi-line pretty output instead of compact lines
    pub pretty: bool,
}

impl PlotConfig {
    /// Validate the whole tree
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }

    /// Pixel dimensions of the rendered figure
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.output.dpi);
        (
            (self.output.figure_width_in * dpi).round() as u32,
            (self.output.figure_height_in * dpi).round() as u32,
        )
    }

    /// Resolve an output file name against the configured directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        match &self.output.directory {
            Some(dir) => dir.join(file_name),
            None => Path::new(file_name).to_path_buf(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: Path::new("build").join("rsa_benchmark.csv"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            figure_width_in: 7.0,
            figure_height_in: 5.0,
            dpi: 120,
        }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            palette: Vec::new(),
            font_family: "sans-serif".to_string(),
            title_font_size: 20,
            label_font_size: 17,
            grid_opacity: 0.3,
            line_width: 2,
            point_size: 3,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            pretty: false,
        }
    }
}
