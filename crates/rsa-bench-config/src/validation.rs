//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a `#RRGGBB` color string
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_REGEX.is_match(color) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_hex_color"))
    }
}

/// Validate every entry of a colour palette
pub fn validate_palette(colors: &[String]) -> Result<(), ValidationError> {
    colors
        .iter()
        .try_for_each(|color| validate_hex_color(color))
        .map_err(|_| ValidationError::new("invalid_palette_color"))
}

/// Validate log level string
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// Validate that a font family name is usable
pub fn validate_font_family(family: &str) -> Result<(), ValidationError> {
    if family.trim().is_empty() {
        return Err(ValidationError::new("empty_font_family"));
    }
    Ok(())
}
