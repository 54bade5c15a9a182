//! Configuration validation utilities
//!
//! Series parameters (start date, period count, seasonality) are left to the
//! generator and the decomposition, which report them as `InvalidArgument` at
//! run time.

use super::*;
use crate::error::{Error, Result};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Pixel size above which a warning is logged
const LARGE_CHART_PIXELS: u32 = 10_000;

/// Validate the entire configuration
pub fn validate_config(config: &DemoConfig) -> Result<()> {
    validate_output_config(&config.output)?;
    validate_logging_config(&config.logging)?;

    Ok(())
}

/// Validate output settings
pub fn validate_output_config(config: &OutputConfig) -> Result<()> {
    validate_chart_size("series", config.series_width, config.series_height)?;
    validate_chart_size(
        "decomposition",
        config.decomposition_width,
        config.decomposition_height,
    )?;

    // textplots needs at least 32 columns
    if config.text_width < 32 {
        return Err(Error::ConfigurationError(format!(
            "text_width must be at least 32, got {}",
            config.text_width
        )));
    }

    if config.series_file.trim().is_empty() || config.decomposition_file.trim().is_empty() {
        return Err(Error::ConfigurationError(
            "Output file names cannot be empty".to_string(),
        ));
    }

    if config.series_file == config.decomposition_file {
        return Err(Error::ConfigurationError(format!(
            "series_file and decomposition_file must differ (both '{}')",
            config.series_file
        )));
    }

    Ok(())
}

fn validate_chart_size(name: &str, width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::ConfigurationError(format!(
            "{} chart size must be greater than 0, got {}x{}",
            name, width, height
        )));
    }

    if width > LARGE_CHART_PIXELS || height > LARGE_CHART_PIXELS {
        log::warn!(
            "{} chart size {}x{} is very large and may be slow to render",
            name,
            width,
            height
        );
    }

    Ok(())
}

/// Validate logging configuration
pub fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    let level = config.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(Error::ConfigurationError(format!(
            "Invalid log level '{}'. Must be one of: {}",
            config.level,
            LOG_LEVELS.join(", ")
        )));
    }

    Ok(())
}
