//! Configuration management for the seasonal demo
//!
//! This module provides configuration with support for:
//! - Built-in defaults matching the reference demonstration
//! - YAML/TOML configuration files
//! - Configuration validation

use crate::error::{Error, Result};
use crate::vis::{OutputFormat, PlotOutput, PlotSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod loader;
pub mod validation;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Synthetic series parameters
    pub series: SeriesConfig,
    /// Chart output settings
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Synthetic series section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// First date of the series (YYYY-MM-DD)
    pub start_date: String,
    /// Number of daily observations
    pub num_periods: i64,
    /// Length of the seasonal cycle, also used for decomposition
    pub seasonality_period: i64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            start_date: "2010-01-01".to_string(),
            num_periods: 1000,
            seasonality_period: 365,
        }
    }
}

/// Chart output section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output sink
    pub format: OutputFormat,
    /// Directory for image files
    pub directory: PathBuf,
    /// File stem of the series chart
    pub series_file: String,
    /// File stem of the decomposition chart
    pub decomposition_file: String,
    /// Series chart size in pixels
    pub series_width: u32,
    pub series_height: u32,
    /// Decomposition chart size in pixels
    pub decomposition_width: u32,
    pub decomposition_height: u32,
    /// Terminal chart width in characters
    pub text_width: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            directory: PathBuf::from("output"),
            series_file: "time_series".to_string(),
            decomposition_file: "decomposition".to_string(),
            series_width: 1200,
            series_height: 600,
            decomposition_width: 1200,
            decomposition_height: 1600,
            text_width: 120,
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error, off)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_from_file(path.as_ref())
    }

    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        loader::load_from_yaml(yaml)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        loader::load_from_toml(toml)
    }

    /// Load configuration from defaults or a file, then validate it
    pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<Self> {
        loader::load_with_precedence(config_file)
    }

    /// Validate configuration and return errors if invalid
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to YAML: {}", e))
        })
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to TOML: {}", e))
        })
    }

    pub fn series_output(&self) -> PlotOutput {
        PlotOutput::for_format(
            self.output.format,
            self.output.directory.clone(),
            &self.output.series_file,
        )
    }

    pub fn decomposition_output(&self) -> PlotOutput {
        PlotOutput::for_format(
            self.output.format,
            self.output.directory.clone(),
            &self.output.decomposition_file,
        )
    }

    pub fn series_plot_settings(&self) -> PlotSettings {
        let mut settings = PlotSettings::series_chart()
            .with_size(self.output.series_width, self.output.series_height);
        settings.text_width = self.output.text_width;
        settings
    }

    pub fn decomposition_plot_settings(&self) -> PlotSettings {
        let mut settings = PlotSettings::decomposition_chart()
            .with_size(self.output.decomposition_width, self.output.decomposition_height);
        settings.title = format!(
            "Additive seasonal decomposition (period {})",
            self.series.seasonality_period
        );
        settings.text_width = self.output.text_width;
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demonstration() {
        let config = DemoConfig::default();
        assert_eq!(config.series.start_date, "2010-01-01");
        assert_eq!(config.series.num_periods, 1000);
        assert_eq!(config.series.seasonality_period, 365);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_outputs_follow_format() {
        let mut config = DemoConfig::default();
        assert_eq!(
            config.series_output(),
            PlotOutput::Png(PathBuf::from("output").join("time_series.png"))
        );

        config.output.format = OutputFormat::Terminal;
        assert_eq!(config.decomposition_output(), PlotOutput::Terminal);
    }

    #[test]
    fn test_plot_settings_sizes() {
        let config = DemoConfig::default();
        let settings = config.decomposition_plot_settings();
        assert_eq!((settings.width, settings.height), (1200, 1600));
        assert!(settings.title.contains("period 365"));
    }
}
