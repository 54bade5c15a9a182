//! Configuration for visualization functionality
//!
//! This module provides the settings shared by the Plotters (PNG/SVG) and
//! textplots (terminal) renderers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Plot output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG document
    Svg,
    /// Braille line chart printed to stdout
    Terminal,
}

impl OutputFormat {
    /// File extension for file-based formats
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Png => Some("png"),
            OutputFormat::Svg => Some("svg"),
            OutputFormat::Terminal => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Terminal => "terminal",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "terminal" | "term" | "text" => Ok(OutputFormat::Terminal),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Where a rendered chart goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotOutput {
    /// PNG file at the given path
    Png(PathBuf),
    /// SVG file at the given path
    Svg(PathBuf),
    /// Standard output
    Terminal,
}

impl PlotOutput {
    /// Build an output target for `format`, naming the file `<directory>/<stem>.<ext>`
    pub fn for_format(format: OutputFormat, directory: impl Into<PathBuf>, stem: &str) -> Self {
        let Some(extension) = format.extension() else {
            return PlotOutput::Terminal;
        };

        let path = directory.into().join(format!("{}.{}", stem, extension));
        match format {
            OutputFormat::Svg => PlotOutput::Svg(path),
            _ => PlotOutput::Png(path),
        }
    }
}

/// Plot settings
#[derive(Debug, Clone)]
pub struct PlotSettings {
    /// Title
    pub title: String,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Width of the image (pixels)
    pub width: u32,
    /// Height of the image (pixels)
    pub height: u32,
    /// Width of terminal charts (characters, at least 32)
    pub text_width: u32,
    /// Height of terminal charts (lines, at least 3)
    pub text_height: u32,
    /// Show grid
    pub show_grid: bool,
    /// Line color
    pub line_color: (u8, u8, u8),
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            title: "Plot".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            width: 800,
            height: 600,
            text_width: 120,
            text_height: 30,
            show_grid: true,
            line_color: (0, 123, 255),
        }
    }
}

impl PlotSettings {
    /// Settings for the raw series chart
    pub fn series_chart() -> Self {
        PlotSettings {
            title: "Synthetic time series with seasonality".to_string(),
            x_label: "Date".to_string(),
            y_label: "Value".to_string(),
            width: 1200,
            height: 600,
            ..Default::default()
        }
    }

    /// Settings for the four-panel decomposition chart
    pub fn decomposition_chart() -> Self {
        PlotSettings {
            title: "Additive seasonal decomposition".to_string(),
            x_label: String::new(),
            y_label: String::new(),
            width: 1200,
            height: 1600,
            text_height: 15,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
