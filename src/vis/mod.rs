//! Module providing data visualization functionality
//!
//! Charts go either to image files through Plotters (PNG/SVG) or to the
//! terminal through textplots. Both renderers share `PlotSettings`.

pub mod config;
pub mod plotters;
pub mod text;

pub use self::config::{OutputFormat, PlotOutput, PlotSettings};

use crate::error::{Error, Result};
use crate::time_series::decomposition::require_series;
use crate::time_series::{Decomposition, TimeSeries};
use std::fs;
use std::path::Path;

/// Render the series as a single line chart (date vs value).
///
/// Fails with `InvalidState` when the series is missing or empty; nothing is
/// rendered in that case.
pub fn plot_time_series(
    series: Option<&TimeSeries>,
    output: &PlotOutput,
    settings: &PlotSettings,
) -> Result<()> {
    let series = require_series(series)?;

    match output {
        PlotOutput::Terminal => text::print_series(series, settings),
        PlotOutput::Png(path) => {
            prepare_parent(path)?;
            render_series_png(series, path, settings)?;
            log::info!("Series chart written to {}", path.display());
            Ok(())
        }
        PlotOutput::Svg(path) => {
            prepare_parent(path)?;
            render_series_svg(series, path, settings)?;
            log::info!("Series chart written to {}", path.display());
            Ok(())
        }
    }
}

/// Render the observed, trend, seasonal and residual panels stacked on a shared date axis
pub fn plot_decomposition(
    decomposition: &Decomposition,
    output: &PlotOutput,
    settings: &PlotSettings,
) -> Result<()> {
    if decomposition.is_empty() {
        return Err(Error::InvalidState(
            "Decomposition has no observations".to_string(),
        ));
    }

    match output {
        PlotOutput::Terminal => text::print_decomposition(decomposition, settings),
        PlotOutput::Png(path) => {
            prepare_parent(path)?;
            render_decomposition_png(decomposition, path, settings)?;
            log::info!("Decomposition chart written to {}", path.display());
            Ok(())
        }
        PlotOutput::Svg(path) => {
            prepare_parent(path)?;
            render_decomposition_svg(decomposition, path, settings)?;
            log::info!("Decomposition chart written to {}", path.display());
            Ok(())
        }
    }
}

fn prepare_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            log::debug!("Ensuring output directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(feature = "visualization")]
fn render_series_png(series: &TimeSeries, path: &Path, settings: &PlotSettings) -> Result<()> {
    self::plotters::plot_series_png(series, path, settings)
}

#[cfg(feature = "visualization")]
fn render_series_svg(series: &TimeSeries, path: &Path, settings: &PlotSettings) -> Result<()> {
    self::plotters::plot_series_svg(series, path, settings)
}

#[cfg(feature = "visualization")]
fn render_decomposition_png(
    decomposition: &Decomposition,
    path: &Path,
    settings: &PlotSettings,
) -> Result<()> {
    self::plotters::plot_decomposition_png(decomposition, path, settings)
}

#[cfg(feature = "visualization")]
fn render_decomposition_svg(
    decomposition: &Decomposition,
    path: &Path,
    settings: &PlotSettings,
) -> Result<()> {
    self::plotters::plot_decomposition_svg(decomposition, path, settings)
}

#[cfg(not(feature = "visualization"))]
fn render_series_png(_: &TimeSeries, _: &Path, _: &PlotSettings) -> Result<()> {
    Err(feature_not_available())
}

#[cfg(not(feature = "visualization"))]
fn render_series_svg(_: &TimeSeries, _: &Path, _: &PlotSettings) -> Result<()> {
    Err(feature_not_available())
}

#[cfg(not(feature = "visualization"))]
fn render_decomposition_png(_: &Decomposition, _: &Path, _: &PlotSettings) -> Result<()> {
    Err(feature_not_available())
}

#[cfg(not(feature = "visualization"))]
fn render_decomposition_svg(_: &Decomposition, _: &Path, _: &PlotSettings) -> Result<()> {
    Err(feature_not_available())
}

#[cfg(not(feature = "visualization"))]
fn feature_not_available() -> Error {
    Error::FeatureNotAvailable(
        "Visualization feature is not enabled. Recompile with --features visualization"
            .to_string(),
    )
}

/// Split values into maximal runs of consecutive defined points, as (position, value)
pub(crate) fn defined_runs(values: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) if v.is_finite() => current.push((i, *v)),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Y range over defined values with a 5% margin; never empty
pub(crate) fn value_bounds(values: &[Option<f64>]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() {
        return (-1.0, 1.0);
    }
    if max - min < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }

    let margin = (max - min) * 0.05;
    (min - margin, max + margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_defined_runs_split_on_gaps() {
        let values = [None, Some(1.0), Some(2.0), None, Some(3.0), Some(f64::NAN)];
        let runs = defined_runs(&values);
        assert_eq!(runs, vec![vec![(1, 1.0), (2, 2.0)], vec![(4, 3.0)]]);
    }

    #[test]
    fn test_value_bounds() {
        assert_eq!(value_bounds(&[None, None]), (-1.0, 1.0));
        assert_eq!(value_bounds(&[Some(2.0), Some(2.0)]), (1.0, 3.0));

        let (lo, hi) = value_bounds(&[Some(0.0), None, Some(10.0)]);
        assert!((lo + 0.5).abs() < 1e-12);
        assert!((hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_plot_rejects_missing_series() {
        let result = plot_time_series(None, &PlotOutput::Terminal, &PlotSettings::series_chart());
        assert!(matches!(result, Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_plot_rejects_empty_series() {
        let empty = TimeSeries::daily(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), vec![]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.png");

        let result = plot_time_series(
            Some(&empty),
            &PlotOutput::Png(path.clone()),
            &PlotSettings::series_chart(),
        );
        assert!(matches!(result, Err(Error::InvalidState(_))));
        assert!(!path.exists());
    }
}
