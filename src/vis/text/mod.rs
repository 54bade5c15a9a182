//! Text-based visualization functionality
//!
//! Renders charts as braille line plots with the textplots library so they can
//! be displayed directly in the terminal. The x axis is the day offset from the
//! first date of the series.

use crate::error::Result;
#[cfg(feature = "visualization")]
use crate::time_series::{Component, Decomposition, TimeSeries};
use crate::vis::config::PlotSettings;
#[cfg(feature = "visualization")]
use crate::vis::defined_runs;
#[cfg(feature = "visualization")]
use textplots::{Chart, Plot, Shape};

/// Render one chart of `values` (day offset on x) with a header line
#[cfg(feature = "visualization")]
pub fn render_chart(title: &str, values: &[Option<f64>], width: u32, height: u32) -> String {
    let mut out = format!("=== {} ===\n", title);

    let runs = defined_runs(values);
    let points: Vec<(f32, f32)> = runs
        .iter()
        .flatten()
        .map(|&(i, v)| (i as f32, v as f32))
        .collect();

    let (x_min, x_max) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if last.0 > first.0 => (first.0, last.0),
        (Some(first), _) => (first.0, first.0 + 1.0),
        _ => {
            out.push_str("(no defined values)\n");
            return out;
        }
    };

    // A single run is drawn as a line; interior gaps fall back to points so they stay visible
    let shape = if runs.len() == 1 {
        Shape::Lines(&points)
    } else {
        Shape::Points(&points)
    };

    let mut chart = Chart::new(width, height, x_min, x_max);
    let chart = chart.lineplot(&shape);
    chart.axis();
    chart.figures();
    out.push_str(&chart.to_string());
    out
}

/// Render the raw series chart
#[cfg(feature = "visualization")]
pub fn render_series(series: &TimeSeries, settings: &PlotSettings) -> String {
    let values: Vec<Option<f64>> = series.values().iter().copied().map(Some).collect();
    let mut out = render_chart(
        &settings.title,
        &values,
        settings.text_width,
        settings.text_height,
    );
    out.push_str(&axis_caption(series.start(), series.end(), settings));
    out
}

/// Render the four decomposition panels one under another
#[cfg(feature = "visualization")]
pub fn render_decomposition(decomposition: &Decomposition, settings: &PlotSettings) -> String {
    let mut out = format!("##### {} #####\n", settings.title);
    for component in Component::ALL {
        out.push_str(&render_chart(
            component.title(),
            &decomposition.component(component),
            settings.text_width,
            settings.text_height,
        ));
        out.push('\n');
    }
    out.push_str(&axis_caption(
        decomposition.index().start(),
        decomposition.index().end(),
        settings,
    ));
    out
}

#[cfg(feature = "visualization")]
fn axis_caption(
    start: Option<chrono::NaiveDate>,
    end: Option<chrono::NaiveDate>,
    settings: &PlotSettings,
) -> String {
    let mut caption = match (start, end) {
        (Some(start), Some(end)) => format!("X: days since {} (through {})", start, end),
        _ => "X: days".to_string(),
    };
    if !settings.x_label.is_empty() || !settings.y_label.is_empty() {
        caption.push_str(&format!(
            "; axes: {} / {}",
            settings.x_label, settings.y_label
        ));
    }
    caption.push('\n');
    caption
}

/// Print the raw series chart to stdout
#[cfg(feature = "visualization")]
pub fn print_series(series: &TimeSeries, settings: &PlotSettings) -> Result<()> {
    println!("{}", render_series(series, settings));
    Ok(())
}

/// Print the decomposition panels to stdout
#[cfg(feature = "visualization")]
pub fn print_decomposition(decomposition: &Decomposition, settings: &PlotSettings) -> Result<()> {
    println!("{}", render_decomposition(decomposition, settings));
    Ok(())
}

/// Fallback implementation when visualization is not available
#[cfg(not(feature = "visualization"))]
pub fn print_series(
    _series: &crate::time_series::TimeSeries,
    _settings: &PlotSettings,
) -> Result<()> {
    Err(crate::error::Error::FeatureNotAvailable(
        "Visualization feature is not enabled. Recompile with --features visualization"
            .to_string(),
    ))
}

/// Fallback implementation when visualization is not available
#[cfg(not(feature = "visualization"))]
pub fn print_decomposition(
    _decomposition: &crate::time_series::Decomposition,
    _settings: &PlotSettings,
) -> Result<()> {
    Err(crate::error::Error::FeatureNotAvailable(
        "Visualization feature is not enabled. Recompile with --features visualization"
            .to_string(),
    ))
}

#[cfg(all(test, feature = "visualization"))]
mod tests {
    use super::*;

    #[test]
    fn test_render_chart_has_title() {
        let values: Vec<Option<f64>> = (0..50).map(|i| Some((i as f64 / 5.0).sin())).collect();
        let rendered = render_chart("Observed", &values, 60, 10);

        assert!(rendered.starts_with("=== Observed ===\n"));
        assert!(rendered.lines().count() >= 3);
    }

    #[test]
    fn test_render_chart_all_undefined() {
        let rendered = render_chart("Trend", &[None, None, None], 60, 10);
        assert_eq!(rendered, "=== Trend ===\n(no defined values)\n");
    }
}
