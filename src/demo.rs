//! End-to-end demonstration: generate, plot, decompose and plot.
//!
//! Every step reports its own failure to the log and the next step still runs.
//! A failed generation leaves no series, so the two later steps then fail
//! validation and log their own diagnostics.

use crate::config::DemoConfig;
use crate::error::Result;
use crate::time_series::{decompose_and_plot, generate_time_series, Decomposition, TimeSeries};
use crate::vis::plot_time_series;

/// Run the full demonstration with the given configuration
pub fn run(config: &DemoConfig) {
    log::info!(
        "Generating {} daily points from {} with seasonality {}",
        config.series.num_periods,
        config.series.start_date,
        config.series.seasonality_period
    );

    let series = report("generating data", generate(config));
    if let Some(series) = &series {
        log::info!("Generated {}", series);
    }

    report("plotting", plot(config, series.as_ref()));

    let decomposition = report("decomposing", decompose(config, series.as_ref()));
    if let Some(decomposition) = &decomposition {
        let metrics = decomposition.metrics();
        log::info!(
            "Decomposition metrics: trend strength {:.3}, seasonal strength {:.3}, residual variance {:.4}",
            metrics.trend_strength,
            metrics.seasonal_strength,
            metrics.residual_variance
        );
    }
}

fn generate(config: &DemoConfig) -> Result<TimeSeries> {
    generate_time_series(
        &config.series.start_date,
        config.series.num_periods,
        config.series.seasonality_period,
    )
}

fn plot(config: &DemoConfig, series: Option<&TimeSeries>) -> Result<()> {
    plot_time_series(
        series,
        &config.series_output(),
        &config.series_plot_settings(),
    )
}

fn decompose(config: &DemoConfig, series: Option<&TimeSeries>) -> Result<Decomposition> {
    decompose_and_plot(
        series,
        config.series.seasonality_period,
        &config.decomposition_output(),
        &config.decomposition_plot_settings(),
    )
}

/// Log a failed step and turn its result into an optional value
fn report<T>(step: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Error while {}: {}", step, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_report_swallows_errors() {
        let failed: Result<u32> = Err(Error::InvalidState("missing".to_string()));
        assert_eq!(report("testing", failed), None);
        assert_eq!(report("testing", Ok(7)), Some(7));
    }

    #[test]
    fn test_run_survives_invalid_parameters() {
        let mut config = DemoConfig::default();
        config.series.num_periods = -5;
        config.output.format = crate::vis::OutputFormat::Terminal;

        // Every step fails validation; none of them panics
        run(&config);
    }
}
