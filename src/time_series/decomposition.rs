//! Seasonal Decomposition Module
//!
//! Additive decomposition of a daily series into trend, seasonal and residual
//! components: Y(t) = Trend(t) + Seasonal(t) + Residual(t).
//!
//! The trend is a centered moving average whose window equals the seasonal
//! period, so the first and last `period / 2` positions have no trend and no
//! residual. Those positions are `None` rather than a numeric sentinel. The
//! series must hold at least two full periods, which guarantees every phase of
//! the seasonal pattern is estimated.

use crate::error::{Error, Result};
use crate::time_series::core::{DateIndex, TimeSeries};
use crate::vis::{plot_decomposition, PlotOutput, PlotSettings};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decomposition components, in panel order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
    Observed,
    Trend,
    Seasonal,
    Residual,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Observed,
        Component::Trend,
        Component::Seasonal,
        Component::Residual,
    ];

    /// Panel title
    pub fn title(&self) -> &'static str {
        match self {
            Component::Observed => "Observed",
            Component::Trend => "Trend",
            Component::Seasonal => "Seasonal",
            Component::Residual => "Residual",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Decomposition quality metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecompositionMetrics {
    /// Variance of the observed series
    pub observed_variance: f64,
    /// Variance of the defined trend values
    pub trend_variance: f64,
    /// Variance of the defined seasonal values
    pub seasonal_variance: f64,
    /// Variance of the defined residual values
    pub residual_variance: f64,
    /// Trend strength in [0, 1]: max(0, 1 - Var(R) / Var(T + R))
    pub trend_strength: f64,
    /// Seasonality strength in [0, 1]: max(0, 1 - Var(R) / Var(S + R))
    pub seasonal_strength: f64,
}

/// Result of an additive seasonal decomposition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decomposition {
    index: DateIndex,
    observed: Vec<f64>,
    trend: Vec<Option<f64>>,
    seasonal: Vec<f64>,
    residual: Vec<Option<f64>>,
    period: usize,
    metrics: DecompositionMetrics,
}

impl Decomposition {
    pub fn index(&self) -> &DateIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    pub fn trend(&self) -> &[Option<f64>] {
        &self.trend
    }

    pub fn seasonal(&self) -> &[f64] {
        &self.seasonal
    }

    pub fn residual(&self) -> &[Option<f64>] {
        &self.residual
    }

    pub fn metrics(&self) -> &DecompositionMetrics {
        &self.metrics
    }

    /// Values of one component, with fully defined components wrapped in `Some`
    pub fn component(&self, component: Component) -> Vec<Option<f64>> {
        match component {
            Component::Observed => self.observed.iter().copied().map(Some).collect(),
            Component::Trend => self.trend.clone(),
            Component::Seasonal => self.seasonal.iter().copied().map(Some).collect(),
            Component::Residual => self.residual.clone(),
        }
    }

    /// One period of seasonal indices, starting at the first position of the series
    pub fn seasonal_pattern(&self) -> &[f64] {
        let end = self.period.min(self.seasonal.len());
        &self.seasonal[..end]
    }

    /// Reconstruct the series from its components.
    ///
    /// Positions without a trend reconstruct to `None`.
    pub fn reconstruct(&self) -> Vec<Option<f64>> {
        self.trend
            .iter()
            .zip(&self.seasonal)
            .zip(&self.residual)
            .map(|((t, s), r)| Some((*t)? + s + (*r)?))
            .collect()
    }
}

/// Additive seasonal decomposition with a fixed period
#[derive(Debug, Clone)]
pub struct SeasonalDecomposition {
    period: usize,
}

impl SeasonalDecomposition {
    /// Create a decomposer for the given seasonal period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(Error::InvalidArgument(
                "Seasonality period must be positive".to_string(),
            ));
        }
        Ok(Self { period })
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Perform decomposition
    pub fn decompose(&self, ts: &TimeSeries) -> Result<Decomposition> {
        if ts.is_empty() {
            return Err(Error::InvalidState(
                "Cannot decompose empty time series".to_string(),
            ));
        }
        if self.period > ts.len() {
            return Err(Error::InvalidArgument(format!(
                "Seasonality period ({}) exceeds series length ({})",
                self.period,
                ts.len()
            )));
        }
        if ts.len() < 2 * self.period {
            return Err(Error::InvalidArgument(format!(
                "Series of length {} holds fewer than two full periods of {} (needs at least {} observations)",
                ts.len(),
                self.period,
                2 * self.period
            )));
        }

        let observed = ts.values().to_vec();
        let trend = centered_moving_average(&observed, self.period);
        let seasonal = seasonal_component(&observed, &trend, self.period);
        let residual: Vec<Option<f64>> = observed
            .iter()
            .zip(&trend)
            .zip(&seasonal)
            .map(|((x, t), s)| t.map(|t| x - t - s))
            .collect();

        let metrics = calculate_metrics(&observed, &trend, &seasonal, &residual);

        Ok(Decomposition {
            index: ts.index().clone(),
            observed,
            trend,
            seasonal,
            residual,
            period: self.period,
            metrics,
        })
    }
}

/// Validate inputs and decompose `series` additively with the given period.
///
/// Checks run in order: missing or empty series (`InvalidState`), then a
/// non-positive period, then a period longer than the series, then a series
/// shorter than two periods (`InvalidArgument`).
pub fn decompose(series: Option<&TimeSeries>, seasonality_period: i64) -> Result<Decomposition> {
    let ts = require_series(series)?;

    if seasonality_period <= 0 {
        return Err(Error::InvalidArgument(format!(
            "Seasonality period must be positive, got {}",
            seasonality_period
        )));
    }
    let period = usize::try_from(seasonality_period).map_err(|_| {
        Error::InvalidArgument(format!(
            "Seasonality period is too large: {}",
            seasonality_period
        ))
    })?;

    let decomposition = SeasonalDecomposition::new(period)?.decompose(ts)?;
    log::info!(
        "Decomposed {} points with period {} ({} positions with defined trend)",
        decomposition.len(),
        period,
        decomposition.trend.iter().flatten().count()
    );
    Ok(decomposition)
}

/// Decompose `series` and render the four components as stacked panels
pub fn decompose_and_plot(
    series: Option<&TimeSeries>,
    seasonality_period: i64,
    output: &PlotOutput,
    settings: &PlotSettings,
) -> Result<Decomposition> {
    let decomposition = decompose(series, seasonality_period)?;
    plot_decomposition(&decomposition, output, settings)?;
    Ok(decomposition)
}

pub(crate) fn require_series(series: Option<&TimeSeries>) -> Result<&TimeSeries> {
    match series {
        None => Err(Error::InvalidState(
            "Time series was not created".to_string(),
        )),
        Some(ts) if ts.is_empty() => Err(Error::InvalidState("Time series is empty".to_string())),
        Some(ts) => Ok(ts),
    }
}

/// Centered moving average with a window equal to `period`.
///
/// Even periods use a 2 x period average (period + 1 points, half weight at
/// both ends) so the window stays centered.
fn centered_moving_average(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let half = period / 2;
    let mut trend = vec![None; n];

    if n < 2 * half + 1 {
        return trend;
    }

    for t in half..n - half {
        let window = &values[t - half..=t + half];
        let sum = if period % 2 == 0 {
            let last = window.len() - 1;
            0.5 * window[0] + window[1..last].iter().sum::<f64>() + 0.5 * window[last]
        } else {
            window.iter().sum::<f64>()
        };
        trend[t] = Some(sum / period as f64);
    }

    trend
}

/// Average detrended value per phase, centered to sum to zero, tiled to full length.
///
/// Callers guarantee at least `period` consecutive defined trend values, so
/// every phase has one or more samples.
fn seasonal_component(observed: &[f64], trend: &[Option<f64>], period: usize) -> Vec<f64> {
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];

    for (i, (x, t)) in observed.iter().zip(trend).enumerate() {
        if let Some(t) = t {
            sums[i % period] += x - t;
            counts[i % period] += 1;
        }
    }

    let averages: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(&sum, &count)| sum / count.max(1) as f64)
        .collect();
    let center = averages.iter().sum::<f64>() / period as f64;

    (0..observed.len())
        .map(|i| averages[i % period] - center)
        .collect()
}

fn calculate_metrics(
    observed: &[f64],
    trend: &[Option<f64>],
    seasonal: &[f64],
    residual: &[Option<f64>],
) -> DecompositionMetrics {
    let residual_variance = variance(residual.iter().flatten().copied());

    let trend_plus_resid = trend.iter().zip(residual).filter_map(|(t, r)| Some((*t)? + (*r)?));
    let seasonal_plus_resid = seasonal.iter().zip(residual).filter_map(|(s, r)| Some(s + (*r)?));

    DecompositionMetrics {
        observed_variance: variance(observed.iter().copied()),
        trend_variance: variance(trend.iter().flatten().copied()),
        seasonal_variance: variance(seasonal.iter().copied()),
        residual_variance,
        trend_strength: strength(residual_variance, variance(trend_plus_resid)),
        seasonal_strength: strength(residual_variance, variance(seasonal_plus_resid)),
    }
}

fn strength(residual_variance: f64, combined_variance: f64) -> f64 {
    if combined_variance > 0.0 {
        (1.0 - residual_variance / combined_variance).max(0.0)
    } else {
        0.0
    }
}

/// Population variance, zero for an empty input
fn variance(values: impl Iterator<Item = f64>) -> f64 {
    let values: Vec<f64> = values.collect();
    if values.is_empty() {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64
}
