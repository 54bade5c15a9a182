//! Time Series Generation and Decomposition
//!
//! This module provides the daily time series type, the synthetic seasonal
//! generator and the additive seasonal decomposition.

pub mod core;
pub mod decomposition;
pub mod generator;

pub use self::core::{DateIndex, TimeSeries};
pub use self::decomposition::{
    decompose, decompose_and_plot, Component, Decomposition, DecompositionMetrics,
    SeasonalDecomposition,
};
pub use self::generator::{generate_time_series, generate_with_rng, parse_start_date};
