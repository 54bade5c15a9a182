//! Synthetic seasonal time series: generation, plotting and additive decomposition.
//!
//! ```no_run
//! use seasonal_ts::{decompose, generate_time_series};
//!
//! let series = generate_time_series("2010-01-01", 1000, 365)?;
//! let decomposition = decompose(Some(&series), 365)?;
//! assert_eq!(decomposition.len(), 1000);
//! # Ok::<(), seasonal_ts::Error>(())
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod time_series;
pub mod vis;

pub use error::{Error, Result};
pub use config::DemoConfig;
pub use time_series::{
    decompose, decompose_and_plot, generate_time_series, Component, DateIndex, Decomposition,
    DecompositionMetrics, SeasonalDecomposition, TimeSeries,
};
pub use vis::{plot_decomposition, plot_time_series, OutputFormat, PlotOutput, PlotSettings};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
