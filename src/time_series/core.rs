//! Core Time Series Data Structures
//!
//! This module provides the daily-indexed time series used throughout the crate.

use crate::error::{Error, Result};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily date index for time series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateIndex {
    values: Vec<NaiveDate>,
}

impl DateIndex {
    /// Create a daily index of `periods` consecutive dates starting at `start`.
    ///
    /// The last date is checked against the calendar range before anything is
    /// allocated, so an oversized `periods` is an `InvalidArgument`.
    pub fn daily(start: NaiveDate, periods: usize) -> Result<Self> {
        let overflow = || {
            Error::InvalidArgument(format!(
                "Date range starting at {} with {} periods overflows the calendar",
                start, periods
            ))
        };

        if periods == 0 {
            return Ok(Self { values: Vec::new() });
        }

        let span = i64::try_from(periods - 1)
            .ok()
            .and_then(Duration::try_days)
            .ok_or_else(overflow)?;
        start.checked_add_signed(span).ok_or_else(overflow)?;

        let values = start.iter_days().take(periods).collect();
        Ok(Self { values })
    }

    /// Get length of index
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if index is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get value at index
    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.values.get(index).copied()
    }

    /// Get start date
    pub fn start(&self) -> Option<NaiveDate> {
        self.values.first().copied()
    }

    /// Get end date
    pub fn end(&self) -> Option<NaiveDate> {
        self.values.last().copied()
    }

    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.values
    }
}

/// Main time series data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    index: DateIndex,
    values: Vec<f64>,
    name: Option<String>,
}

impl TimeSeries {
    /// Create a new time series
    pub fn new(index: DateIndex, values: Vec<f64>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(Error::DimensionMismatch {
                expected: index.len(),
                found: values.len(),
            });
        }

        Ok(Self {
            index,
            values,
            name: None,
        })
    }

    /// Create a daily series starting at `start`
    pub fn daily(start: NaiveDate, values: Vec<f64>) -> Result<Self> {
        let index = DateIndex::daily(start, values.len())?;
        Self::new(index, values)
    }

    /// Set the series name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get length of time series
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if time series is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &DateIndex {
        &self.index
    }

    pub fn dates(&self) -> &[NaiveDate] {
        self.index.as_slice()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.index.start()
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.index.end()
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name().unwrap_or("value");
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => write!(
                f,
                "TimeSeries '{}' ({} rows, {} to {})",
                name,
                self.len(),
                start,
                end
            ),
            _ => write!(f, "TimeSeries '{}' (empty)", name),
        }
    }
}
