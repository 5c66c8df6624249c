//! Sample and dataset types for the Chartmorph data stream.
//!
//! A dataset is one named yearly series: twelve (month, value) samples,
//! one per calendar month, months ascending. Datasets are stored as JSON
//! documents and validated on load.

use serde::{Deserialize, Serialize};

use chartmorph_common::error::{ChartmorphError, ChartmorphResult};

/// Number of months in a full yearly dataset.
pub const MONTHS_PER_YEAR: usize = 12;

/// A single (month, value) data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Calendar month index, 0 (January) through 11 (December).
    pub month: u32,

    /// Value in local currency units. Non-negative.
    pub value: f64,
}

impl Sample {
    pub fn new(month: u32, value: f64) -> Self {
        Self { month, value }
    }
}

/// A named yearly series of samples (e.g., one revenue year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Human-readable series label (e.g., "2021").
    pub label: String,

    /// Ordered samples, one per month.
    pub samples: Vec<Sample>,
}

impl Dataset {
    /// Create a dataset from a label and samples.
    pub fn new(label: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            label: label.into(),
            samples,
        }
    }

    /// Create a full-year dataset from twelve values, January first.
    pub fn from_monthly_values(label: impl Into<String>, values: [f64; MONTHS_PER_YEAR]) -> Self {
        let samples = values
            .iter()
            .enumerate()
            .map(|(month, &value)| Sample::new(month as u32, value))
            .collect();
        Self::new(label, samples)
    }

    /// Validate the full-year dataset contract: exactly twelve samples,
    /// months 0..=11 in ascending order, finite non-negative values.
    pub fn validate(&self) -> ChartmorphResult<()> {
        if self.samples.len() != MONTHS_PER_YEAR {
            return Err(ChartmorphError::invalid_input(format!(
                "dataset '{}' has {} samples, expected {}",
                self.label,
                self.samples.len(),
                MONTHS_PER_YEAR
            )));
        }

        for (index, sample) in self.samples.iter().enumerate() {
            if sample.month != index as u32 {
                return Err(ChartmorphError::invalid_input(format!(
                    "dataset '{}' sample {} has month {}, expected {}",
                    self.label, index, sample.month, index
                )));
            }
            if !sample.value.is_finite() || sample.value < 0.0 {
                return Err(ChartmorphError::invalid_input(format!(
                    "dataset '{}' month {} has invalid value {}",
                    self.label, sample.month, sample.value
                )));
            }
        }

        Ok(())
    }

    /// Minimum and maximum sample values.
    ///
    /// Returns `None` for an empty dataset.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().map(|s| s.value);
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for value in iter {
            min = min.min(value);
            max = max.max(value);
        }
        Some((min, max))
    }
}

/// Parse a dataset from a JSON document.
pub fn parse_dataset(json: &str) -> Result<Dataset, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a dataset to a pretty JSON document.
pub fn serialize_dataset(dataset: &Dataset) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(dataset)
}
