//! Radial Scale Module
//! Linear feature normalization for the radar and heatmap views.

use crate::data::{LastYearRecord, ReportMetric};
use serde::Serialize;

/// A `[0, max] -> [0, 1]` linear scale. The output is deliberately not
/// clamped; inputs above `max` map above 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadialScale {
    max: f64,
}

impl RadialScale {
    pub fn new(max: f64) -> Self {
        RadialScale { max }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Normalize a value against the scale's maximum. The degenerate
    /// all-zero scale maps every input to zero.
    pub fn apply(&self, value: f64) -> f64 {
        if self.max == 0.0 {
            0.0
        } else {
            value / self.max
        }
    }

    /// The raw value a normalized position corresponds to, used for grid
    /// ring labels.
    pub fn invert(&self, normalized: f64) -> f64 {
        normalized * self.max
    }
}

/// Build the scale for one metric over a record set: maximum of the
/// present values, zero when there are none.
pub fn radial_scale<T, F>(records: &[T], metric: F) -> RadialScale
where
    F: Fn(&T) -> Option<f64>,
{
    let max = records
        .iter()
        .filter_map(metric)
        .fold(0.0_f64, f64::max);
    RadialScale::new(max)
}

/// One scale per explained-by component, as the radar chart draws them.
pub fn report_scales(last_year: &[LastYearRecord]) -> Vec<(ReportMetric, RadialScale)> {
    ReportMetric::FACTORS
        .into_iter()
        .map(|metric| (metric, radial_scale(last_year, |r| metric.value(r))))
        .collect()
}
