//! Curve fitting: samples to smooth paths.
//!
//! Projects each sample through the month and value scales, then fits a
//! bump spline through the projected points: one cubic per consecutive
//! pair with both control points at the x-midpoint, each holding its
//! endpoint's y. The curve passes through every sample with a continuous
//! first derivative, stays monotone in x between neighbors, and never
//! overshoots past adjacent samples.

use chartmorph_chart_model::path::{LinePath, PathVerb, Point2D};
use chartmorph_chart_model::sample::Sample;
use chartmorph_common::error::{ChartmorphError, ChartmorphResult};

use crate::layout::ChartLayout;

/// A smooth path derived from one dataset plus its value bounds.
///
/// Immutable once built. `value_min`/`value_max` are surfaced for axis
/// gridlines and labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    path: LinePath,
    value_min: f64,
    value_max: f64,
}

impl Curve {
    /// The fitted path.
    pub fn path(&self) -> &LinePath {
        &self.path
    }

    /// Smallest sample value in the source dataset.
    pub fn value_min(&self) -> f64 {
        self.value_min
    }

    /// Largest sample value in the source dataset.
    pub fn value_max(&self) -> f64 {
        self.value_max
    }
}

/// Build a curve from ordered samples.
///
/// Pure function of its input. Fails with `InvalidInput` when fewer than
/// 2 samples are given, months are not strictly increasing, or a value
/// is negative or non-finite.
pub fn build_curve(samples: &[Sample], layout: &ChartLayout) -> ChartmorphResult<Curve> {
    if samples.len() < 2 {
        return Err(ChartmorphError::invalid_input(format!(
            "need at least 2 samples to fit a curve, got {}",
            samples.len()
        )));
    }

    for pair in samples.windows(2) {
        if pair[1].month <= pair[0].month {
            return Err(ChartmorphError::invalid_input(format!(
                "months must be strictly increasing, got {} after {}",
                pair[1].month, pair[0].month
            )));
        }
    }

    let mut value_min = f64::INFINITY;
    let mut value_max = f64::NEG_INFINITY;
    for sample in samples {
        if !sample.value.is_finite() || sample.value < 0.0 {
            return Err(ChartmorphError::invalid_input(format!(
                "month {} has invalid value {}",
                sample.month, sample.value
            )));
        }
        value_min = value_min.min(sample.value);
        value_max = value_max.max(sample.value);
    }

    let month_scale = layout.month_scale();
    let value_scale = layout.value_scale(value_max);

    let points: Vec<Point2D> = samples
        .iter()
        .map(|sample| {
            Point2D::new(
                month_scale.map(sample.month as f64),
                value_scale.map(sample.value),
            )
        })
        .collect();

    let mut verbs = Vec::with_capacity(points.len());
    verbs.push(PathVerb::MoveTo { to: points[0] });

    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let mid_x = (from.x + to.x) / 2.0;
        verbs.push(PathVerb::CubicTo {
            c1: Point2D::new(mid_x, from.y),
            c2: Point2D::new(mid_x, to.y),
            to,
        });
    }

    Ok(Curve {
        path: LinePath::new(verbs),
        value_min,
        value_max,
    })
}
