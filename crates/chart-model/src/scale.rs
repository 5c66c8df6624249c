//! Linear axis scales.
//!
//! A scale maps a domain interval onto a range interval by plain linear
//! interpolation. Callers construct scales from known data bounds, so no
//! clamping is applied; out-of-domain inputs extrapolate.

use serde::{Deserialize, Serialize};

/// A monotonic linear mapping from `[domain.0, domain.1]` to
/// `[range.0, range.1]`.
///
/// Either interval may be inverted (start greater than end); value axes
/// usually are, since vertical position decreases as value increases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    /// Create a scale from domain and range intervals.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range.
    ///
    /// A degenerate domain (zero width) maps everything to the range
    /// start.
    pub fn map(&self, value: f64) -> f64 {
        let width = self.domain.1 - self.domain.0;
        if width == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / width;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Map a range value back to the domain.
    ///
    /// A degenerate range maps everything to the domain start.
    pub fn unmap(&self, value: f64) -> f64 {
        let width = self.range.1 - self.range.0;
        if width == 0.0 {
            return self.domain.0;
        }
        let t = (value - self.range.0) / width;
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_scale() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 1.0));
        assert_eq!(scale.map(0.25), 0.25);
    }

    #[test]
    fn test_inverted_value_axis() {
        // Value axis from the reference chart: [0, 200] -> [300, 35].
        let scale = LinearScale::new((0.0, 200.0), (300.0, 35.0));
        assert!((scale.map(0.0) - 300.0).abs() < 1e-9);
        assert!((scale.map(200.0) - 35.0).abs() < 1e-9);
        assert!((scale.map(100.0) - 167.5).abs() < 1e-9);
    }

    #[test]
    fn test_month_axis() {
        let scale = LinearScale::new((0.0, 12.0), (0.0, 652.0));
        assert!((scale.map(6.0) - 326.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmap_inverts_map() {
        let scale = LinearScale::new((0.0, 200.0), (300.0, 35.0));
        let y = scale.map(150.0);
        assert!((scale.unmap(y) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = LinearScale::new((5.0, 5.0), (300.0, 35.0));
        assert_eq!(scale.map(5.0), 300.0);
        assert_eq!(scale.map(999.0), 300.0);
    }

    #[test]
    fn test_no_clamping_extrapolates() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert!((scale.map(12.0) - 120.0).abs() < 1e-9);
    }
}
