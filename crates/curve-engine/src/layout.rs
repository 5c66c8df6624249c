//! Chart layout geometry.
//!
//! Layout values are in abstract drawing units. The defaults reproduce
//! the reference revenue chart: a 600x300 canvas (50 units per month),
//! a 35-unit margin above the peak value, and 52 units of slack past
//! December so the last bump has room to flatten out.

use chartmorph_chart_model::scale::LinearScale;
use chartmorph_common::config::ChartDefaults;

/// Month-axis domain width. Months occupy 0..=11; the extra unit keeps
/// the December segment inside the drawable area.
pub const MONTH_DOMAIN: f64 = 12.0;

/// Chart layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    /// Drawable graph width.
    pub graph_width: f64,

    /// Drawable graph height.
    pub graph_height: f64,

    /// Margin above the highest value.
    pub top_margin: f64,

    /// Extra horizontal room past the last month.
    pub right_pad: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            graph_width: 600.0,
            graph_height: 300.0,
            top_margin: 35.0,
            right_pad: 52.0,
        }
    }
}

impl From<&ChartDefaults> for ChartLayout {
    fn from(defaults: &ChartDefaults) -> Self {
        Self {
            graph_width: defaults.graph_width,
            graph_height: defaults.graph_height,
            top_margin: defaults.top_margin,
            right_pad: defaults.right_pad,
        }
    }
}

impl ChartLayout {
    /// Value-axis scale: `[0, value_max]` to `[graph_height, top_margin]`.
    ///
    /// The range is inverted since vertical position decreases as value
    /// increases.
    pub fn value_scale(&self, value_max: f64) -> LinearScale {
        LinearScale::new((0.0, value_max), (self.graph_height, self.top_margin))
    }

    /// Month-axis scale: `[0, 12]` to `[0, graph_width + right_pad]`.
    pub fn month_scale(&self) -> LinearScale {
        LinearScale::new((0.0, MONTH_DOMAIN), (0.0, self.graph_width + self.right_pad))
    }
}
