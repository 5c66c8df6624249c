//! Easing functions for transition progress shaping.
//!
//! Each function maps linear time progress in `[0.0, 1.0]` to eased
//! progress in `[0.0, 1.0]`, fixing 0 and 1 and staying monotone
//! non-decreasing in between.

use serde::{Deserialize, Serialize};

/// Available easing functions (cubic family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EasingFunction {
    /// No shaping; progress is linear time.
    Linear,

    /// Cubic acceleration from zero velocity.
    EaseIn,

    /// Cubic deceleration to zero velocity.
    EaseOut,

    /// Cubic acceleration then deceleration.
    #[default]
    EaseInOut,
}

impl EasingFunction {
    /// Apply the easing to a progress value. Input is clamped to [0, 1].
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t * t,
            EasingFunction::EaseOut => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// Parse a config-style name ("linear", "ease-in", "ease-out",
    /// "ease-in-out").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(EasingFunction::Linear),
            "ease-in" => Some(EasingFunction::EaseIn),
            "ease-out" => Some(EasingFunction::EaseOut),
            "ease-in-out" => Some(EasingFunction::EaseInOut),
            _ => None,
        }
    }

    /// Config-style name of this function.
    pub fn name(&self) -> &'static str {
        match self {
            EasingFunction::Linear => "linear",
            EasingFunction::EaseIn => "ease-in",
            EasingFunction::EaseOut => "ease-out",
            EasingFunction::EaseInOut => "ease-in-out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [EasingFunction; 4] = [
        EasingFunction::Linear,
        EasingFunction::EaseIn,
        EasingFunction::EaseOut,
        EasingFunction::EaseInOut,
    ];

    #[test]
    fn test_endpoints_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((EasingFunction::EaseInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ease_in_out_is_slow_at_edges() {
        let eased = EasingFunction::EaseInOut.apply(0.1);
        assert!(eased < 0.1);
        let eased = EasingFunction::EaseInOut.apply(0.9);
        assert!(eased > 0.9);
    }

    #[test]
    fn test_out_of_range_input_clamps() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for easing in ALL {
            assert_eq!(EasingFunction::from_name(easing.name()), Some(easing));
        }
        assert_eq!(EasingFunction::from_name("bounce"), None);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&EasingFunction::EaseInOut).unwrap();
        assert_eq!(json, "\"ease-in-out\"");
    }

    proptest! {
        #[test]
        fn prop_monotone_non_decreasing(
            t1 in 0.0..=1.0f64,
            t2 in 0.0..=1.0f64,
        ) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            for easing in ALL {
                prop_assert!(easing.apply(lo) <= easing.apply(hi) + 1e-12);
            }
        }

        #[test]
        fn prop_output_in_unit_interval(t in -2.0..=3.0f64) {
            for easing in ALL {
                let eased = easing.apply(t);
                prop_assert!((0.0..=1.0).contains(&eased));
            }
        }
    }
}
