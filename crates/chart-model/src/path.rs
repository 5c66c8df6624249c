//! Path geometry types.
//!
//! Paths use an SVG-style command alphabet (move-to, cubic-bezier-to) so
//! render collaborators can consume them directly. Two paths built over
//! the same month domain share a verb structure and can be interpolated
//! control point by control point.

use serde::{Deserialize, Serialize};

use chartmorph_common::error::{ChartmorphError, ChartmorphResult};

/// A 2D point in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Affine interpolation between two points.
    ///
    /// Written as `a*(1-t) + b*t` so the endpoints reproduce `a` and `b`
    /// exactly, bit for bit.
    pub fn lerp(a: &Point2D, b: &Point2D, t: f64) -> Point2D {
        let t = t.clamp(0.0, 1.0);
        Point2D {
            x: a.x * (1.0 - t) + b.x * t,
            y: a.y * (1.0 - t) + b.y * t,
        }
    }
}

/// One drawable path command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verb", rename_all = "snake_case")]
pub enum PathVerb {
    /// Start a new subpath at a point.
    MoveTo { to: Point2D },

    /// Cubic Bezier segment to `to` with control points `c1`, `c2`.
    CubicTo {
        c1: Point2D,
        c2: Point2D,
        to: Point2D,
    },
}

impl PathVerb {
    /// Number of control points this verb carries.
    fn point_count(&self) -> usize {
        match self {
            PathVerb::MoveTo { .. } => 1,
            PathVerb::CubicTo { .. } => 3,
        }
    }
}

/// An immutable smooth path: an ordered sequence of path commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    verbs: Vec<PathVerb>,
}

impl LinePath {
    /// Create a path from verbs.
    pub fn new(verbs: Vec<PathVerb>) -> Self {
        Self { verbs }
    }

    /// The path commands.
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// Whether the path contains no commands.
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Iterate over every control point in command order.
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.verbs.iter().flat_map(|verb| match verb {
            PathVerb::MoveTo { to } => vec![*to],
            PathVerb::CubicTo { c1, c2, to } => vec![*c1, *c2, *to],
        })
    }

    /// Total number of control points.
    pub fn point_count(&self) -> usize {
        self.verbs.iter().map(PathVerb::point_count).sum()
    }

    /// First on-curve point, if any.
    pub fn first_point(&self) -> Option<Point2D> {
        self.verbs.first().map(|verb| match verb {
            PathVerb::MoveTo { to } => *to,
            PathVerb::CubicTo { to, .. } => *to,
        })
    }

    /// Last on-curve point, if any.
    pub fn last_point(&self) -> Option<Point2D> {
        self.verbs.last().map(|verb| match verb {
            PathVerb::MoveTo { to } => *to,
            PathVerb::CubicTo { to, .. } => *to,
        })
    }

    /// Interpolate between two structurally identical paths.
    ///
    /// Every control point moves along the straight line between its
    /// source and target positions: `a*(1-t) + b*t`. Fails with
    /// `ShapeMismatch` when the verb sequences differ in length or kind.
    pub fn lerp(a: &LinePath, b: &LinePath, t: f64) -> ChartmorphResult<LinePath> {
        if a.verbs.len() != b.verbs.len() {
            return Err(ChartmorphError::shape_mismatch(format!(
                "paths have {} and {} commands",
                a.verbs.len(),
                b.verbs.len()
            )));
        }

        let verbs = a
            .verbs
            .iter()
            .zip(b.verbs.iter())
            .enumerate()
            .map(|(index, (va, vb))| match (va, vb) {
                (PathVerb::MoveTo { to: ta }, PathVerb::MoveTo { to: tb }) => {
                    Ok(PathVerb::MoveTo {
                        to: Point2D::lerp(ta, tb, t),
                    })
                }
                (
                    PathVerb::CubicTo {
                        c1: a1,
                        c2: a2,
                        to: ta,
                    },
                    PathVerb::CubicTo {
                        c1: b1,
                        c2: b2,
                        to: tb,
                    },
                ) => Ok(PathVerb::CubicTo {
                    c1: Point2D::lerp(a1, b1, t),
                    c2: Point2D::lerp(a2, b2, t),
                    to: Point2D::lerp(ta, tb, t),
                }),
                _ => Err(ChartmorphError::shape_mismatch(format!(
                    "command {} differs in kind",
                    index
                ))),
            })
            .collect::<ChartmorphResult<Vec<_>>>()?;

        Ok(LinePath::new(verbs))
    }

    /// Render the path as SVG path data
    /// (`M x y C c1x c1y c2x c2y x y ...`).
    pub fn to_svg(&self) -> String {
        let mut data = String::new();
        for verb in &self.verbs {
            if !data.is_empty() {
                data.push(' ');
            }
            match verb {
                PathVerb::MoveTo { to } => {
                    data.push_str(&format!("M {:.3} {:.3}", to.x, to.y));
                }
                PathVerb::CubicTo { c1, c2, to } => {
                    data.push_str(&format!(
                        "C {:.3} {:.3} {:.3} {:.3} {:.3} {:.3}",
                        c1.x, c1.y, c2.x, c2.y, to.x, to.y
                    ));
                }
            }
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_segment_path(offset: f64) -> LinePath {
        LinePath::new(vec![
            PathVerb::MoveTo {
                to: Point2D::new(0.0, 100.0 + offset),
            },
            PathVerb::CubicTo {
                c1: Point2D::new(25.0, 100.0 + offset),
                c2: Point2D::new(25.0, 200.0 + offset),
                to: Point2D::new(50.0, 200.0 + offset),
            },
            PathVerb::CubicTo {
                c1: Point2D::new(75.0, 200.0 + offset),
                c2: Point2D::new(75.0, 150.0 + offset),
                to: Point2D::new(100.0, 150.0 + offset),
            },
        ])
    }

    #[test]
    fn test_point_iteration() {
        let path = two_segment_path(0.0);
        assert_eq!(path.point_count(), 7);
        assert_eq!(path.points().count(), 7);
    }

    #[test]
    fn test_endpoints() {
        let path = two_segment_path(0.0);
        assert_eq!(path.first_point().unwrap(), Point2D::new(0.0, 100.0));
        assert_eq!(path.last_point().unwrap(), Point2D::new(100.0, 150.0));
    }

    #[test]
    fn test_lerp_at_zero_is_source() {
        let a = two_segment_path(0.0);
        let b = two_segment_path(40.0);
        let out = LinePath::lerp(&a, &b, 0.0).unwrap();
        assert_eq!(out, a);
    }

    #[test]
    fn test_lerp_at_one_is_target() {
        let a = two_segment_path(0.0);
        let b = two_segment_path(40.0);
        let out = LinePath::lerp(&a, &b, 1.0).unwrap();
        assert_eq!(out, b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = two_segment_path(0.0);
        let b = two_segment_path(40.0);
        let out = LinePath::lerp(&a, &b, 0.5).unwrap();
        assert_eq!(out.first_point().unwrap().y, 120.0);
    }

    #[test]
    fn test_lerp_length_mismatch() {
        let a = two_segment_path(0.0);
        let b = LinePath::new(vec![PathVerb::MoveTo {
            to: Point2D::new(0.0, 0.0),
        }]);
        let err = LinePath::lerp(&a, &b, 0.5).unwrap_err();
        assert!(matches!(
            err,
            chartmorph_common::error::ChartmorphError::ShapeMismatch { .. }
        ));
    }

    #[test]
    fn test_lerp_kind_mismatch() {
        let a = LinePath::new(vec![PathVerb::MoveTo {
            to: Point2D::new(0.0, 0.0),
        }]);
        let b = LinePath::new(vec![PathVerb::CubicTo {
            c1: Point2D::new(0.0, 0.0),
            c2: Point2D::new(1.0, 1.0),
            to: Point2D::new(2.0, 2.0),
        }]);
        assert!(LinePath::lerp(&a, &b, 0.5).is_err());
    }

    #[test]
    fn test_svg_output() {
        let path = LinePath::new(vec![
            PathVerb::MoveTo {
                to: Point2D::new(0.0, 300.0),
            },
            PathVerb::CubicTo {
                c1: Point2D::new(25.0, 300.0),
                c2: Point2D::new(25.0, 35.0),
                to: Point2D::new(50.0, 35.0),
            },
        ]);
        assert_eq!(
            path.to_svg(),
            "M 0.000 300.000 C 25.000 300.000 25.000 35.000 50.000 35.000"
        );
    }

    #[test]
    fn test_path_json_roundtrip() {
        let path = two_segment_path(0.0);
        let json = serde_json::to_string(&path).unwrap();
        let parsed: LinePath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, parsed);
    }

    proptest! {
        #[test]
        fn prop_lerp_is_affine_per_point(
            ax in -1000.0..1000.0f64,
            ay in -1000.0..1000.0f64,
            bx in -1000.0..1000.0f64,
            by in -1000.0..1000.0f64,
            t in 0.0..=1.0f64,
        ) {
            let a = Point2D::new(ax, ay);
            let b = Point2D::new(bx, by);
            let out = Point2D::lerp(&a, &b, t);
            prop_assert!((out.x - (ax * (1.0 - t) + bx * t)).abs() < 1e-12);
            prop_assert!((out.y - (ay * (1.0 - t) + by * t)).abs() < 1e-12);
        }

        #[test]
        fn prop_lerp_stays_between_endpoints(
            ax in -1000.0..1000.0f64,
            bx in -1000.0..1000.0f64,
            t in 0.0..=1.0f64,
        ) {
            let a = Point2D::new(ax, 0.0);
            let b = Point2D::new(bx, 0.0);
            let out = Point2D::lerp(&a, &b, t);
            let (lo, hi) = if ax <= bx { (ax, bx) } else { (bx, ax) };
            prop_assert!(out.x >= lo - 1e-9 && out.x <= hi + 1e-9);
        }
    }
}
