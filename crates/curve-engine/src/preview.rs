//! Morph preview helpers.
//!
//! Samples a whole transition at a fixed frame rate and assembles SVG
//! documents so clients can preview curves and morphs without running a
//! renderer.

use chartmorph_chart_model::path::LinePath;
use chartmorph_common::error::ChartmorphResult;

use crate::builder::Curve;
use crate::layout::ChartLayout;
use crate::transition::{TransitionConfig, TransitionEngine, TransitionState};

/// Horizontal gridline positions of the reference chart, in drawing
/// units from the top.
pub const GRIDLINE_YS: [f64; 3] = [0.0, 130.0, 250.0];

/// Stroke color of the reference chart line.
const STROKE_COLOR: &str = "#2176FF";

/// One sampled frame of a morph.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphFrame {
    /// Frame time in seconds from transition start.
    pub time_secs: f64,

    /// Eased progress at this frame, in [0, 1].
    pub progress: f64,

    /// Interpolated path at this frame.
    pub path: LinePath,
}

/// Simulate a full transition from `from` to `to`, sampled at
/// `sample_rate_fps` frames per second.
///
/// The result always includes the frame at time 0 (the source path) and
/// a final settled frame equal to the target path.
pub fn simulate_morph(
    from: &Curve,
    to: &Curve,
    config: &TransitionConfig,
    sample_rate_fps: f64,
) -> ChartmorphResult<Vec<MorphFrame>> {
    let sample_rate_fps = sample_rate_fps.max(1.0);
    let step_ns = (1_000_000_000.0 / sample_rate_fps) as u64;

    let mut engine = TransitionEngine::new(vec![from.clone(), to.clone()], 0, *config)?;
    engine.start_transition(1, 0)?;

    let mut frames = Vec::new();
    let mut now_ns = 0u64;

    loop {
        let path = engine.tick(now_ns)?.clone();
        let (progress, done) = match engine.state() {
            TransitionState::Animating { progress, .. } => (progress, false),
            TransitionState::Idle => (1.0, true),
        };

        frames.push(MorphFrame {
            time_secs: now_ns as f64 / 1e9,
            progress,
            path,
        });

        if done {
            break;
        }
        now_ns += step_ns;
    }

    Ok(frames)
}

/// Assemble a standalone SVG document for a path over the chart
/// gridlines.
pub fn svg_document(path: &LinePath, layout: &ChartLayout) -> String {
    let width = layout.graph_width;
    let height = layout.graph_height;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    );
    for y in GRIDLINE_YS {
        svg.push_str(&format!(
            "  <line x1=\"0\" y1=\"{y}\" x2=\"{width}\" y2=\"{y}\" \
             stroke=\"lightgrey\" stroke-width=\"1\"/>\n"
        ));
    }
    svg.push_str(&format!(
        "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"10\"/>\n",
        path.to_svg(),
        STROKE_COLOR
    ));
    svg.push_str("</svg>\n");
    svg
}
