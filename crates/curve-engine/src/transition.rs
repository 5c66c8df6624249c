//! Path transition state machine.
//!
//! Morphs between registered curves over a fixed duration under an
//! external clock. The engine never schedules anything itself: the
//! caller owns the clock and feeds `tick` with monotonic nanosecond
//! timestamps (any `AnimationClock`-style source works). Each tick is a
//! synchronous, non-blocking recomputation of the interpolated path.
//!
//! State model: `Idle` holds the current curve; `start_transition`
//! moves to `Animating`, which interpolates every control point between
//! the source and target paths by eased progress until progress reaches
//! 1, then settles back to `Idle` on the target curve.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use chartmorph_chart_model::path::LinePath;
use chartmorph_common::error::{ChartmorphError, ChartmorphResult};

use crate::builder::Curve;
use crate::easing::EasingFunction;

/// Handle to a curve registered with the engine.
pub type CurveId = usize;

/// What `start_transition` does when a transition is already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RetriggerPolicy {
    /// Re-anchor the source to the current interpolated shape and run a
    /// fresh full-duration ramp to the new target. The visible path
    /// never jumps.
    #[default]
    Restart,

    /// Drop the call until the engine is Idle again.
    Ignore,
}

impl RetriggerPolicy {
    /// Parse a config-style name ("restart" or "ignore").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "restart" => Some(RetriggerPolicy::Restart),
            "ignore" => Some(RetriggerPolicy::Ignore),
            _ => None,
        }
    }

    /// Config-style name of this policy.
    pub fn name(&self) -> &'static str {
        match self {
            RetriggerPolicy::Restart => "restart",
            RetriggerPolicy::Ignore => "ignore",
        }
    }
}

/// Transition engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    /// Total transition duration.
    pub duration: Duration,

    /// Progress shaping function.
    pub easing: EasingFunction,

    /// Mid-flight retrigger behavior.
    pub retrigger: RetriggerPolicy,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            easing: EasingFunction::EaseInOut,
            retrigger: RetriggerPolicy::default(),
        }
    }
}

/// Observable engine state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    /// No transition in flight; the current curve is displayed as-is.
    Idle,

    /// Morphing from `source` toward `target`. `progress` is the eased
    /// progress of the last tick, in [0, 1].
    Animating {
        source: CurveId,
        target: CurveId,
        progress: f64,
    },
}

/// One in-flight transition.
#[derive(Debug, Clone)]
struct ActiveRun {
    /// Curve id the run started from.
    source_id: CurveId,

    /// Snapshot of the path the run started from. After a restart this
    /// is the interpolated shape at the restart instant, not a
    /// registered curve.
    source_path: LinePath,

    /// Destination curve.
    target: CurveId,

    /// Tick timestamp the run is anchored at.
    anchor_ns: u64,

    /// Eased progress of the last tick. Monotone non-decreasing within
    /// one run.
    progress: f64,
}

/// The path transition engine.
///
/// Owns a fixed set of curves (all fitted over the same month domain,
/// hence structurally identical paths) and a display path recomputed on
/// each tick. Exclusively owned by whichever layer drives it; nothing
/// here is shared across threads.
#[derive(Debug)]
pub struct TransitionEngine {
    curves: Vec<Curve>,
    config: TransitionConfig,
    current: CurveId,
    run: Option<ActiveRun>,
    display: LinePath,
}

impl TransitionEngine {
    /// Create an engine over a set of curves, starting at `initial`.
    ///
    /// Fails with `InvalidInput` on an empty set or out-of-range id, and
    /// with `ShapeMismatch` when any two curves differ in path
    /// structure (they would not be interpolatable).
    pub fn new(
        curves: Vec<Curve>,
        initial: CurveId,
        config: TransitionConfig,
    ) -> ChartmorphResult<Self> {
        if curves.is_empty() {
            return Err(ChartmorphError::invalid_input(
                "transition engine needs at least one curve",
            ));
        }
        if initial >= curves.len() {
            return Err(ChartmorphError::invalid_input(format!(
                "initial curve id {} out of range ({} curves)",
                initial,
                curves.len()
            )));
        }

        for (id, curve) in curves.iter().enumerate().skip(1) {
            ensure_same_structure(curves[0].path(), curve.path(), id)?;
        }

        let display = curves[initial].path().clone();
        Ok(Self {
            curves,
            config,
            current: initial,
            run: None,
            display,
        })
    }

    /// Create an engine with the default configuration.
    pub fn with_defaults(curves: Vec<Curve>, initial: CurveId) -> ChartmorphResult<Self> {
        Self::new(curves, initial, TransitionConfig::default())
    }

    /// The engine configuration.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// A registered curve by id.
    pub fn curve(&self, id: CurveId) -> Option<&Curve> {
        self.curves.get(id)
    }

    /// Id of the curve the engine currently rests on (or is morphing
    /// away from).
    pub fn current_curve_id(&self) -> CurveId {
        self.current
    }

    /// Observable state.
    pub fn state(&self) -> TransitionState {
        match &self.run {
            None => TransitionState::Idle,
            Some(run) => TransitionState::Animating {
                source: run.source_id,
                target: run.target,
                progress: run.progress,
            },
        }
    }

    /// The path computed by the last tick (the current curve's path when
    /// Idle).
    pub fn display_path(&self) -> &LinePath {
        &self.display
    }

    /// Begin a transition toward `target`, anchored at `now_ns`.
    ///
    /// From `Idle`: records the current curve as source, resets progress
    /// to 0, and enters `Animating`. Targeting the current curve is a
    /// no-op. While `Animating`, behavior follows the configured
    /// `RetriggerPolicy`. Fails with `InvalidInput` on an unknown id.
    pub fn start_transition(&mut self, target: CurveId, now_ns: u64) -> ChartmorphResult<()> {
        if target >= self.curves.len() {
            return Err(ChartmorphError::invalid_input(format!(
                "unknown target curve id {} ({} curves)",
                target,
                self.curves.len()
            )));
        }

        match &mut self.run {
            None => {
                if target == self.current {
                    return Ok(());
                }
                tracing::debug!(source = self.current, target, "transition started");
                self.run = Some(ActiveRun {
                    source_id: self.current,
                    source_path: self.curves[self.current].path().clone(),
                    target,
                    anchor_ns: now_ns,
                    progress: 0.0,
                });
            }
            Some(run) => match self.config.retrigger {
                RetriggerPolicy::Ignore => {
                    tracing::debug!(target, "transition retrigger ignored");
                }
                RetriggerPolicy::Restart => {
                    tracing::debug!(
                        source = self.current,
                        target,
                        "transition restarted mid-flight"
                    );
                    run.source_path = self.display.clone();
                    run.target = target;
                    run.anchor_ns = now_ns;
                    run.progress = 0.0;
                }
            },
        }

        Ok(())
    }

    /// Advance the animation to `now_ns` and recompute the interpolated
    /// path.
    ///
    /// Eased progress is `easing(clamp(elapsed / duration))`, monotone
    /// non-decreasing within one run (a tick behind the anchor or behind
    /// the last tick holds the last progress). At progress 1 the engine
    /// snaps exactly onto the target curve and returns to `Idle`.
    pub fn tick(&mut self, now_ns: u64) -> ChartmorphResult<&LinePath> {
        let Some(run) = &mut self.run else {
            return Ok(&self.display);
        };

        let duration_ns = self.config.duration.as_nanos().max(1) as u64;
        let elapsed = now_ns.saturating_sub(run.anchor_ns);
        let raw = (elapsed as f64 / duration_ns as f64).min(1.0);
        let eased = self.config.easing.apply(raw).max(run.progress);
        run.progress = eased;

        if raw >= 1.0 {
            let target = run.target;
            tracing::debug!(
                source = run.source_id,
                target,
                "transition completed"
            );
            self.current = target;
            self.display = self.curves[target].path().clone();
            self.run = None;
        } else {
            let target_path = self.curves[run.target].path();
            self.display = LinePath::lerp(&run.source_path, target_path, eased)?;
        }

        Ok(&self.display)
    }
}

/// Verify two paths can be interpolated control point by control point.
fn ensure_same_structure(a: &LinePath, b: &LinePath, id: CurveId) -> ChartmorphResult<()> {
    let mismatch = a.verbs().len() != b.verbs().len()
        || a.verbs()
            .iter()
            .zip(b.verbs().iter())
            .any(|(va, vb)| std::mem::discriminant(va) != std::mem::discriminant(vb));

    if mismatch {
        return Err(ChartmorphError::shape_mismatch(format!(
            "curve {} has {} commands, expected {} matching commands",
            id,
            b.verbs().len(),
            a.verbs().len()
        )));
    }
    Ok(())
}
