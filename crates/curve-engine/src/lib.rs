//! Chartmorph Curve Engine
//!
//! Turns discrete monthly samples into smooth drawable paths and morphs
//! between two such paths over time:
//! - **Curve Builder:** Fit a bump spline through scaled samples
//! - **Easing:** Progress shaping functions for animations
//! - **Transition Engine:** Idle/Animating state machine under an
//!   external clock
//! - **Preview:** Fixed-fps morph simulation and SVG assembly
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod builder;
pub mod easing;
pub mod layout;
pub mod preview;
pub mod transition;

pub use builder::{build_curve, Curve};
pub use easing::EasingFunction;
pub use layout::ChartLayout;
pub use transition::{RetriggerPolicy, TransitionConfig, TransitionEngine, TransitionState};
