//! Chartmorph Chart Model
//!
//! Defines the core data contracts for Chartmorph:
//! - **Samples:** Monthly (month, value) data points and named datasets
//! - **Scales:** Linear domain-to-range axis mappings
//! - **Paths:** SVG-style path geometry with per-point interpolation
//! - **Labels:** Month and currency formatting for render collaborators
//!
//! All geometry is expressed in abstract drawing units so the same path
//! survives DPI/scaling changes across rendering backends.

pub mod labels;
pub mod path;
pub mod sample;
pub mod scale;

pub use labels::*;
pub use path::*;
pub use sample::*;
pub use scale::*;
