//! Finite-difference tables and classical equal-interval interpolation.
//!
//! ┌ [`differences`]   : forward / backward / central tables, noise report
//! ├ [`interpolation`] : validation and the seven formulas with step traces
//! └ [`numeric`]       : factorials, factor products, display rounding

pub mod numeric;
pub mod point;
pub mod differences;
pub mod interpolation;

pub use interpolation::{interpolate, interpolate_many, Formula, InterpolationCfg, InterpolationError, InterpolationResult, Method};
pub use point::Point;
