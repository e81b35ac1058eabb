//! Interpolation error types.
//!
//! ┌ input errors, caller-correctable
//! │  ├ too few points
//! │  ├ duplicate or non-finite abscissae / ordinates
//! │  └ unequally spaced data handed to an evaluator pipeline
//! └ configuration errors
//!    └ invalid spacing tolerance / display precision
//!
//! Off-center use and extrapolation are not errors; they travel as the
//! `warning` of an [`crate::interpolation::report::InterpolationResult`].

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("insufficient data: got {got} points, need at least {need}")]
    InsufficientData { got: usize, need: usize },

    #[error("duplicate x-value detected: {x}")]
    DuplicateAbscissa { x: f64 },

    #[error("non-finite value in input point at index {idx}")]
    NonFiniteValue { idx: usize },

    #[error("non-finite query point: {got}")]
    NonFiniteQuery { got: f64 },

    #[error("points are not equally spaced: gap deviation {max_deviation} exceeds tolerance {tol}")]
    UnequalSpacing { max_deviation: f64, tol: f64 },

    #[error("invalid spacing tolerance {got}: must be finite and > 0")]
    InvalidSpacingTol { got: f64 },

    #[error("invalid display precision {got}: must be <= 15")]
    InvalidPrecision { got: u32 },
}
