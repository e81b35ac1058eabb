//! Shared configuration for interpolation runs.
//!
//! Provides [`InterpolationCfg`] with the default spacing tolerance
//! [`DEFAULT_SPACING_TOL`] and display precision [`DEFAULT_PRECISION`].
//!
//! [`InterpolationCfg`] fields
//! - `points`    : raw samples, any order
//! - `x_query`   : x value to interpolate at
//! - `spacing`   : [`SpacingRule`] deciding whether gaps count as equal
//! - `precision` : decimals used for numbers inside step text
//!
//! [`InterpolationCfg::new`] starts with no points and `x_query = 0.0`.

use crate::interpolation::errors::InterpolationError;
use crate::point::Point;


pub const DEFAULT_SPACING_TOL: f64 = 1e-4;
pub const DEFAULT_PRECISION: u32 = 6;
pub const MAX_PRECISION: u32 = 15;


/// How a gap deviation is compared against the spacing tolerance.
/// - [`SpacingMode::Absolute`] : `|gap - h| <= tol`
/// - [`SpacingMode::Relative`] : `|gap - h| <= tol * |h|`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SpacingMode {
    #[default]
    Absolute,
    Relative,
}

/// Equal-spacing criterion used by preprocessing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpacingRule {
    pub tol: f64,
    pub mode: SpacingMode,
}

impl SpacingRule {
    pub const fn new(tol: f64, mode: SpacingMode) -> Self {
        Self { tol, mode }
    }

    /// Effective absolute tolerance for step size `h`.
    pub fn tolerance_for(&self, h: f64) -> f64 {
        match self.mode {
            SpacingMode::Absolute => self.tol,
            SpacingMode::Relative => self.tol * h.abs(),
        }
    }
}

impl Default for SpacingRule {
    fn default() -> Self {
        Self { tol: DEFAULT_SPACING_TOL, mode: SpacingMode::Absolute }
    }
}


/// Interpolation configuration
///
/// # Construction
/// - Use [`InterpolationCfg::new`] then setters, each validating eagerly.
///
/// # Defaults
/// - spacing tolerance [`DEFAULT_SPACING_TOL`], absolute
/// - step text precision [`DEFAULT_PRECISION`] decimals
#[derive(Debug, Copy, Clone)]
pub struct InterpolationCfg<'a> {
    points: &'a [Point],
    x_query: f64,
    spacing: SpacingRule,
    precision: u32,
}

impl<'a> InterpolationCfg<'a> {
    pub fn new() -> Self {
        Self {
            points: &[],
            x_query: 0.0,
            spacing: SpacingRule::default(),
            precision: DEFAULT_PRECISION,
        }
    }

    // getters
    pub fn points(&self) -> &'a [Point] { self.points }
    pub fn x_query(&self) -> f64 { self.x_query }
    pub fn spacing(&self) -> SpacingRule { self.spacing }
    pub fn precision(&self) -> u32 { self.precision }

    // setters
    pub fn set_points(mut self, v: &'a [Point]) -> Result<Self, InterpolationError> {
        if v.len() < 2 {
            return Err(InterpolationError::InsufficientData { got: v.len(), need: 2 });
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteValue { idx });
        }
        self.points = v;
        Ok(self)
    }

    pub fn set_x_query(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { got: v });
        }
        self.x_query = v;
        Ok(self)
    }

    pub fn set_spacing_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidSpacingTol { got: v });
        }
        self.spacing.tol = v;
        Ok(self)
    }

    pub fn set_spacing_mode(mut self, v: SpacingMode) -> Self {
        self.spacing.mode = v;
        self
    }

    pub fn set_precision(mut self, v: u32) -> Result<Self, InterpolationError> {
        if v > MAX_PRECISION {
            return Err(InterpolationError::InvalidPrecision { got: v });
        }
        self.precision = v;
        Ok(self)
    }
}

impl Default for InterpolationCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


pub(crate) fn non_finite_idx(points: &[Point]) -> Option<usize> {
    points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite())
}
