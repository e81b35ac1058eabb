//! Input validation ahead of table construction.
//!
//! [`validate`] checks and sorts raw samples, then measures spacing:
//!
//! ```text
//! n < 2            -> InsufficientData
//! non-finite x / y -> NonFiniteValue
//! x[i] == x[j]     -> DuplicateAbscissa   (exact, no tolerance)
//! h = x[1] - x[0],  equally spaced iff every |gap - h| <= tol
//! ```
//!
//! Unequal spacing is reported, not raised; the pipeline in
//! [`crate::interpolation::interpolate`] refuses to run evaluators on it.

use log::debug;

use crate::interpolation::config::{non_finite_idx, SpacingRule};
use crate::interpolation::errors::InterpolationError;
use crate::point::Point;


/// Validated, sorted sample set.
///
/// - `points`         : samples sorted ascending by `x`
/// - `equally_spaced` : every gap matches `step_size` within tolerance
/// - `step_size`      : `x[1] - x[0]`
/// - `max_deviation`  : largest `|gap - step_size|` seen
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    pub points: Vec<Point>,
    pub equally_spaced: bool,
    pub step_size: f64,
    pub max_deviation: f64,
}

impl Prepared {
    /// Fails with [`InterpolationError::UnequalSpacing`] unless equally spaced.
    pub fn require_equal_spacing(&self, rule: SpacingRule) -> Result<&Self, InterpolationError> {
        if !self.equally_spaced {
            return Err(InterpolationError::UnequalSpacing {
                max_deviation: self.max_deviation,
                tol: rule.tolerance_for(self.step_size),
            });
        }
        Ok(self)
    }

    pub fn x_range(&self) -> (f64, f64) {
        let first = self.points.first().map_or(f64::NAN, |p| p.x);
        let last = self.points.last().map_or(f64::NAN, |p| p.x);
        (first, last)
    }
}


/// Validates with the default [`SpacingRule`] (absolute, `1e-4`).
pub fn validate(points: &[Point]) -> Result<Prepared, InterpolationError> {
    validate_with(points, SpacingRule::default())
}

/// Validates, sorts and measures spacing of `points` under `rule`.
pub fn validate_with(points: &[Point], rule: SpacingRule) -> Result<Prepared, InterpolationError> {
    if points.len() < 2 {
        return Err(InterpolationError::InsufficientData { got: points.len(), need: 2 });
    }
    if let Some(idx) = non_finite_idx(points) {
        return Err(InterpolationError::NonFiniteValue { idx });
    }

    let mut sorted = points.to_vec();
    // stable; ties are rejected below
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    for w in sorted.windows(2) {
        if w[0].x == w[1].x {
            return Err(InterpolationError::DuplicateAbscissa { x: w[0].x });
        }
    }

    let step_size = sorted[1].x - sorted[0].x;
    let tol = rule.tolerance_for(step_size);
    let max_deviation = sorted
        .windows(2)
        .map(|w| ((w[1].x - w[0].x) - step_size).abs())
        .fold(0.0, f64::max);
    let equally_spaced = max_deviation <= tol;

    debug!(
        "preprocess: n={}, h={}, max gap deviation={:e}, tol={:e}, equally spaced={}",
        sorted.len(), step_size, max_deviation, tol, equally_spaced
    );

    Ok(Prepared { points: sorted, equally_spaced, step_size, max_deviation })
}
