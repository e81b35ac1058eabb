//! Sample point type.

use std::fmt;


/// A single `(x, y)` sample.
///
/// Within a working set every `x` is distinct and, once validated by
/// [`crate::interpolation::preprocess::validate`], sorted ascending.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Builds points from parallel `x` / `y` slices, truncating to the shorter one.
pub fn zip_points(x: &[f64], y: &[f64]) -> Vec<Point> {
    x.iter().zip(y).map(|(&x, &y)| Point { x, y }).collect()
}
