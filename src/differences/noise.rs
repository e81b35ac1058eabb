//! Noise characterization over the forward difference table.
//!
//! For each order `k` the spread of `Δᵏy` is compared with the range of
//! the raw data:
//!
//! ```text
//! noise ratio (%) = 100 · std(Δᵏy) / range(y)      (0 when range(y) == 0)
//! ```
//!
//! Noise grows with order, so a fixed ladder of per-order cutoffs grades
//! each order's usability, and the first two orders grade the data set.
//! Statistics are recomputed on every call.

use std::fmt;

use crate::differences::table::difference_rows;
use crate::interpolation::errors::InterpolationError;
use crate::point::Point;


/// Fewest points that give a first-order noise estimate.
pub const MIN_NOISE_POINTS: usize = 3;


#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Usability {
    Excellent,
    Good,
    Marginal,
    Unreliable,
    Unusable,
}

impl Usability {
    /// Excellent, good and marginal orders may still be used in a formula.
    pub const fn is_usable(self) -> bool {
        matches!(self, Usability::Excellent | Usability::Good | Usability::Marginal)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Usability::Excellent  => "excellent",
            Usability::Good       => "good",
            Usability::Marginal   => "marginal",
            Usability::Unreliable => "unreliable",
            Usability::Unusable   => "unusable",
        }
    }
}

impl fmt::Display for Usability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}


#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoiseLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl NoiseLevel {
    pub const fn label(self) -> &'static str {
        match self {
            NoiseLevel::Low      => "low",
            NoiseLevel::Moderate => "moderate",
            NoiseLevel::High     => "high",
            NoiseLevel::VeryHigh => "very-high",
        }
    }
}

impl fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}


/// Two cutoffs splitting a ratio into three grades: `< first`, `< second`, else.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ladder {
    pub first: f64,
    pub second: f64,
    pub grades: [Usability; 3],
}

impl Ladder {
    pub fn grade(&self, ratio: f64) -> Usability {
        if ratio < self.first {
            self.grades[0]
        } else if ratio < self.second {
            self.grades[1]
        } else {
            self.grades[2]
        }
    }
}


/// Calibration of the usability grades and the overall level.
///
/// The defaults are empirical and kept as-is for compatible output.
/// - `order1`, `order2`, `order3` : ladders for orders 1 to 3
/// - `higher`                     : orders >= 4, `< higher` unreliable, else unusable
/// - `low`, `moderate`            : `(order1, order2)` cutoffs of the overall level
/// - `high`                       : order-1 cutoff between high and very-high
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NoiseCfg {
    order1: Ladder,
    order2: Ladder,
    order3: Ladder,
    higher: f64,
    low: (f64, f64),
    moderate: (f64, f64),
    high: f64,
}

impl NoiseCfg {
    pub fn new() -> Self {
        Self {
            order1: Ladder {
                first: 50.0,
                second: 100.0,
                grades: [Usability::Excellent, Usability::Good, Usability::Marginal],
            },
            order2: Ladder {
                first: 30.0,
                second: 80.0,
                grades: [Usability::Good, Usability::Marginal, Usability::Unreliable],
            },
            order3: Ladder {
                first: 20.0,
                second: 60.0,
                grades: [Usability::Marginal, Usability::Unreliable, Usability::Unusable],
            },
            higher: 10.0,
            low: (20.0, 40.0),
            moderate: (50.0, 80.0),
            high: 100.0,
        }
    }

    /// Usability of `order` at noise ratio `ratio` (percent).
    pub fn usability(&self, order: usize, ratio: f64) -> Usability {
        match order {
            0 => Usability::Excellent,
            1 => self.order1.grade(ratio),
            2 => self.order2.grade(ratio),
            3 => self.order3.grade(ratio),
            _ if ratio < self.higher => Usability::Unreliable,
            _ => Usability::Unusable,
        }
    }

    /// Overall level from the order-1 and order-2 ratios.
    pub fn level(&self, ratio1: f64, ratio2: f64) -> NoiseLevel {
        if ratio1 < self.low.0 && ratio2 < self.low.1 {
            NoiseLevel::Low
        } else if ratio1 < self.moderate.0 && ratio2 < self.moderate.1 {
            NoiseLevel::Moderate
        } else if ratio1 < self.high {
            NoiseLevel::High
        } else {
            NoiseLevel::VeryHigh
        }
    }

    // setters
    pub fn set_ladder(mut self, order: usize, first: f64, second: f64) -> Self {
        match order {
            1 => { self.order1.first = first; self.order1.second = second; }
            2 => { self.order2.first = first; self.order2.second = second; }
            3 => { self.order3.first = first; self.order3.second = second; }
            _ => { self.higher = first; }
        }
        self
    }

    pub fn set_level_cutoffs(mut self, low: (f64, f64), moderate: (f64, f64), high: f64) -> Self {
        self.low = low;
        self.moderate = moderate;
        self.high = high;
        self
    }
}

impl Default for NoiseCfg {
    fn default() -> Self {
        Self::new()
    }
}


/// Statistics of one difference order.
///
/// - `range`               : `max - min` of the order's values
/// - `standard_deviation`  : population standard deviation
/// - `noise_ratio_percent` : `100 · std / range(order 0)`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NoiseOrderStatistic {
    pub order: usize,
    pub mean: f64,
    pub standard_deviation: f64,
    pub range: f64,
    pub noise_ratio_percent: f64,
    pub usability: Usability,
}

/// Noise report over every order of the table.
///
/// - `max_recommended_order` : highest usable order, at least 1
/// - `max_contiguous_order`  : last usable order before the first unusable one, at least 1
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseReport {
    pub per_order: Vec<NoiseOrderStatistic>,
    pub overall_level: NoiseLevel,
    pub max_recommended_order: usize,
    pub max_contiguous_order: usize,
}

impl NoiseReport {
    pub fn order(&self, order: usize) -> Option<&NoiseOrderStatistic> {
        self.per_order.get(order)
    }
}


/// Mean, population standard deviation and range of `values`.
fn moments(values: &[f64]) -> (f64, f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / count;
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    (mean, variance.sqrt(), max - min)
}

/// Characterizes `points` with the default [`NoiseCfg`].
pub fn characterize(points: &[Point]) -> Result<NoiseReport, InterpolationError> {
    characterize_with(points, &NoiseCfg::default())
}

/// Characterizes the noise of `points` under `cfg`.
///
/// Points are sorted by `x` on entry so the differences follow the abscissae.
///
/// The top order holds a single entry, so its spread is always 0 and it
/// grades at least marginal for orders 1 to 3. `max_recommended_order` still
/// counts it; `max_contiguous_order` stops before the first unusable order.
///
/// # Errors
/// - [`InterpolationError::InsufficientData`] with fewer than
///   [`MIN_NOISE_POINTS`] points.
pub fn characterize_with(points: &[Point], cfg: &NoiseCfg) -> Result<NoiseReport, InterpolationError> {
    if points.len() < MIN_NOISE_POINTS {
        return Err(InterpolationError::InsufficientData { got: points.len(), need: MIN_NOISE_POINTS });
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    let y: Vec<f64> = sorted.iter().map(|p| p.y).collect();
    let rows = difference_rows(&y);
    let (_, _, range0) = moments(&rows[0]);

    let per_order: Vec<NoiseOrderStatistic> = rows
        .iter()
        .enumerate()
        .map(|(order, values)| {
            let (mean, standard_deviation, range) = moments(values);
            let noise_ratio_percent = if range0 == 0.0 { 0.0 } else { 100.0 * standard_deviation / range0 };
            NoiseOrderStatistic {
                order,
                mean,
                standard_deviation,
                range,
                noise_ratio_percent,
                usability: cfg.usability(order, noise_ratio_percent),
            }
        })
        .collect();

    let ratio = |k: usize| per_order.get(k).map_or(0.0, |s| s.noise_ratio_percent);
    let overall_level = cfg.level(ratio(1), ratio(2));

    let usable = |s: &&NoiseOrderStatistic| s.usability.is_usable();
    let max_recommended_order = per_order
        .iter()
        .skip(1)
        .filter(usable)
        .map(|s| s.order)
        .max()
        .unwrap_or(1);
    let max_contiguous_order = per_order
        .iter()
        .skip(1)
        .take_while(usable)
        .map(|s| s.order)
        .last()
        .unwrap_or(1);

    Ok(NoiseReport { per_order, overall_level, max_recommended_order, max_contiguous_order })
}
