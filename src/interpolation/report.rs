//! Defines the records returned by every interpolation formula.
//!
//! [`InterpolationResult`] carries the final estimate together with the
//! ordered [`InterpolationStep`] trace of how it was derived. Steps are for
//! replay and display only; the value never depends on them.

use crate::differences::table::DifferenceTable;
use crate::interpolation::algorithms::Method;


/// One arithmetic stage of a derivation.
///
/// - `description`    : what happened, in words
/// - `formula`        : symbolic form with the numbers substituted
/// - `table_snapshot` : difference table the stage refers to
/// - `numeric_value`  : value produced by the stage
/// - `order`          : difference order the stage consumed
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationStep {
    pub description: String,
    pub formula: Option<String>,
    pub table_snapshot: Option<DifferenceTable>,
    pub numeric_value: Option<f64>,
    pub order: Option<usize>,
}

impl InterpolationStep {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            formula: None,
            table_snapshot: None,
            numeric_value: None,
            order: None,
        }
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    pub fn with_value(mut self, v: f64) -> Self {
        self.numeric_value = Some(v);
        self
    }

    pub fn with_table(mut self, table: DifferenceTable) -> Self {
        self.table_snapshot = Some(table);
        self
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }
}


/// Outcome of one `(formula, points, x_query)` evaluation.
///
/// [`InterpolationResult`]
/// - `method`              : formula used ([`Method`])
/// - `method_name`         : its name (e.g. `"stirling"`)
/// - `value`               : interpolated estimate
/// - `steps`               : derivation trace, in evaluation order
/// - `warning`             : extrapolation / off-center advisory, if any
/// - `computation_time_ms` : wall time of the evaluation
/// - `parameter`           : `u` or `p` of the formula
/// - `reference_index`     : index of the anchoring point
/// - `terms_used`          : correction terms added after the starting value
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationResult {
    pub method: Method,
    pub method_name: &'static str,
    pub value: f64,
    pub steps: Vec<InterpolationStep>,
    pub warning: Option<String>,
    pub computation_time_ms: f64,
    pub parameter: f64,
    pub reference_index: usize,
    pub terms_used: usize,
}

impl InterpolationResult {
    /// Highest difference order any step consumed.
    pub fn highest_order(&self) -> Option<usize> {
        self.steps.iter().filter_map(|s| s.order).max()
    }

    /// Orders of the correction terms, in the order they were added.
    pub fn orders_used(&self) -> Vec<usize> {
        self.steps.iter().filter_map(|s| s.order).collect()
    }
}
