//! The [`Formula`] strategy trait.
//!
//! Every formula follows the same shape: pick a reference index, derive
//! `u` / `p` from it, start an accumulator, then add correction terms of
//! increasing order until a required table entry is absent. Implementors
//! only describe the formula-specific pieces; [`Formula::evaluate_with`]
//! runs the shared accumulate-and-trace loop.

use std::time::Instant;

use log::{debug, warn};

use crate::differences::table::{build_backward, build_central, build_forward, subscript, DifferenceTable, TableKind};
use crate::interpolation::algorithms::Method;
use crate::interpolation::config::DEFAULT_PRECISION;
use crate::interpolation::report::{InterpolationResult, InterpolationStep};
use crate::interpolation::terms::{Start, Term};
use crate::numeric::fmt_num;
use crate::point::Point;


/// Everything a formula needs to produce its terms.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub points: &'a [Point],
    pub table: &'a DifferenceTable,
    pub h: f64,
    pub reference: usize,
    pub param: f64,
    pub precision: u32,
}

impl Context<'_> {
    pub fn n(&self) -> usize { self.points.len() }

    /// `y` at `reference + offset`, `None` outside the sample.
    pub fn y_rel(&self, offset: isize) -> Option<f64> {
        let i = self.reference.checked_add_signed(offset)?;
        self.points.get(i).map(|p| p.y)
    }

    pub fn fmt(&self, v: f64) -> String {
        fmt_num(v, self.precision)
    }
}


pub trait Formula: Sync {
    fn method(&self) -> Method;

    /// Index of the anchoring point for `n` samples.
    fn reference_index(&self, n: usize) -> usize;

    /// `"u"` for the Newton pair, `"p"` for the central family.
    fn parameter_symbol(&self) -> &'static str { "p" }

    /// Lowest order contributing a term.
    fn first_order(&self) -> usize { 1 }

    /// Distance between consecutive term orders.
    fn order_stride(&self) -> usize { 1 }

    /// Accumulator start.
    fn start(&self, ctx: &Context) -> Start;

    /// Term of `order`, or `None` when a required entry is absent.
    fn term(&self, ctx: &Context, order: usize) -> Option<Term>;

    /// Warning when `param` lies outside the formula's well-conditioned zone.
    fn off_center(&self, param: f64, n: usize) -> Option<String>;

    /// Parameter derivations beyond the main one (Everett's `q`).
    fn extra_parameters(&self, _ctx: &Context) -> Vec<InterpolationStep> { Vec::new() }

    /// Table attached to the trace.
    fn snapshot(&self, table: &DifferenceTable) -> DifferenceTable { table.clone() }

    /// Evaluates at `x_query` with default text precision.
    fn evaluate(&self, points: &[Point], x_query: f64) -> InterpolationResult {
        self.evaluate_with(points, x_query, DEFAULT_PRECISION)
    }

    /// Evaluates at `x_query` over validated, equally spaced `points`.
    ///
    /// Never fails: missing higher-order entries truncate the series, and
    /// extrapolation or off-center use becomes the result's `warning`.
    fn evaluate_with(&self, points: &[Point], x_query: f64, precision: u32) -> InterpolationResult {
        let started = Instant::now();
        let method = self.method();
        let n = points.len();
        let sym = self.parameter_symbol();

        if n < 2 {
            let value = points.first().map_or(f64::NAN, |p| p.y);
            let warning = format!("{} needs at least two points, got {n}", method.title());
            warn!("{method}: {warning}");
            return InterpolationResult {
                method,
                method_name: method.method_name(),
                value,
                steps: vec![InterpolationStep::new(warning.clone()).with_value(value)],
                warning: Some(warning),
                computation_time_ms: started.elapsed().as_secs_f64() * 1e3,
                parameter: f64::NAN,
                reference_index: 0,
                terms_used: 0,
            };
        }

        let table = match method.table_kind() {
            TableKind::Forward  => build_forward(points),
            TableKind::Backward => build_backward(points),
            TableKind::Central  => build_central(points),
        };
        let h = points[1].x - points[0].x;
        let reference = self.reference_index(n).min(n - 1);
        let x_ref = points[reference].x;
        let param = (x_query - x_ref) / h;

        let ctx = Context { points, table: &table, h, reference, param, precision };
        let mut steps = Vec::new();

        steps.push(
            InterpolationStep::new(format!("Build the {} difference table", table.kind().table_name()))
                .with_table(self.snapshot(&table)),
        );
        steps.push(
            InterpolationStep::new("Step size from the first gap")
                .with_formula(format!(
                    "h = x₁ − x₀ = {} − {} = {}",
                    ctx.fmt(points[1].x), ctx.fmt(points[0].x), ctx.fmt(ctx.h)
                ))
                .with_value(ctx.h),
        );
        steps.push(
            InterpolationStep::new(format!(
                "Reference point x{} = {} (index {reference})",
                subscript(reference as isize), ctx.fmt(x_ref)
            ))
            .with_value(x_ref),
        );
        steps.push(
            InterpolationStep::new(format!("Parameter {sym}"))
                .with_formula(format!(
                    "{sym} = (x − x{}) / h = ({} − {}) / {} = {}",
                    subscript(reference as isize),
                    ctx.fmt(x_query), ctx.fmt(x_ref), ctx.fmt(ctx.h), ctx.fmt(param)
                ))
                .with_value(param),
        );
        steps.extend(self.extra_parameters(&ctx));

        let start = self.start(&ctx);
        let mut acc = start.value;
        steps.push(
            InterpolationStep::new(start.description)
                .with_formula(start.formula)
                .with_value(start.value),
        );
        debug!("{method}: n={n}, h={h}, reference={reference}, {sym}={param}, start={acc}");

        let mut terms_used = 0;
        let mut order = self.first_order();
        while order < n {
            match self.term(&ctx, order) {
                Some(term) => {
                    acc += term.value;
                    terms_used += 1;
                    debug!("{method}: order {order} term {} -> running value {acc}", term.value);
                    steps.push(
                        InterpolationStep::new(format!("Add the order {order} term"))
                            .with_formula(term.formula)
                            .with_value(term.value)
                            .with_order(order),
                    );
                }
                None => {
                    debug!("{method}: series truncated, no entries for order {order}");
                    steps.push(InterpolationStep::new(format!(
                        "No table entries available for order {order}; higher-order terms omitted"
                    )));
                    break;
                }
            }
            order += self.order_stride();
        }

        steps.push(
            InterpolationStep::new(format!("{} estimate at x = {}", method.title(), ctx.fmt(x_query)))
                .with_value(acc),
        );

        let mut warnings = Vec::new();
        let x_min = points[0].x;
        let x_max = points[n - 1].x;
        if x_query < x_min || x_query > x_max {
            warnings.push(format!(
                "x = {} lies outside the data range [{}, {}]; the result is an extrapolation",
                ctx.fmt(x_query), ctx.fmt(x_min), ctx.fmt(x_max)
            ));
        }
        if let Some(w) = self.off_center(param, n) {
            warnings.push(w);
        }
        for w in &warnings {
            warn!("{method}: {w}");
        }
        let warning = if warnings.is_empty() { None } else { Some(warnings.join("; ")) };

        InterpolationResult {
            method,
            method_name: method.method_name(),
            value: acc,
            steps,
            warning,
            computation_time_ms: started.elapsed().as_secs_f64() * 1e3,
            parameter: param,
            reference_index: reference,
            terms_used,
        }
    }
}
