//! Everett's central-difference formula
//!
//! Uses even-order differences only, weighted by `p` and `q = 1 - p`:
//!
//! ```text
//! p = (x - x₀) / h,   q = 1 - p
//! P(x) = q y₀ + q(q²-1)/3! Δ²y₋₁ + q(q²-1)(q²-4)/5! Δ⁴y₋₂ + ...
//!      + p y₁ + p(p²-1)/3! Δ²y₀  + p(p²-1)(p²-4)/5! Δ⁴y₋₁ + ...
//! ```
//!
//! The `p` half reads the same rows shifted one step down, so order `2j`
//! pairs `Δ²ʲy₋ⱼ` with `Δ²ʲy₋ⱼ₊₁`.

use crate::differences::table::DifferenceTable;
use crate::interpolation::algorithms::Method;
use crate::interpolation::central::entry;
use crate::interpolation::report::InterpolationStep;
use crate::interpolation::terms::{series_term, squared_label, squared_product, Start, Term};
use crate::interpolation::traits::{Context, Formula};


#[derive(Debug, Copy, Clone, Default)]
pub struct Everett;

impl Formula for Everett {
    fn method(&self) -> Method { Method::Everett }

    fn reference_index(&self, n: usize) -> usize { n.saturating_sub(1) / 2 }

    fn first_order(&self) -> usize { 2 }

    fn order_stride(&self) -> usize { 2 }

    fn extra_parameters(&self, ctx: &Context) -> Vec<InterpolationStep> {
        let q = 1.0 - ctx.param;
        vec![
            InterpolationStep::new("Complementary parameter q")
                .with_formula(format!("q = 1 − p = 1 − {} = {}", ctx.fmt(ctx.param), ctx.fmt(q)))
                .with_value(q),
        ]
    }

    fn start(&self, ctx: &Context) -> Start {
        let p = ctx.param;
        let q = 1.0 - p;
        let y0 = ctx.points[ctx.reference].y;
        let y1 = ctx.y_rel(1).unwrap_or(y0);
        let value = q * y0 + p * y1;
        Start {
            value,
            description: "Start from the p/q-weighted ordinates around the query".to_string(),
            formula: format!(
                "q·y₀ + p·y₁ = {}·{} + {}·{} = {}",
                ctx.fmt(q), ctx.fmt(y0), ctx.fmt(p), ctx.fmt(y1), ctx.fmt(value)
            ),
        }
    }

    fn term(&self, ctx: &Context, order: usize) -> Option<Term> {
        if order % 2 == 1 {
            return None;
        }
        let p = ctx.param;
        let q = 1.0 - p;
        let j = order / 2;
        let fact = order + 1;

        let (qd, ql) = entry(ctx, order, -(j as isize))?;
        let (pd, pl) = entry(ctx, order, 1 - j as isize)?;

        let q_term = series_term(
            squared_product(q, q, j),
            &squared_label("q", "q", j),
            fact,
            qd,
            &ql,
            ctx.precision,
        );
        let p_term = series_term(
            squared_product(p, p, j),
            &squared_label("p", "p", j),
            fact,
            pd,
            &pl,
            ctx.precision,
        );

        let value = q_term.value + p_term.value;
        Some(Term {
            value,
            formula: format!("[{}] + [{}] = {}", q_term.formula, p_term.formula, ctx.fmt(value)),
        })
    }

    fn snapshot(&self, table: &DifferenceTable) -> DifferenceTable {
        table.retain_orders(|k| k % 2 == 0)
    }

    fn off_center(&self, p: f64, _n: usize) -> Option<String> {
        if !(0.0..=1.0).contains(&p) {
            return Some(format!(
                "p = {p:.4} is outside 0 <= p <= 1; Everett's formula is meant for the \
                 interval between the two central points"
            ));
        }
        None
    }
}
