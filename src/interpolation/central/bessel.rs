//! Bessel's central-difference formula
//!
//! Straddles the interval `[x₀, x₁]` instead of anchoring on one point:
//!
//! ```text
//! p = (x - x₀) / h
//! P(x) = (y₀ + y₁)/2 + (p - 1/2) Δy₀ + p(p-1)/2! (Δ²y₋₁ + Δ²y₀)/2
//!      + p(p-1)(p-1/2)/3! Δ³y₋₁
//!      + p(p-1)(p+1)(p-2)/4! (Δ⁴y₋₂ + Δ⁴y₋₁)/2 + ...
//! ```
//!
//! Most accurate for `1/4 <= p <= 3/4`, i.e. near the middle of the interval.

use crate::interpolation::algorithms::Method;
use crate::interpolation::central::{entry, mean_entry};
use crate::interpolation::terms::{alternating_shifts, series_term, shifted_label, shifted_product, Start, Term};
use crate::interpolation::traits::{Context, Formula};

pub const WELL_CONDITIONED_LOW: f64 = 0.25;
pub const WELL_CONDITIONED_HIGH: f64 = 0.75;


#[derive(Debug, Copy, Clone, Default)]
pub struct Bessel;

impl Formula for Bessel {
    fn method(&self) -> Method { Method::Bessel }

    fn reference_index(&self, n: usize) -> usize { n.saturating_sub(1) / 2 }

    fn start(&self, ctx: &Context) -> Start {
        let y0 = ctx.points[ctx.reference].y;
        let y1 = ctx.y_rel(1).unwrap_or(y0);
        let value = (y0 + y1) / 2.0;
        Start {
            value,
            description: "Start from the mean of the two ordinates around the query".to_string(),
            formula: format!(
                "(y₀ + y₁)/2 = ({} + {})/2 = {}",
                ctx.fmt(y0), ctx.fmt(y1), ctx.fmt(value)
            ),
        }
    }

    fn term(&self, ctx: &Context, order: usize) -> Option<Term> {
        let p = ctx.param;

        let (shifts, (diff, diff_label)) = if order == 1 {
            (vec![-0.5], entry(ctx, 1, 0)?)
        } else if order % 2 == 0 {
            // order 2j: p(p-1)(p+1)...(p-j) · mean(Δy₋ⱼ, Δy₋ⱼ₊₁)
            let j = order / 2;
            (alternating_shifts(order, -1.0), mean_entry(ctx, order, -(j as isize))?)
        } else {
            // order 2j+1: p(p-1)(p+1)...(p-j)(p-1/2) · Δy₋ⱼ
            let j = order / 2;
            let mut shifts = alternating_shifts(2 * j, -1.0);
            shifts.push(-0.5);
            (shifts, entry(ctx, order, -(j as isize))?)
        };

        let product = shifted_product(p, &shifts);
        let label = shifted_label("p", &shifts);
        Some(series_term(product, &label, order, diff, &diff_label, ctx.precision))
    }

    fn off_center(&self, p: f64, _n: usize) -> Option<String> {
        if !(WELL_CONDITIONED_LOW..=WELL_CONDITIONED_HIGH).contains(&p) {
            return Some(format!(
                "p = {p:.4} is outside {WELL_CONDITIONED_LOW} <= p <= {WELL_CONDITIONED_HIGH}, \
                 where Bessel's formula is most accurate"
            ));
        }
        None
    }
}
