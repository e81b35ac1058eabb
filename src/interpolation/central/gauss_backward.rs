//! Gauss backward formula
//!
//! ```text
//! p = (x - x₀) / h
//! P(x) = y₀ + p Δy₋₁ + p(p+1)/2! Δ²y₋₁ + p(p+1)(p-1)/3! Δ³y₋₂
//!           + p(p+1)(p-1)(p+2)/4! Δ⁴y₋₂ + ...
//! ```
//!
//! Mirror image of the forward variant, intended for `-1 <= p <= 0`.
//! The reference index rounds up (`⌈n/2⌉`).

use crate::interpolation::algorithms::Method;
use crate::interpolation::central::entry;
use crate::interpolation::terms::{alternating_shifts, series_term, shifted_label, shifted_product, Start, Term};
use crate::interpolation::traits::{Context, Formula};


#[derive(Debug, Copy, Clone, Default)]
pub struct GaussBackward;

impl Formula for GaussBackward {
    fn method(&self) -> Method { Method::GaussBackward }

    fn reference_index(&self, n: usize) -> usize { n.div_ceil(2) }

    fn start(&self, ctx: &Context) -> Start {
        let y0 = ctx.points[ctx.reference].y;
        Start {
            value: y0,
            description: "Start from the ordinate at the reference point".to_string(),
            formula: format!("y₀ = {}", ctx.fmt(y0)),
        }
    }

    fn term(&self, ctx: &Context, order: usize) -> Option<Term> {
        // Δᵏy at row -⌈k/2⌉
        let (diff, diff_label) = entry(ctx, order, -(order.div_ceil(2) as isize))?;
        let shifts = alternating_shifts(order, 1.0);
        Some(series_term(
            shifted_product(ctx.param, &shifts),
            &shifted_label("p", &shifts),
            order,
            diff,
            &diff_label,
            ctx.precision,
        ))
    }

    fn off_center(&self, p: f64, _n: usize) -> Option<String> {
        if !(-1.0..=0.0).contains(&p) {
            return Some(format!(
                "p = {p:.4} is outside -1 <= p <= 0, where the Gauss backward formula applies"
            ));
        }
        None
    }
}
