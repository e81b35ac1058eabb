//! Gauss forward formula
//!
//! ```text
//! p = (x - x₀) / h
//! P(x) = y₀ + p Δy₀ + p(p-1)/2! Δ²y₋₁ + p(p-1)(p+1)/3! Δ³y₋₁
//!           + p(p-1)(p+1)(p-2)/4! Δ⁴y₋₂ + ...
//! ```
//!
//! The zig-zag path through the table moves forward first; intended for
//! `0 <= p <= 1`.

use crate::interpolation::algorithms::Method;
use crate::interpolation::central::entry;
use crate::interpolation::terms::{alternating_shifts, series_term, shifted_label, shifted_product, Start, Term};
use crate::interpolation::traits::{Context, Formula};


#[derive(Debug, Copy, Clone, Default)]
pub struct GaussForward;

impl Formula for GaussForward {
    fn method(&self) -> Method { Method::GaussForward }

    fn reference_index(&self, n: usize) -> usize { n / 2 }

    fn start(&self, ctx: &Context) -> Start {
        let y0 = ctx.points[ctx.reference].y;
        Start {
            value: y0,
            description: "Start from the ordinate at the reference point".to_string(),
            formula: format!("y₀ = {}", ctx.fmt(y0)),
        }
    }

    fn term(&self, ctx: &Context, order: usize) -> Option<Term> {
        // Δᵏy at row -⌊k/2⌋
        let (diff, diff_label) = entry(ctx, order, -((order / 2) as isize))?;
        let shifts = alternating_shifts(order, -1.0);
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
        if !(0.0..=1.0).contains(&p) {
            return Some(format!(
                "p = {p:.4} is outside 0 <= p <= 1, where the Gauss forward formula applies"
            ));
        }
        None
    }
}
