//! Stirling's central-difference formula
//!
//! Mean of the Gauss forward and backward formulas:
//!
//! ```text
//! p = (x - x₀) / h
//! P(x) = y₀ + p (Δy₋₁ + Δy₀)/2 + p²/2! Δ²y₋₁
//!           + p(p²-1)/3! (Δ³y₋₂ + Δ³y₋₁)/2 + p²(p²-1)/4! Δ⁴y₋₂ + ...
//! ```
//!
//! Odd orders average two neighbouring differences, even orders read one.
//! Most accurate for `|p| <= 1/4`.

use crate::interpolation::algorithms::Method;
use crate::interpolation::central::{entry, mean_entry};
use crate::interpolation::terms::{series_term, squared_label, squared_product, Start, Term};
use crate::interpolation::traits::{Context, Formula};

pub const WELL_CONDITIONED_P: f64 = 0.25;


#[derive(Debug, Copy, Clone, Default)]
pub struct Stirling;

impl Formula for Stirling {
    fn method(&self) -> Method { Method::Stirling }

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
        let p = ctx.param;
        let j = (order + 1) / 2;
        let shift = j as isize;

        let (product, label, (diff, diff_label)) = if order % 2 == 1 {
            // order 2j-1: p(p²-1)...(p²-(j-1)²) · mean(Δy₋ⱼ, Δy₋ⱼ₊₁)
            (
                squared_product(p, p, j - 1),
                squared_label("p", "p", j - 1),
                mean_entry(ctx, order, -shift)?,
            )
        } else {
            // order 2j: p²(p²-1)...(p²-(j-1)²) · Δy₋ⱼ
            (
                squared_product(p * p, p, j - 1),
                squared_label("p²", "p", j - 1),
                entry(ctx, order, -shift)?,
            )
        };

        Some(series_term(product, &label, order, diff, &diff_label, ctx.precision))
    }

    fn off_center(&self, p: f64, _n: usize) -> Option<String> {
        if p.abs() > WELL_CONDITIONED_P {
            return Some(format!(
                "p = {p:.4} is outside -{WELL_CONDITIONED_P} <= p <= {WELL_CONDITIONED_P}, \
                 where Stirling's formula is most accurate"
            ));
        }
        None
    }
}
