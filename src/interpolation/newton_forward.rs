//! Newton Forward-Difference Interpolation
//!
//! Anchors on the first sample and expands in forward differences:
//!
//! ```text
//! u = (x - x₀) / h
//! P(x) = y₀ + u Δy₀ + u(u-1)/2! Δ²y₀ + ... + u(u-1)...(u-k+1)/k! Δᵏy₀
//! ```
//!
//! Best suited to points near the start of the table.

use crate::differences::table::{entry_label, TableKind};
use crate::interpolation::algorithms::Method;
use crate::interpolation::terms::{factor_label, series_term, Start, Term};
use crate::interpolation::traits::{Context, Formula};
use crate::numeric::falling_product;


#[derive(Debug, Copy, Clone, Default)]
pub struct NewtonForward;

impl Formula for NewtonForward {
    fn method(&self) -> Method { Method::NewtonForward }

    fn reference_index(&self, _n: usize) -> usize { 0 }

    fn parameter_symbol(&self) -> &'static str { "u" }

    fn start(&self, ctx: &Context) -> Start {
        let y0 = ctx.points[0].y;
        Start {
            value: y0,
            description: "Start from the first ordinate".to_string(),
            formula: format!("y₀ = {}", ctx.fmt(y0)),
        }
    }

    fn term(&self, ctx: &Context, order: usize) -> Option<Term> {
        let diff = ctx.table.get(order, 0)?;
        let u = ctx.param;
        let product = falling_product(u, order);

        let label: String = (0..order).map(|i| factor_label("u", -(i as f64))).collect();

        Some(series_term(
            product,
            &label,
            order,
            diff,
            &entry_label(TableKind::Forward, order, 0),
            ctx.precision,
        ))
    }

    fn off_center(&self, u: f64, n: usize) -> Option<String> {
        let half = (n - 1) as f64 / 2.0;
        if u > half {
            return Some(format!(
                "u = {u:.4} lies in the second half of the table (u > {half}); \
                 Newton Backward or a central formula fits this point better"
            ));
        }
        None
    }
}
