//! Newton Backward-Difference Interpolation
//!
//! Anchors on the last sample and expands in backward differences:
//!
//! ```text
//! u = (x - xₙ) / h
//! P(x) = yₙ + u ∇yₙ + u(u+1)/2! ∇²yₙ + ... + u(u+1)...(u+k-1)/k! ∇ᵏyₙ
//! ```

use crate::differences::table::{order_label, subscript, TableKind};
use crate::interpolation::algorithms::Method;
use crate::interpolation::terms::{factor_label, series_term, Start, Term};
use crate::interpolation::traits::{Context, Formula};
use crate::numeric::rising_product;


#[derive(Debug, Copy, Clone, Default)]
pub struct NewtonBackward;

impl Formula for NewtonBackward {
    fn method(&self) -> Method { Method::NewtonBackward }

    fn reference_index(&self, n: usize) -> usize { n.saturating_sub(1) }

    fn parameter_symbol(&self) -> &'static str { "u" }

    fn start(&self, ctx: &Context) -> Start {
        let yn = ctx.points[ctx.reference].y;
        Start {
            value: yn,
            description: "Start from the last ordinate".to_string(),
            formula: format!("y{} = {}", subscript(ctx.reference as isize), ctx.fmt(yn)),
        }
    }

    fn term(&self, ctx: &Context, order: usize) -> Option<Term> {
        let diff = ctx.table.get(order, ctx.reference)?;
        let product = rising_product(ctx.param, order);
        let label: String = (0..order).map(|i| factor_label("u", i as f64)).collect();
        let diff_label = format!(
            "{}{}",
            order_label(TableKind::Backward, order),
            subscript(ctx.reference as isize)
        );

        Some(series_term(product, &label, order, diff, &diff_label, ctx.precision))
    }

    fn off_center(&self, u: f64, n: usize) -> Option<String> {
        let half = (n - 1) as f64 / 2.0;
        if u < -half {
            return Some(format!(
                "u = {u:.4} lies in the first half of the table (u < -{half}); \
                 Newton Forward or a central formula fits this point better"
            ));
        }
        None
    }
}
