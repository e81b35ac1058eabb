//! Central-Difference Interpolation
//!
//! Five formulas anchored at a mid index of the table rather than an edge.
//! All read the forward recurrence with subscripts relative to the
//! reference point `x₀`, so `Δ²y₋₁` is the second difference starting one
//! row above it.
//!
//! | formula        | reference   | start             |
//! |----------------|-------------|-------------------|
//! | Stirling       | `n / 2`     | `y₀`              |
//! | Bessel         | `(n-1) / 2` | `(y₀ + y₁) / 2`   |
//! | Everett        | `(n-1) / 2` | `q y₀ + p y₁`     |
//! | Gauss forward  | `n / 2`     | `y₀`              |
//! | Gauss backward | `⌈n / 2⌉`   | `y₀`              |

pub mod stirling;
pub mod bessel;
pub mod everett;
pub mod gauss_forward;
pub mod gauss_backward;

pub use bessel::Bessel;
pub use everett::Everett;
pub use gauss_backward::GaussBackward;
pub use gauss_forward::GaussForward;
pub use stirling::Stirling;

use crate::differences::table::{entry_label, TableKind};
use crate::interpolation::traits::Context;


/// Central entry `Δᵏy_offset` with its label.
pub(crate) fn entry(ctx: &Context, order: usize, offset: isize) -> Option<(f64, String)> {
    let v = ctx.table.get_rel(order, ctx.reference, offset)?;
    Some((v, entry_label(TableKind::Forward, order, offset)))
}

/// Mean of two neighbouring entries of the same order, `None` if either is absent.
pub(crate) fn mean_entry(ctx: &Context, order: usize, offset: isize) -> Option<(f64, String)> {
    let (a, la) = entry(ctx, order, offset)?;
    let (b, lb) = entry(ctx, order, offset + 1)?;
    Some(((a + b) / 2.0, format!("({la} + {lb})/2")))
}
