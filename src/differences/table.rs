//! Finite-difference tables.
//!
//! A [`DifferenceTable`] is triangular and indexed `[order][position]`,
//! with order `0` holding the sorted `y` values. Three layouts share the
//! same storage:
//!
//! ```text
//! forward  : Δᵏy[i] = Δᵏ⁻¹y[i + 1] - Δᵏ⁻¹y[i]     positions 0..n-k
//! backward : ∇ᵏy[i] = ∇ᵏ⁻¹y[i]     - ∇ᵏ⁻¹y[i - 1] positions k..n
//! central  : same recurrence as forward, read around a mid index
//! ```
//!
//! Since `∇ᵏy[i + k] == Δᵏy[i]` the rows are computed once and only the
//! position offset differs between layouts. Positions outside the valid
//! range are absent: [`DifferenceTable::get`] returns `None`, never `0.0`.

use std::ops::Range;

use crate::point::Point;


/// Difference table layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TableKind {
    Forward,
    Backward,
    Central,
}

impl TableKind {
    /// Operator symbol used in labels (`Δ`, `∇`, `δ`).
    pub const fn symbol(self) -> &'static str {
        match self {
            TableKind::Forward  => "Δ",
            TableKind::Backward => "∇",
            TableKind::Central  => "δ",
        }
    }

    pub const fn table_name(self) -> &'static str {
        match self {
            TableKind::Forward  => "forward",
            TableKind::Backward => "backward",
            TableKind::Central  => "central",
        }
    }
}


/// Numeric difference table, built once per computation and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceTable {
    kind: TableKind,
    n: usize,
    rows: Vec<Vec<f64>>,
}

impl DifferenceTable {
    /// Builds a table of the given layout from `y` values already in x order.
    pub fn from_values(kind: TableKind, y: &[f64]) -> Self {
        Self { kind, n: y.len(), rows: difference_rows(y) }
    }

    pub fn kind(&self) -> TableKind { self.kind }

    /// Number of sample points the table was built from.
    pub fn n_points(&self) -> usize { self.n }

    /// Highest order present (`n - 1`), `None` for an empty table.
    pub fn max_order(&self) -> Option<usize> { self.n.checked_sub(1) }

    /// Valid positions for `order` in this layout.
    pub fn positions(&self, order: usize) -> Range<usize> {
        if order >= self.n {
            return 0..0;
        }
        match self.kind {
            TableKind::Forward | TableKind::Central => 0..self.n - order,
            TableKind::Backward                     => order..self.n,
        }
    }

    /// Entry at `[order][position]`, or `None` when absent.
    pub fn get(&self, order: usize, position: usize) -> Option<f64> {
        let offset = match self.kind {
            TableKind::Forward | TableKind::Central => 0,
            TableKind::Backward                     => order,
        };
        let idx = position.checked_sub(offset)?;
        self.rows.get(order)?.get(idx).copied()
    }

    /// Entry at `center + offset`, for formulas that index relative to a mid point.
    pub fn get_rel(&self, order: usize, center: usize, offset: isize) -> Option<f64> {
        let pos = center.checked_add_signed(offset)?;
        self.get(order, pos)
    }

    /// Values stored for `order`, in position order.
    pub fn order_values(&self, order: usize) -> &[f64] {
        self.rows.get(order).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Copy of the table with only the orders accepted by `keep`; dropped
    /// orders read as absent everywhere.
    pub fn retain_orders<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(usize) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(k, row)| if keep(k) { row.clone() } else { Vec::new() })
            .collect();
        Self { kind: self.kind, n: self.n, rows }
    }

    /// Whether any entry of `order` survives (see [`Self::retain_orders`]).
    pub fn has_order(&self, order: usize) -> bool {
        !self.order_values(order).is_empty()
    }
}


/// Raw forward-difference rows: `rows[k][i] = Δᵏy[i]`, `rows[k].len() == n - k`.
pub fn difference_rows(y: &[f64]) -> Vec<Vec<f64>> {
    let n = y.len();
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(n);
    if n == 0 {
        return rows;
    }
    rows.push(y.to_vec());

    for k in 1..n {
        let prev = &rows[k - 1];
        let next: Vec<f64> = prev.windows(2).map(|w| w[1] - w[0]).collect();
        rows.push(next);
    }

    rows
}

fn y_values(points: &[Point]) -> Vec<f64> {
    points.iter().map(|p| p.y).collect()
}

/// Forward table `Δᵏy[i]` from sorted points.
pub fn build_forward(points: &[Point]) -> DifferenceTable {
    DifferenceTable::from_values(TableKind::Forward, &y_values(points))
}

/// Backward table `∇ᵏy[i]` from sorted points.
pub fn build_backward(points: &[Point]) -> DifferenceTable {
    DifferenceTable::from_values(TableKind::Backward, &y_values(points))
}

/// Central table; forward recurrence, read around a mid index.
pub fn build_central(points: &[Point]) -> DifferenceTable {
    DifferenceTable::from_values(TableKind::Central, &y_values(points))
}


const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Unicode superscript for an order (`3 -> "³"`, `12 -> "¹²"`).
pub fn superscript(k: usize) -> String {
    k.to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| SUPERSCRIPTS[d as usize]))
        .collect()
}

/// Column label of an order: `y`, `Δy`, `Δ²y`, `∇³y`, ...
pub fn order_label(kind: TableKind, order: usize) -> String {
    match order {
        0 => "y".to_string(),
        1 => format!("{}y", kind.symbol()),
        k => format!("{}{}y", kind.symbol(), superscript(k)),
    }
}

/// Label of a single entry relative to a reference index: `Δ²y₋₁`, `∇y₄`.
pub fn entry_label(kind: TableKind, order: usize, offset: isize) -> String {
    format!("{}{}", order_label(kind, order), subscript(offset))
}

const SUBSCRIPTS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Unicode subscript for a signed offset (`-2 -> "₋₂"`).
pub fn subscript(i: isize) -> String {
    let mut s = String::new();
    if i < 0 {
        s.push('₋');
    }
    for c in i.unsigned_abs().to_string().chars() {
        s.push(c.to_digit(10).map_or(c, |d| SUBSCRIPTS[d as usize]));
    }
    s
}
