//! Human-presentable difference tables.
//!
//! [`AnnotatedTable`] lays a [`DifferenceTable`] out one row per sample
//! point: `x`, `y`, then one column per difference order with the layout's
//! operator in the header. Cells whose position is absent for that order
//! stay empty. Printing goes through `tabled`.

use std::fmt;

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::differences::table::{build_backward, build_central, build_forward, order_label, DifferenceTable, TableKind};
use crate::numeric::fmt_num;
use crate::point::Point;


/// Default number of decimals shown in annotated cells.
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 6;


#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedTable {
    kind: TableKind,
    headers: Vec<String>,
    x: Vec<f64>,
    cells: Vec<Vec<Option<f64>>>,
    decimals: u32,
}

impl AnnotatedTable {
    /// Annotates `table`, which must have been built from `points`.
    pub fn new(table: &DifferenceTable, points: &[Point], decimals: u32) -> Self {
        let n = table.n_points().min(points.len());
        let kind = table.kind();

        let mut headers = Vec::with_capacity(n + 1);
        headers.push("x".to_string());
        for order in 0..n {
            headers.push(order_label(kind, order));
        }

        let cells = (0..n)
            .map(|row| (0..n).map(|order| table.get(order, row)).collect())
            .collect();

        Self {
            kind,
            headers,
            x: points.iter().take(n).map(|p| p.x).collect(),
            cells,
            decimals,
        }
    }

    /// Annotates `table` with [`DEFAULT_DISPLAY_DECIMALS`] decimals.
    pub fn with_default_decimals(table: &DifferenceTable, points: &[Point]) -> Self {
        Self::new(table, points, DEFAULT_DISPLAY_DECIMALS)
    }

    pub fn kind(&self) -> TableKind { self.kind }
    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn n_rows(&self) -> usize { self.x.len() }

    /// Numeric cell for `(row, order)`, `None` when absent.
    pub fn cell(&self, row: usize, order: usize) -> Option<f64> {
        self.cells.get(row)?.get(order).copied().flatten()
    }

    /// Cell text as displayed (rounded, empty when absent).
    pub fn cell_text(&self, row: usize, order: usize) -> String {
        self.cell(row, order)
            .map(|v| fmt_num(v, self.decimals))
            .unwrap_or_default()
    }

    /// All rows as display strings, headers excluded.
    pub fn records(&self) -> Vec<Vec<String>> {
        let n_orders = self.headers.len().saturating_sub(1);
        self.x
            .iter()
            .enumerate()
            .map(|(row, &x)| {
                let mut rec = Vec::with_capacity(n_orders + 1);
                rec.push(fmt_num(x, self.decimals));
                rec.extend((0..n_orders).map(|order| self.cell_text(row, order)));
                rec
            })
            .collect()
    }
}

impl fmt::Display for AnnotatedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(self.headers.clone());
        for rec in self.records() {
            builder.push_record(rec);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        write!(f, "{table}")
    }
}


/// Forward table annotated for display.
pub fn build_forward_annotated(points: &[Point], decimals: u32) -> AnnotatedTable {
    AnnotatedTable::new(&build_forward(points), points, decimals)
}

/// Backward table annotated for display.
pub fn build_backward_annotated(points: &[Point], decimals: u32) -> AnnotatedTable {
    AnnotatedTable::new(&build_backward(points), points, decimals)
}

/// Central table annotated for display.
pub fn build_central_annotated(points: &[Point], decimals: u32) -> AnnotatedTable {
    AnnotatedTable::new(&build_central(points), points, decimals)
}
