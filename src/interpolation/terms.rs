//! Term construction shared by the formulas.
//!
//! A correction term is `product / k! · difference`, the product being a
//! run of shifted parameter factors. The division happens once the product
//! is complete, then the quotient multiplies the difference.

use crate::numeric::{factorial, fmt_num};


/// Starting value of the accumulator.
#[derive(Debug, Clone)]
pub struct Start {
    pub value: f64,
    pub description: String,
    pub formula: String,
}

/// One correction term of a series.
#[derive(Debug, Clone)]
pub struct Term {
    pub value: f64,
    pub formula: String,
}

/// Builds `product / fact! · difference` with its symbolic and numeric text.
pub(crate) fn series_term(
    product: f64,
    product_label: &str,
    fact: usize,
    difference: f64,
    difference_label: &str,
    precision: u32,
) -> Term {
    let value = product / factorial(fact) * difference;
    let symbolic = if fact > 1 {
        format!("{product_label}/{fact}! · {difference_label}")
    } else {
        format!("{product_label} · {difference_label}")
    };
    let formula = format!(
        "{symbolic} = {} / {} × {} = {}",
        fmt_num(product, precision),
        fmt_num(factorial(fact), 0),
        fmt_num(difference, precision),
        fmt_num(value, precision),
    );
    Term { value, formula }
}


/// `p`, `(p−1)`, `(p+2)`, `(p−0.5)` for a shift of `0`, `-1`, `+2`, `-0.5`.
pub(crate) fn factor_label(sym: &str, shift: f64) -> String {
    if shift == 0.0 {
        sym.to_string()
    } else if shift < 0.0 {
        format!("({sym}−{})", fmt_num(-shift, 6))
    } else {
        format!("({sym}+{})", fmt_num(shift, 6))
    }
}

/// Product of shifted factors `∏ (p + shift)`, multiplied left to right.
pub(crate) fn shifted_product(p: f64, shifts: &[f64]) -> f64 {
    shifts.iter().fold(1.0, |acc, &s| acc * (p + s))
}

/// Label of [`shifted_product`]: `p(p−1)(p+1)`.
pub(crate) fn shifted_label(sym: &str, shifts: &[f64]) -> String {
    shifts.iter().map(|&s| factor_label(sym, s)).collect()
}

/// Shifts of the alternating Gauss product: `0, lead, -lead, 2·lead, -2·lead, ...`
///
/// `lead = -1` gives `p(p−1)(p+1)(p−2)...`, `lead = +1` gives `p(p+1)(p−1)(p+2)...`.
pub(crate) fn alternating_shifts(k: usize, lead: f64) -> Vec<f64> {
    (0..k)
        .map(|i| {
            if i == 0 {
                return 0.0;
            }
            let t = ((i + 1) / 2) as f64;
            if i % 2 == 1 { lead * t } else { -lead * t }
        })
        .collect()
}

/// `lead · ∏_{i=1}^{j} (p² − i²)`, with `lead` already evaluated (`p`, `p²` or `q`).
pub(crate) fn squared_product(lead: f64, p: f64, j: usize) -> f64 {
    let mut acc = lead;
    for i in 1..=j {
        acc *= p * p - (i * i) as f64;
    }
    acc
}

/// Label of [`squared_product`]: `p(p²−1)(p²−4)`.
pub(crate) fn squared_label(lead: &str, sym: &str, j: usize) -> String {
    let mut s = lead.to_string();
    for i in 1..=j {
        s.push_str(&format!("({sym}²−{})", i * i));
    }
    s
}
