//! Numeric helpers shared by the difference tables and the formulas.
//!
//! - [`factorial`]       : `k!` as `f64`, iterative
//! - [`binomial`]        : `C(n, k)` as `f64`
//! - [`falling_product`] : `u(u - 1)...(u - k + 1)`
//! - [`rising_product`]  : `u(u + 1)...(u + k - 1)`
//! - [`round_to`]        : display rounding to a number of decimals
//! - [`fmt_num`]         : rounded value rendered without trailing zeros
//!
//! Every product is formed left to right and never divided early, the
//! formulas divide by the factorial only once the product is complete.


/// `k!` computed iteratively. `0! = 1`.
#[inline]
pub fn factorial(k: usize) -> f64 {
    let mut acc = 1.0;
    for i in 2..=k {
        acc *= i as f64;
    }
    acc
}

/// Binomial coefficient `C(n, k)`; zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    // symmetric, use the shorter product
    let k = k.min(n - k);
    let mut acc = 1.0;
    for i in 0..k {
        acc = acc * (n - i) as f64 / (i + 1) as f64;
    }
    acc.round()
}

/// `u(u - 1)(u - 2)...(u - k + 1)`; the empty product (`k = 0`) is `1`.
#[inline]
pub fn falling_product(u: f64, k: usize) -> f64 {
    let mut acc = 1.0;
    for i in 0..k {
        acc *= u - i as f64;
    }
    acc
}

/// `u(u + 1)(u + 2)...(u + k - 1)`; the empty product (`k = 0`) is `1`.
#[inline]
pub fn rising_product(u: f64, k: usize) -> f64 {
    let mut acc = 1.0;
    for i in 0..k {
        acc *= u + i as f64;
    }
    acc
}

/// Rounds `value` to `decimals` places for display.
///
/// Non-finite values pass through untouched.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    // avoid "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a value rounded to `decimals`, trimming trailing zeros.
///
/// `fmt_num(2.50, 6) == "2.5"`, `fmt_num(4.0, 6) == "4"`.
pub fn fmt_num(value: f64, decimals: u32) -> String {
    let rounded = round_to(value, decimals);
    let mut s = format!("{:.*}", decimals as usize, rounded);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
