//! Special functions backing the pricing model.
//!
//! The error function is the Abramowitz and Stegun rational approximation
//! (formula 7.1.26). Its absolute error is bounded by 1.5×10⁻⁷, which in turn
//! bounds the accuracy of every price and Greek in this crate.

use std::f64::consts::{PI, SQRT_2};

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Approximation of the error function (erf).
///
/// # Arguments
/// - `x`: Input value
///
/// # Returns
/// Approximation of erf(x), odd in `x`
#[must_use]
pub fn erf(x: f64) -> f64 {
    let sign = if x >= 0.0 { 1.0 } else { -1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// Standard normal cumulative distribution function, Φ(x) = P(Z ≤ x).
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Standard normal probability density function, φ(x).
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}
