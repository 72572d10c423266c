//! Convexity.
//!
//! ## Formula
//!
//! ```text
//! C = [ Σ_{i=1..N} i(i+1)·c / v^(i+2) + N(N+1)·F / v^(N+2) ] / (P · m²)
//! ```
//!
//! The `m²` normalisation expresses the result in years squared.

use crate::pricing::exponent;
use crate::terms::BondTerms;

/// Discrete second-order price sensitivity, normalised by `price`.
pub fn convexity(terms: &BondTerms, yield_annual: f64, price: f64) -> f64 {
    let base = terms.discount_base(yield_annual);
    let m = f64::from(terms.periods_per_year);
    let coupon = terms.coupon_payment();
    let n = exponent(terms.total_periods());

    let coupons: f64 = (1..=n)
        .map(|i| {
            let i_f = f64::from(i);
            i_f * (i_f + 1.0) * coupon / base.powi(i + 2)
        })
        .sum();
    let n_f = f64::from(n);
    let principal = n_f * (n_f + 1.0) * terms.par / base.powi(n + 2);

    (coupons + principal) / (price * m * m)
}

/// Second-order price change estimate for a yield change `yield_change` (decimal).
///
/// ```text
/// ΔP ≈ -D_mod · P · Δy + ½ · C · P · Δy²
/// ```
pub fn price_change_with_convexity(
    modified_duration: f64,
    convexity: f64,
    price: f64,
    yield_change: f64,
) -> f64 {
    -modified_duration * price * yield_change
        + 0.5 * convexity * price * yield_change * yield_change
}
