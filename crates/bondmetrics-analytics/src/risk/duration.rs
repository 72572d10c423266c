//! Macaulay and modified duration.
//!
//! ## Formula
//!
//! ```text
//! D_mac = [ Σ_{i=1..N} (i/m)·c / v^i + T·F / v^N ] / P
//! D_mod = D_mac / (1 + y/m)
//! ```
//!
//! where `T` is the stated maturity in years. When `maturity * m` is not an
//! integer the redemption term is weighted by `T`, not by `N/m`.

use crate::pricing::exponent;
use crate::terms::BondTerms;

/// Time-weighted present value of the cash flows divided by `price`, in years.
pub fn macaulay_duration(terms: &BondTerms, yield_annual: f64, price: f64) -> f64 {
    let base = terms.discount_base(yield_annual);
    let m = f64::from(terms.periods_per_year);
    let coupon = terms.coupon_payment();
    let n = exponent(terms.total_periods());

    let coupons: f64 = (1..=n)
        .map(|i| (f64::from(i) / m) * coupon / base.powi(i))
        .sum();
    let principal = terms.maturity * terms.par / base.powi(n);

    (coupons + principal) / price
}

/// Modified duration from Macaulay duration.
///
/// ```text
/// D_mod = D_mac / (1 + y/f)
/// ```
pub fn modified_from_macaulay(macaulay: f64, yield_annual: f64, periods_per_year: u32) -> f64 {
    macaulay / (1.0 + yield_annual / f64::from(periods_per_year))
}

/// First-order price change for a yield change `yield_change` (decimal).
pub fn price_change_from_duration(modified_duration: f64, price: f64, yield_change: f64) -> f64 {
    -modified_duration * price * yield_change
}
