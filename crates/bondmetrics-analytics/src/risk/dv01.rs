//! DV01 (Dollar Value of 01).
//!
//! Computed as a literal one-sided price difference rather than
//! `D_mod × P × 0.0001`, so `dv01(-1) != -dv01(1)`: the gap is the
//! convexity contribution.

use crate::pricing::price_from_yield;
use crate::terms::BondTerms;

/// One basis point in decimal yield.
pub const BASIS_POINT: f64 = 0.0001;

/// Bump size used when none is specified.
pub const DEFAULT_BUMP_BP: f64 = 1.0;

/// Price change when `yield_annual` moves by `bp` basis points.
///
/// Returns `bumped_price - price`: negative for `bp > 0`, positive for
/// `bp < 0`. `NaN` if the bumped yield leaves the discounting domain.
pub fn dv01(terms: &BondTerms, yield_annual: f64, price: f64, bp: f64) -> f64 {
    price_from_yield(terms, yield_annual + bp * BASIS_POINT) - price
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sign_and_asymmetry() {
        let terms = BondTerms::new(0.09, 100.0, 5.0, 2).unwrap();
        let price = price_from_yield(&terms, 0.09);

        let up = dv01(&terms, 0.09, price, 1.0);
        let down = dv01(&terms, 0.09, price, -1.0);

        assert!(up < 0.0);
        assert!(down > 0.0);
        // Convexity makes the rally gain exceed the sell-off loss.
        assert!(down > -up);
    }

    #[test]
    fn test_close_to_duration_estimate() {
        let terms = BondTerms::new(0.09, 100.0, 5.0, 2).unwrap();
        let price = price_from_yield(&terms, 0.09);

        // D_mod × P × 1bp = 3.9564 × 100 × 0.0001
        assert_relative_eq!(dv01(&terms, 0.09, price, 1.0), -0.039564, epsilon = 5e-5);
    }

    #[test]
    fn test_zero_bump() {
        let terms = BondTerms::new(0.05, 100.0, 10.0, 2).unwrap();
        let price = price_from_yield(&terms, 0.05);

        assert_relative_eq!(dv01(&terms, 0.05, price, 0.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bump_out_of_domain() {
        let terms = BondTerms::new(0.05, 100.0, 10.0, 2).unwrap();
        let price = price_from_yield(&terms, 0.05);

        assert!(dv01(&terms, 0.05, price, -30_000.0).is_nan());
    }
}
