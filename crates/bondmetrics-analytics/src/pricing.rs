//! Discounted cash-flow kernels.
//!
//! With `c` the coupon payment, `F` the par value, `m` periods per year,
//! `N` total periods and `v = 1 + y/m`:
//!
//! ```text
//! P(y)   = Σ_{i=1..N} c / v^i + F / v^N
//! P'(y)  = -(1/m) [ Σ_{i=1..N} i·c / v^(i+1) + N·F / v^(N+1) ]
//! ```
//!
//! Both return `NaN` when `v <= 0`, which the solvers treat as a domain
//! violation.

use crate::terms::BondTerms;

/// Converts a period count to a `powi` exponent.
///
/// [`BondTerms::validate`] bounds the count by `i32::MAX`.
pub(crate) fn exponent(periods: u32) -> i32 {
    i32::try_from(periods).unwrap_or(i32::MAX)
}

/// Present value of all cash flows at `yield_annual`.
pub fn price_from_yield(terms: &BondTerms, yield_annual: f64) -> f64 {
    if !terms.in_domain(yield_annual) {
        return f64::NAN;
    }
    let base = terms.discount_base(yield_annual);
    let coupon = terms.coupon_payment();
    let n = exponent(terms.total_periods());

    let coupons: f64 = (1..=n).map(|i| coupon / base.powi(i)).sum();
    coupons + terms.par / base.powi(n)
}

/// First derivative of [`price_from_yield`] with respect to the annual yield.
pub fn price_derivative(terms: &BondTerms, yield_annual: f64) -> f64 {
    if !terms.in_domain(yield_annual) {
        return f64::NAN;
    }
    let base = terms.discount_base(yield_annual);
    let coupon = terms.coupon_payment();
    let n = exponent(terms.total_periods());

    let coupons: f64 = (1..=n)
        .map(|i| f64::from(i) * coupon / base.powi(i + 1))
        .sum();
    let principal = f64::from(n) * terms.par / base.powi(n + 1);

    -(coupons + principal) / f64::from(terms.periods_per_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_par_bond_prices_at_par() {
        let terms = BondTerms::new(0.09, 100.0, 5.0, 2).unwrap();

        assert_relative_eq!(price_from_yield(&terms, 0.09), 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_discount_bond() {
        let terms = BondTerms::new(0.06, 100.0, 25.0, 2).unwrap();

        assert_relative_eq!(price_from_yield(&terms, 0.09), 70.3570, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_coupon_closed_form() {
        let terms = BondTerms::new(0.0, 100.0, 25.0, 2).unwrap();

        let expected = 100.0 / 1.045_f64.powi(50);
        assert_relative_eq!(price_from_yield(&terms, 0.09), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_matches_central_difference() {
        let terms = BondTerms::new(0.07, 100.0, 10.0, 4).unwrap();
        let y = 0.055;
        let h = 1e-6;

        let numerical = (price_from_yield(&terms, y + h) - price_from_yield(&terms, y - h)) / (2.0 * h);

        assert_relative_eq!(price_derivative(&terms, y), numerical, epsilon = 1e-5);
    }

    #[test]
    fn test_out_of_domain_is_nan() {
        let terms = BondTerms::new(0.05, 100.0, 5.0, 2).unwrap();

        assert!(price_from_yield(&terms, -2.0).is_nan());
        assert!(price_from_yield(&terms, -3.0).is_nan());
        assert!(price_derivative(&terms, f64::NAN).is_nan());
    }
}
