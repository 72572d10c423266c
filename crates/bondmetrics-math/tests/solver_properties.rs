//! Property-based tests for the root finders.
//!
//! Newton-Raphson, secant and Brent must agree on the root of any smooth
//! monotone function they are given a fair start on.

use bondmetrics_math::prelude::*;
use proptest::prelude::*;

/// `Σ_{i=1..n} c / (1+r)^i + 100 / (1+r)^n - target`, decreasing in `r`.
fn level_payment_value(rate: f64, coupon: f64, periods: i32) -> f64 {
    let base = 1.0 + rate;
    let coupons: f64 = (1..=periods).map(|i| coupon / base.powi(i)).sum();
    coupons + 100.0 / base.powi(periods)
}

fn level_payment_slope(rate: f64, coupon: f64, periods: i32) -> f64 {
    let base = 1.0 + rate;
    let coupons: f64 = (1..=periods)
        .map(|i| -f64::from(i) * coupon / base.powi(i + 1))
        .sum();
    coupons - f64::from(periods) * 100.0 / base.powi(periods + 1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_cube_root_all_solvers_agree(a in 0.1..100.0f64) {
        let config = SolverConfig::default();
        let f = |x: f64| x * x * x - a;
        let start = a.max(1.0) + 1.0;

        let newton = newton_raphson(f, |x: f64| 3.0 * x * x, start, &config).unwrap();
        let secant = secant(f, start, start + 0.1, &config).unwrap();
        let brent = brent(f, 0.0, a + 1.0, &config).unwrap();

        let root = a.cbrt();
        prop_assert!((newton.root - root).abs() < 1e-8);
        prop_assert!((secant.root - root).abs() < 1e-8);
        prop_assert!((brent.root - root).abs() < 1e-8);
    }

    #[test]
    fn prop_level_payment_rate_all_solvers_agree(
        coupon in 0.0..15.0f64,
        periods in 1i32..40,
        rate in 0.001..0.30f64,
    ) {
        let config = SolverConfig::default();
        let target = level_payment_value(rate, coupon, periods);
        let f = |r: f64| level_payment_value(r, coupon, periods) - target;
        let df = |r: f64| level_payment_slope(r, coupon, periods);

        let newton = newton_raphson(f, df, 0.0, &config).unwrap();
        let secant = secant(f, 0.0, 1e-4, &config).unwrap();
        let brent = brent(f, -0.05, 1.0, &config).unwrap();

        prop_assert!((newton.root - rate).abs() < 1e-8, "newton {} vs {}", newton.root, rate);
        prop_assert!((secant.root - rate).abs() < 1e-8, "secant {} vs {}", secant.root, rate);
        prop_assert!((brent.root - rate).abs() < 1e-8, "brent {} vs {}", brent.root, rate);
    }
}
