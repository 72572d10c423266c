//! Root-finding algorithms.
//!
//! - [`newton_raphson`]: quadratic convergence when the derivative is known
//! - [`secant`]: derivative-free, superlinear convergence from two seeds
//! - [`brent`]: bracketing method, converges whenever the bracket is valid
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Secant | Fast (superlinear) | May diverge | Two guesses |
//! | Brent | Fast (superlinear) | Guaranteed | Bracket |
//!
//! Objectives return a non-finite value to mark a point outside their
//! domain. Newton and secant stop with [`MathError::DomainViolation`] as soon
//! as a trial point lands there; Brent requires finite values at both
//! bracket endpoints.
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use bondmetrics_math::solvers::{newton_raphson, SolverConfig};
//!
//! // Annual-pay bond: 5% coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let d_price_fn = |y: f64| {
//!     let mut dpv = 0.0;
//!     for t in 1..=5 {
//!         dpv -= f64::from(t) * 5.0 / (1.0 + y).powi(t + 1);
//!     }
//!     dpv -= 5.0 * 100.0 / (1.0 + y).powi(6);
//!     dpv
//! };
//!
//! let result = newton_raphson(price_fn, d_price_fn, 0.05, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05);
//! ```
//!
//! [`MathError::DomainViolation`]: crate::error::MathError::DomainViolation

mod brent;
mod newton;
mod secant;

pub use brent::brent;
pub use newton::newton_raphson;
pub use secant::secant;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence, applied to both the residual and the step.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert_relative_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iterations, 50);
    }

    /// Price of a level-coupon bond with `n` periods at periodic rate `r`.
    fn level_coupon_price(r: f64, coupon: f64, face: f64, n: i32) -> f64 {
        if 1.0 + r <= 0.0 {
            return f64::NAN;
        }
        let mut pv = 0.0;
        for t in 1..=n {
            pv += coupon / (1.0 + r).powi(t);
        }
        pv + face / (1.0 + r).powi(n)
    }

    fn level_coupon_slope(r: f64, coupon: f64, face: f64, n: i32) -> f64 {
        let mut dpv = 0.0;
        for t in 1..=n {
            dpv -= f64::from(t) * coupon / (1.0 + r).powi(t + 1);
        }
        dpv - f64::from(n) * face / (1.0 + r).powi(n + 1)
    }

    #[test]
    fn test_all_solvers_agree_on_ytm() {
        let target = 98.0;
        let f = |r: f64| level_coupon_price(r, 3.0, 100.0, 14) - target;
        let df = |r: f64| level_coupon_slope(r, 3.0, 100.0, 14);
        let config = SolverConfig::default();

        let newton = newton_raphson(f, df, 0.03, &config).unwrap();
        let secant = secant(f, 0.03, 0.0301, &config).unwrap();
        let brent = brent(f, 0.0, 0.10, &config).unwrap();

        assert_relative_eq!(newton.root, brent.root, epsilon = 1e-9);
        assert_relative_eq!(newton.root, secant.root, epsilon = 1e-9);
        assert!(newton.root > 0.03);
    }

    #[test]
    fn test_par_bond_root_is_coupon() {
        let f = |r: f64| level_coupon_price(r, 2.5, 100.0, 20) - 100.0;
        let df = |r: f64| level_coupon_slope(r, 2.5, 100.0, 20);

        let result = newton_raphson(f, df, 0.05, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.025, epsilon = 1e-10);
    }
}
