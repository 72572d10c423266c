//! Yield-to-maturity from price.
//!
//! # Usage
//!
//! ```rust
//! use bondmetrics_analytics::terms::BondTerms;
//! use bondmetrics_analytics::yields::{YieldMethod, YieldSolver};
//!
//! let terms = BondTerms::new(0.06, 100.0, 25.0, 2).unwrap();
//! let solver = YieldSolver::new().with_method(YieldMethod::Secant);
//!
//! let result = solver.solve(&terms, 70.357, 0.05).unwrap();
//! assert!((result.yield_value - 0.09).abs() < 1e-4);
//! ```

mod solver;

pub use solver::{
    zero_coupon_yield, YieldMethod, YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS,
    DEFAULT_SEARCH_RANGE, FALLBACK_BRACKETS,
};
