//! # Bondmetrics Math
//!
//! Numerical root finders used by the Bondmetrics valuation library.
//!
//! This crate provides:
//!
//! - **Newton-Raphson**: quadratic convergence given an analytic derivative
//! - **Secant**: derivative-free, seeded with two nearby points
//! - **Brent**: bracketing method, guaranteed to converge on a valid bracket
//!
//! Every solver runs a bounded number of iterations and reports failure as a
//! [`MathError`] instead of looping or returning a non-finite root. Objective
//! functions signal "outside my domain" by returning a non-finite value, which
//! the solvers surface as [`MathError::DomainViolation`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        brent, newton_raphson, secant, SolverConfig, SolverResult, DEFAULT_MAX_ITERATIONS,
        DEFAULT_TOLERANCE,
    };
}

pub use error::{MathError, MathResult};
