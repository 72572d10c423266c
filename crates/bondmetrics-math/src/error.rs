//! Error types for root finding.

use thiserror::Error;

/// A specialized Result type for solver operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while searching for a root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The iteration budget ran out before the tolerance was met.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Endpoints of a bracket do not straddle a root.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// A derivative or secant slope vanished.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
    },

    /// The objective was evaluated outside its domain (returned NaN or infinity).
    #[error("Objective undefined at trial point x = {x} after {iterations} iterations")]
    DomainViolation {
        /// The trial point that left the domain.
        x: f64,
        /// Iterations completed before the violation.
        iterations: u32,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a domain violation error.
    #[must_use]
    pub fn domain_violation(x: f64, iterations: u32) -> Self {
        Self::DomainViolation { x, iterations }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Iterations spent before the failure, where the variant tracks them.
    pub fn iterations(&self) -> u32 {
        match self {
            Self::ConvergenceFailed { iterations, .. } | Self::DomainViolation { iterations, .. } => {
                *iterations
            }
            _ => 0,
        }
    }
}
