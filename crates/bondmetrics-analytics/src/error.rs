//! Error types for bond valuation.

use bondmetrics_math::MathError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors raised while building or repricing a bond model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Bond terms or construction inputs are invalid.
    #[error("Invalid bond configuration: {reason}")]
    Configuration {
        /// Description of what's invalid.
        reason: String,
    },

    /// A required construction input was not supplied.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: &'static str,
    },

    /// Yield-from-price root finding did not converge.
    #[error("Yield solver failed to converge after {iterations} iterations: {reason}")]
    Convergence {
        /// Number of iterations attempted.
        iterations: u32,
        /// Reason for failure.
        reason: String,
    },

    /// A yield or price lies outside the range where discounting is defined.
    #[error("Numeric domain error: {reason}")]
    NumericDomain {
        /// Description of the violation.
        reason: String,
    },
}

impl BondError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates a convergence error.
    #[must_use]
    pub fn convergence(iterations: u32, reason: impl Into<String>) -> Self {
        Self::Convergence {
            iterations,
            reason: reason.into(),
        }
    }

    /// Creates a numeric domain error.
    #[must_use]
    pub fn numeric_domain(reason: impl Into<String>) -> Self {
        Self::NumericDomain {
            reason: reason.into(),
        }
    }

    /// True for every failure raised while validating construction inputs.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::MissingField { .. })
    }

    /// True when the yield solver gave up.
    #[must_use]
    pub fn is_convergence(&self) -> bool {
        matches!(self, Self::Convergence { .. })
    }
}

impl From<MathError> for BondError {
    fn from(err: MathError) -> Self {
        Self::Convergence {
            iterations: err.iterations(),
            reason: err.to_string(),
        }
    }
}
