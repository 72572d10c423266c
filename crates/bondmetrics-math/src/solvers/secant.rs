//! Secant root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Secant root-finding algorithm.
///
/// Replaces the derivative in Newton's update with the slope through the two
/// most recent iterates, so only `f` is needed. Convergence order is the
/// golden ratio (~1.618) near a simple root.
///
/// `x0` and `x1` must differ. A non-finite `f` at any trial point ends the
/// search with [`MathError::DomainViolation`].
///
/// # Example
///
/// ```rust
/// use bondmetrics_math::solvers::{secant, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    if (x1 - x0).abs() < f64::EPSILON {
        return Err(MathError::invalid_input(
            "secant seeds must be distinct points",
        ));
    }

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev);
    if !f_prev.is_finite() {
        return Err(MathError::domain_violation(x_prev, 0));
    }
    let mut f_curr = f(x_curr);

    for iteration in 0..config.max_iterations {
        if !f_curr.is_finite() {
            return Err(MathError::domain_violation(x_curr, iteration));
        }

        if f_curr.abs() < config.tolerance {
            debug!("secant converged at x = {x_curr} in {iteration} iterations");
            return Ok(SolverResult {
                root: x_curr,
                iterations: iteration,
                residual: f_curr,
            });
        }

        let denom = f_curr - f_prev;
        if denom.abs() < 1e-15 {
            return Err(MathError::DivisionByZero { value: denom });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        trace!("secant iteration {iteration}: x = {x_next}, f = {f_curr:.3e}");

        if (x_next - x_curr).abs() < config.tolerance {
            let f_next = f(x_next);
            if !f_next.is_finite() {
                return Err(MathError::domain_violation(x_next, iteration + 1));
            }
            debug!("secant converged at x = {x_next} in {} iterations", iteration + 1);
            return Ok(SolverResult {
                root: x_next,
                iterations: iteration + 1,
                residual: f_next,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr);
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f_curr.abs(),
    ))
}
