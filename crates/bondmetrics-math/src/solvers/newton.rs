//! Newton-Raphson root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Derivatives smaller than this are treated as zero.
const MIN_SLOPE: f64 = 1e-15;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)`, stopping when
/// either `|f(x)|` or the step size drops below `config.tolerance`.
///
/// A non-finite `f(x)` or `f'(x)` at any trial point ends the search with
/// [`MathError::DomainViolation`]; the method never steps back into the
/// domain on its own.
///
/// # Example
///
/// ```rust
/// use bondmetrics_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::domain_violation(x, iteration));
        }

        if fx.abs() < config.tolerance {
            debug!("newton converged at x = {x} in {iteration} iterations");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(MathError::domain_violation(x, iteration));
        }
        if dfx.abs() < MIN_SLOPE {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx / dfx;
        x -= step;
        trace!("newton iteration {iteration}: x = {x}, f = {fx:.3e}, step = {step:.3e}");

        if step.abs() < config.tolerance {
            let final_fx = f(x);
            if !final_fx.is_finite() {
                return Err(MathError::domain_violation(x, iteration + 1));
            }
            debug!("newton converged at x = {x} in {} iterations", iteration + 1);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_cube_root() {
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_derivative_error() {
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_domain_violation() {
        // ln(x) - 3 overshoots to negative x from a large guess
        let f = |x: f64| if x > 0.0 { x.ln() - 3.0 } else { f64::NAN };
        let df = |x: f64| 1.0 / x;

        let result = newton_raphson(f, df, 100.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DomainViolation { .. })));
    }

    #[test]
    fn test_iteration_cap() {
        // x^(1/3) makes Newton oscillate with growing amplitude
        let f = |x: f64| x.signum() * x.abs().cbrt();
        let df = |x: f64| x.abs().cbrt() / (3.0 * x.abs());
        let config = SolverConfig::new(1e-12, 10);

        let result = newton_raphson(f, df, 0.1, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 10, .. })
        ));
    }
}
