//! Brent's root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Keeps a bracket `[b, c]` with `f(b)` and `f(c)` of opposite sign and
/// chooses between inverse quadratic interpolation, the secant step, and
/// bisection so that the bracket always shrinks. Requires `f(a) * f(b) <= 0`
/// and finite values at both endpoints.
///
/// # Example
///
/// ```rust
/// use bondmetrics_math::solvers::{brent, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
#[allow(clippy::float_cmp)]
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    if !fa.is_finite() {
        return Err(MathError::domain_violation(a, 0));
    }
    if !fb.is_finite() {
        return Err(MathError::domain_violation(b, 0));
    }
    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        // Re-establish the bracket [b, c] around the root.
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        // b is always the best estimate.
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.tolerance;
        let half_width = 0.5 * (c - b);

        if half_width.abs() <= tol || fb.abs() < config.tolerance {
            debug!("brent converged at x = {b} in {iteration} iterations");
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * half_width * s, 1.0 - s)
            } else {
                let q0 = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * half_width * q0 * (q0 - r) - (b - a) * (r - 1.0)),
                    (q0 - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let interpolation_limit = 3.0 * half_width * q - (tol * q).abs();
            let previous_step_limit = (e * q).abs();
            if 2.0 * p < interpolation_limit.min(previous_step_limit) {
                e = d;
                d = p / q;
            } else {
                d = half_width;
                e = d;
            }
        } else {
            d = half_width;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol {
            b += d;
        } else {
            b += tol.copysign(half_width);
        }
        fb = f(b);
        trace!("brent iteration {iteration}: x = {b}, f = {fb:.3e}");

        if !fb.is_finite() {
            return Err(MathError::domain_violation(b, iteration + 1));
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
    ))
}
