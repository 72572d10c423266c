//! Yield-to-maturity solver.
//!
//! Runs a primary open method (Newton-Raphson with the analytic price
//! derivative, or secant) from the caller's initial guess. If that fails,
//! Brent's method is tried on a sequence of widening brackets. Zero-coupon
//! bonds skip iteration and use the closed form.

use bondmetrics_math::solvers::{brent, newton_raphson, secant, SolverConfig, SolverResult};
use bondmetrics_math::MathError;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};
use crate::pricing::{price_derivative, price_from_yield};
use crate::terms::BondTerms;

/// Seed for the primary method when the caller does not supply one.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.05;

/// Yields outside this range are never returned.
///
/// Only the low side is bounded: a price far above the undiscounted cash
/// flow implies a yield approaching `-m`.
pub const DEFAULT_SEARCH_RANGE: (f64, f64) = (-0.5, f64::INFINITY);

/// Brackets tried by the Brent fallback after the one centred on the guess.
pub const FALLBACK_BRACKETS: [(f64, f64); 4] =
    [(-0.1, 0.5), (-0.2, 1.0), (-0.5, 2.0), (-0.5, 10.0)];

/// Distance between the two secant seeds.
const SECANT_OFFSET: f64 = 1e-4;

/// Half-width of the first fallback bracket, centred on the initial guess.
const GUESS_BRACKET_HALF_WIDTH: f64 = 0.1;

/// Primary iteration used before falling back to Brent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YieldMethod {
    /// Newton-Raphson with the analytic price derivative.
    #[default]
    Newton,
    /// Derivative-free secant method seeded at `guess` and `guess + 1e-4`.
    Secant,
}

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of iterations to converge (zero for the closed form).
    pub iterations: u32,
    /// Final price residual, `price(yield) - target`.
    pub residual: f64,
}

impl From<SolverResult> for YieldResult {
    fn from(result: SolverResult) -> Self {
        Self {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
        }
    }
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
    method: YieldMethod,
    search_range: (f64, f64),
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-10
    /// Default max iterations: 100
    /// Default method: Newton-Raphson
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            method: YieldMethod::Newton,
            search_range: DEFAULT_SEARCH_RANGE,
        }
    }

    /// Sets the primary method.
    #[must_use]
    pub fn with_method(mut self, method: YieldMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations per solver stage.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Restricts the yields the solver may return.
    #[must_use]
    pub fn with_search_range(mut self, lower: f64, upper: f64) -> Self {
        self.search_range = (lower, upper);
        self
    }

    /// Primary method in use.
    pub fn method(&self) -> YieldMethod {
        self.method
    }

    /// Underlying solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the yield that reprices `terms` to `target_price`.
    ///
    /// # Errors
    ///
    /// - [`BondError::NumericDomain`] if `target_price` is not a positive finite number
    /// - [`BondError::Configuration`] if `initial_guess` cannot be used for discounting
    /// - [`BondError::Convergence`] if no stage finds a yield inside the search range
    pub fn solve(
        &self,
        terms: &BondTerms,
        target_price: f64,
        initial_guess: f64,
    ) -> BondResult<YieldResult> {
        if !target_price.is_finite() || target_price <= 0.0 {
            return Err(BondError::numeric_domain(format!(
                "target price must be positive and finite, got {target_price}"
            )));
        }
        if !terms.in_domain(initial_guess) {
            return Err(BondError::configuration(format!(
                "initial guess {initial_guess} is outside the discounting domain"
            )));
        }

        let result = if terms.is_zero_coupon() {
            zero_coupon_yield(terms, target_price)?
        } else {
            self.solve_iteratively(terms, target_price, initial_guess)?
        };

        self.check_range(result, target_price)
    }

    fn solve_iteratively(
        &self,
        terms: &BondTerms,
        target_price: f64,
        initial_guess: f64,
    ) -> BondResult<YieldResult> {
        let objective = |y: f64| price_from_yield(terms, y) - target_price;

        let primary = match self.method {
            YieldMethod::Newton => newton_raphson(
                &objective,
                |y: f64| price_derivative(terms, y),
                initial_guess,
                &self.config,
            ),
            YieldMethod::Secant => secant(
                &objective,
                initial_guess,
                initial_guess + SECANT_OFFSET,
                &self.config,
            ),
        };

        match primary {
            Ok(result) => Ok(result.into()),
            Err(err) => {
                debug!(
                    "{:?} failed for target price {target_price} ({err}), falling back to Brent",
                    self.method
                );
                self.solve_with_brent(&objective, terms, target_price, initial_guess, err)
            }
        }
    }

    /// Brent's method over the guess-centred bracket, then the fixed ones.
    fn solve_with_brent<F>(
        &self,
        objective: F,
        terms: &BondTerms,
        target_price: f64,
        initial_guess: f64,
        primary_err: MathError,
    ) -> BondResult<YieldResult>
    where
        F: Fn(f64) -> f64,
    {
        let mut iterations = primary_err.iterations();
        let mut last_err = primary_err;

        for (a, b) in self.brackets(terms, initial_guess) {
            match brent(&objective, a, b, &self.config) {
                Ok(result) => return Ok(result.into()),
                Err(err) => {
                    trace!("brent bracket ({a}, {b}) rejected: {err}");
                    iterations += err.iterations();
                    last_err = err;
                }
            }
        }

        warn!("no yield reprices the bond to {target_price}");
        Err(BondError::convergence(
            iterations,
            format!(
                "no yield in [{}, {}] reprices the bond to {target_price}: {last_err}",
                self.search_range.0, self.search_range.1
            ),
        ))
    }

    /// Fallback brackets clipped to the search range and the discounting domain.
    fn brackets(&self, terms: &BondTerms, initial_guess: f64) -> Vec<(f64, f64)> {
        let (lower, upper) = self.search_range;
        let centred = (
            initial_guess - GUESS_BRACKET_HALF_WIDTH,
            initial_guess + GUESS_BRACKET_HALF_WIDTH,
        );

        std::iter::once(centred)
            .chain(FALLBACK_BRACKETS)
            .map(|(a, b)| (a.max(lower), b.min(upper)))
            .filter(|&(a, b)| a < b && terms.in_domain(a) && terms.in_domain(b))
            .collect()
    }

    fn check_range(&self, result: YieldResult, target_price: f64) -> BondResult<YieldResult> {
        let (lower, upper) = self.search_range;
        if result.yield_value < lower || result.yield_value > upper {
            return Err(BondError::convergence(
                result.iterations,
                format!(
                    "yield {} implied by price {target_price} lies outside [{lower}, {upper}]",
                    result.yield_value
                ),
            ));
        }
        Ok(result)
    }
}

/// Closed-form yield of a zero-coupon bond,
/// `y = m · ((F / P)^(1/N) - 1)`.
///
/// # Errors
///
/// [`BondError::Configuration`] if the bond pays a coupon.
pub fn zero_coupon_yield(terms: &BondTerms, price: f64) -> BondResult<YieldResult> {
    if !terms.is_zero_coupon() {
        return Err(BondError::configuration(
            "closed-form yield applies to zero-coupon bonds only",
        ));
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(BondError::numeric_domain(format!(
            "price must be positive and finite, got {price}"
        )));
    }

    let m = f64::from(terms.periods_per_year);
    let n = f64::from(terms.total_periods());
    let yield_value = m * ((terms.par / price).powf(1.0 / n) - 1.0);

    Ok(YieldResult {
        yield_value,
        iterations: 0,
        residual: price_from_yield(terms, yield_value) - price,
    })
}
