//! The bond valuation model.
//!
//! A [`BondModel`] couples fixed [`BondTerms`] with one consistent valuation:
//! a yield, the price it implies, and the risk metrics at that yield. The
//! valuation is driven either by a yield or by a market price (solved for
//! yield at construction). After construction the only mutation is
//! [`BondModel::set_yield`], which recomputes every derived figure before
//! replacing the old ones.
//!
//! # Example
//!
//! ```rust
//! use bondmetrics_analytics::BondModel;
//!
//! let mut bond = BondModel::builder()
//!     .coupon_rate(0.06)
//!     .par(100.0)
//!     .maturity(25.0)
//!     .price(70.357)
//!     .build()
//!     .unwrap();
//!
//! assert!((bond.yield_annual() - 0.09).abs() < 1e-4);
//!
//! bond.set_yield(0.10).unwrap();
//! assert!(bond.price() < 70.357);
//! assert!(bond.dv01(1.0) < 0.0);
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};
use crate::pricing::price_from_yield;
use crate::risk::{self, DEFAULT_BUMP_BP};
use crate::sensitivity::PriceChangeEstimate;
use crate::terms::{BondTerms, DEFAULT_PERIODS_PER_YEAR};
use crate::yields::{YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS};

/// Valuation figures that always describe the same yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondMetrics {
    /// Annual yield (decimal).
    pub yield_annual: f64,
    /// Present value of all cash flows at `yield_annual`.
    pub price: f64,
    /// Macaulay duration in years.
    pub macaulay_duration: f64,
    /// Modified duration.
    pub modified_duration: f64,
    /// Convexity in years squared.
    pub convexity: f64,
}

impl BondMetrics {
    /// Values `terms` at `yield_annual`.
    ///
    /// # Errors
    ///
    /// [`BondError::NumericDomain`] if the yield cannot be used for discounting
    /// or the resulting price is not a positive finite number.
    pub fn at_yield(terms: &BondTerms, yield_annual: f64) -> BondResult<Self> {
        if !terms.in_domain(yield_annual) {
            return Err(BondError::numeric_domain(format!(
                "yield {yield_annual} gives a non-positive discount base at {} periods per year",
                terms.periods_per_year
            )));
        }

        let price = price_from_yield(terms, yield_annual);
        if !price.is_finite() || price <= 0.0 {
            return Err(BondError::numeric_domain(format!(
                "yield {yield_annual} produces unusable price {price}"
            )));
        }

        let macaulay_duration = risk::macaulay_duration(terms, yield_annual, price);
        let modified_duration =
            risk::modified_from_macaulay(macaulay_duration, yield_annual, terms.periods_per_year);
        let convexity = risk::convexity(terms, yield_annual, price);

        Ok(Self {
            yield_annual,
            price,
            macaulay_duration,
            modified_duration,
            convexity,
        })
    }
}

/// Serializable view of a model: its terms, derived cash flows and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondSnapshot {
    /// Fixed bond terms.
    pub terms: BondTerms,
    /// Whole coupon periods to redemption.
    pub total_periods: u32,
    /// Coupon paid each period.
    pub coupon_payment: f64,
    /// Valuation at the model's current yield.
    pub metrics: BondMetrics,
}

/// Bond valuation model.
#[derive(Debug, Clone, PartialEq)]
pub struct BondModel {
    terms: BondTerms,
    initial_guess: f64,
    metrics: BondMetrics,
}

impl BondModel {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> BondModelBuilder {
        BondModelBuilder::new()
    }

    /// Builds a model driven by a yield.
    pub fn from_yield(terms: BondTerms, yield_annual: f64) -> BondResult<Self> {
        BondModelBuilder::new()
            .terms(terms)
            .yield_annual(yield_annual)
            .build()
    }

    /// Builds a model driven by a market price, solving for the yield.
    pub fn from_price(terms: BondTerms, price: f64) -> BondResult<Self> {
        BondModelBuilder::new().terms(terms).price(price).build()
    }

    /// Fixed bond terms.
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Annual coupon rate (decimal).
    pub fn coupon_rate(&self) -> f64 {
        self.terms.coupon_rate
    }

    /// Face and redemption value.
    pub fn par(&self) -> f64 {
        self.terms.par
    }

    /// Years to redemption.
    pub fn maturity(&self) -> f64 {
        self.terms.maturity
    }

    /// Coupon payments per year.
    pub fn periods_per_year(&self) -> u32 {
        self.terms.periods_per_year
    }

    /// Whole coupon periods to redemption.
    pub fn total_periods(&self) -> u32 {
        self.terms.total_periods()
    }

    /// Coupon paid each period.
    pub fn coupon_payment(&self) -> f64 {
        self.terms.coupon_payment()
    }

    /// Seed used when the yield was solved from a price.
    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    /// Current annual yield.
    pub fn yield_annual(&self) -> f64 {
        self.metrics.yield_annual
    }

    /// Price at the current yield.
    pub fn price(&self) -> f64 {
        self.metrics.price
    }

    /// Macaulay duration at the current yield.
    pub fn macaulay_duration(&self) -> f64 {
        self.metrics.macaulay_duration
    }

    /// Modified duration at the current yield.
    pub fn modified_duration(&self) -> f64 {
        self.metrics.modified_duration
    }

    /// Convexity at the current yield.
    pub fn convexity(&self) -> f64 {
        self.metrics.convexity
    }

    /// All metrics at the current yield.
    pub fn metrics(&self) -> BondMetrics {
        self.metrics
    }

    /// Serializable snapshot of the model.
    pub fn snapshot(&self) -> BondSnapshot {
        BondSnapshot {
            terms: self.terms,
            total_periods: self.terms.total_periods(),
            coupon_payment: self.terms.coupon_payment(),
            metrics: self.metrics,
        }
    }

    /// Price at an arbitrary yield. Does not touch the model's state.
    ///
    /// `NaN` when `1 + yield_annual / periods_per_year <= 0`.
    pub fn price_at(&self, yield_annual: f64) -> f64 {
        price_from_yield(&self.terms, yield_annual)
    }

    /// Moves the model to a new yield.
    ///
    /// Price, both durations and convexity are computed first and replace
    /// the old values together; on error the model is left unchanged.
    ///
    /// # Errors
    ///
    /// [`BondError::NumericDomain`] if the yield cannot be used for discounting.
    pub fn set_yield(&mut self, yield_annual: f64) -> BondResult<()> {
        let metrics = BondMetrics::at_yield(&self.terms, yield_annual)?;
        trace!(
            "yield {} -> {yield_annual}, price {} -> {}",
            self.metrics.yield_annual,
            self.metrics.price,
            metrics.price
        );
        self.metrics = metrics;
        Ok(())
    }

    /// Price change for a yield bump of `bp` basis points.
    ///
    /// `bumped_price - price`, computed without mutating the model.
    ///
    /// `NaN` when the bumped yield leaves the discounting domain, i.e. when
    /// `1 + (yield + bp / 10_000) / periods_per_year <= 0`. Only very large
    /// negative bumps can do this.
    pub fn dv01(&self, bp: f64) -> f64 {
        risk::dv01(&self.terms, self.metrics.yield_annual, self.metrics.price, bp)
    }

    /// [`dv01`](Self::dv01) for a one basis point rise.
    pub fn dv01_1bp(&self) -> f64 {
        self.dv01(DEFAULT_BUMP_BP)
    }

    /// Actual price change for a `bp` bump next to its duration and
    /// duration-plus-convexity estimates.
    pub fn estimate_price_change(&self, bp: f64) -> PriceChangeEstimate {
        PriceChangeEstimate::for_model(self, bp)
    }
}

/// Builder for [`BondModel`].
///
/// `coupon_rate`, `par` and `maturity` are required, as is one of
/// `yield_annual` or `price`. When both are set the yield wins and the price
/// is recomputed from it.
#[derive(Debug, Clone, Default)]
pub struct BondModelBuilder {
    coupon_rate: Option<f64>,
    par: Option<f64>,
    maturity: Option<f64>,
    periods_per_year: Option<u32>,
    yield_annual: Option<f64>,
    price: Option<f64>,
    initial_guess: Option<f64>,
    solver: Option<YieldSolver>,
}

impl BondModelBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all four bond terms at once.
    #[must_use]
    pub fn terms(mut self, terms: BondTerms) -> Self {
        self.coupon_rate = Some(terms.coupon_rate);
        self.par = Some(terms.par);
        self.maturity = Some(terms.maturity);
        self.periods_per_year = Some(terms.periods_per_year);
        self
    }

    /// Sets the annual coupon rate as a decimal (0.05 for 5%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the face and redemption value.
    #[must_use]
    pub fn par(mut self, par: f64) -> Self {
        self.par = Some(par);
        self
    }

    /// Sets years to redemption.
    #[must_use]
    pub fn maturity(mut self, years: f64) -> Self {
        self.maturity = Some(years);
        self
    }

    /// Sets coupon payments per year (default: 2).
    #[must_use]
    pub fn periods_per_year(mut self, periods: u32) -> Self {
        self.periods_per_year = Some(periods);
        self
    }

    /// Drives the valuation from an annual yield.
    #[must_use]
    pub fn yield_annual(mut self, yield_annual: f64) -> Self {
        self.yield_annual = Some(yield_annual);
        self
    }

    /// Drives the valuation from a market price.
    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the yield solver seed (default: 0.05).
    #[must_use]
    pub fn initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = Some(guess);
        self
    }

    /// Replaces the default yield solver.
    #[must_use]
    pub fn solver(mut self, solver: YieldSolver) -> Self {
        self.solver = Some(solver);
        self
    }

    /// Validates the inputs and values the bond.
    ///
    /// # Errors
    ///
    /// - [`BondError::MissingField`] if a required term is absent
    /// - [`BondError::Configuration`] if the terms are invalid, neither a yield
    ///   nor a price was given, or the initial guess is unusable
    /// - [`BondError::NumericDomain`] for an unusable yield or price
    /// - [`BondError::Convergence`] if the yield cannot be solved from the price
    pub fn build(self) -> BondResult<BondModel> {
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;
        let par = self.par.ok_or_else(|| BondError::missing_field("par"))?;
        let maturity = self
            .maturity
            .ok_or_else(|| BondError::missing_field("maturity"))?;
        let periods_per_year = self.periods_per_year.unwrap_or(DEFAULT_PERIODS_PER_YEAR);
        let terms = BondTerms::new(coupon_rate, par, maturity, periods_per_year)?;

        let initial_guess = self.initial_guess.unwrap_or(DEFAULT_INITIAL_GUESS);
        if !terms.in_domain(initial_guess) {
            return Err(BondError::configuration(format!(
                "initial guess {initial_guess} is outside the discounting domain"
            )));
        }

        let yield_annual = match (self.yield_annual, self.price) {
            (Some(yield_annual), price) => {
                if let Some(price) = price {
                    debug!(
                        "both yield and price supplied; price {price} is recomputed from yield {yield_annual}"
                    );
                }
                yield_annual
            }
            (None, Some(price)) => {
                let solver = self.solver.unwrap_or_default();
                let YieldResult {
                    yield_value,
                    iterations,
                    ..
                } = solver.solve(&terms, price, initial_guess)?;
                debug!("solved yield {yield_value} from price {price} in {iterations} iterations");
                yield_value
            }
            (None, None) => {
                return Err(BondError::configuration(
                    "either yield_annual or price must be supplied",
                ));
            }
        };

        let metrics = BondMetrics::at_yield(&terms, yield_annual)?;
        Ok(BondModel {
            terms,
            initial_guess,
            metrics,
        })
    }
}
