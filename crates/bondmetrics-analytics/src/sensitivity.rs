//! How valuation and risk move as yield or coupon vary.
//!
//! - [`yield_sweep`]: one bond repriced across a set of yields
//! - [`coupon_sweep`]: bonds that differ only in coupon, valued at one yield
//! - [`shift_table`]: actual price change for yield shocks against the
//!   duration and duration-plus-convexity estimates
//!
//! With the `parallel` feature the sweeps evaluate their points on the rayon
//! thread pool. Output order always follows input order.

use serde::{Deserialize, Serialize};

use crate::error::BondResult;
use crate::model::{BondModel, BondSnapshot};
use crate::risk::{price_change_from_duration, price_change_with_convexity, BASIS_POINT};
use crate::terms::BondTerms;

/// Price change for one yield shock, measured and estimated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChangeEstimate {
    /// Shock size in basis points.
    pub bp: f64,
    /// Full repricing difference (the model's DV01 at `bp`).
    pub actual: f64,
    /// First-order estimate from modified duration.
    pub duration_estimate: f64,
    /// Second-order estimate adding the convexity term.
    pub convexity_estimate: f64,
}

impl PriceChangeEstimate {
    /// Measures and estimates the price change of `model` for a `bp` shock.
    pub fn for_model(model: &BondModel, bp: f64) -> Self {
        let dy = bp * BASIS_POINT;
        Self {
            bp,
            actual: model.dv01(bp),
            duration_estimate: price_change_from_duration(
                model.modified_duration(),
                model.price(),
                dy,
            ),
            convexity_estimate: price_change_with_convexity(
                model.modified_duration(),
                model.convexity(),
                model.price(),
                dy,
            ),
        }
    }

    /// Duration estimate minus the actual change.
    pub fn duration_error(&self) -> f64 {
        self.duration_estimate - self.actual
    }

    /// Convexity-adjusted estimate minus the actual change.
    pub fn convexity_error(&self) -> f64 {
        self.convexity_estimate - self.actual
    }
}

/// Snapshots of `model` repriced at each of `yields`.
///
/// `model` itself is not modified.
///
/// # Errors
///
/// The first yield outside the discounting domain.
pub fn yield_sweep(model: &BondModel, yields: &[f64]) -> BondResult<Vec<BondSnapshot>> {
    map_points(yields, |&yield_annual| -> BondResult<BondSnapshot> {
        let mut repriced = model.clone();
        repriced.set_yield(yield_annual)?;
        Ok(repriced.snapshot())
    })
    .into_iter()
    .collect()
}

/// Snapshots of `terms` with each of `coupon_rates`, valued at `yield_annual`.
///
/// # Errors
///
/// An invalid coupon rate or an unusable yield.
pub fn coupon_sweep(
    terms: &BondTerms,
    coupon_rates: &[f64],
    yield_annual: f64,
) -> BondResult<Vec<BondSnapshot>> {
    map_points(coupon_rates, |&coupon_rate| -> BondResult<BondSnapshot> {
        let variant = terms.with_coupon_rate(coupon_rate)?;
        Ok(BondModel::from_yield(variant, yield_annual)?.snapshot())
    })
    .into_iter()
    .collect()
}

/// Price change estimates for each shock in `shifts_bp`.
pub fn shift_table(model: &BondModel, shifts_bp: &[f64]) -> Vec<PriceChangeEstimate> {
    map_points(shifts_bp, |&bp| model.estimate_price_change(bp))
}

#[cfg(feature = "parallel")]
fn map_points<T, R, F>(points: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    use rayon::prelude::*;

    points.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_points<T, R, F>(points: &[T], f: F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    points.iter().map(f).collect()
}
