//! A [`BondModel`] shared between threads.
//!
//! `set_yield` recomputes several figures, so readers on other threads must
//! not observe the model halfway through an update. [`SharedBondModel`] holds
//! the model behind a read-write lock: updates take the write lock for the
//! whole recompute, and every read method copies what it needs under a single
//! read lock.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::BondResult;
use crate::model::{BondMetrics, BondModel, BondSnapshot};
use crate::sensitivity::PriceChangeEstimate;

/// Cloneable, thread-safe handle to one bond model.
#[derive(Debug, Clone)]
pub struct SharedBondModel {
    inner: Arc<RwLock<BondModel>>,
}

impl SharedBondModel {
    /// Wraps a model.
    pub fn new(model: BondModel) -> Self {
        Self {
            inner: Arc::new(RwLock::new(model)),
        }
    }

    /// Moves the model to a new yield under the write lock.
    ///
    /// # Errors
    ///
    /// Propagates [`BondModel::set_yield`] failures; the model is unchanged.
    pub fn set_yield(&self, yield_annual: f64) -> BondResult<()> {
        self.inner.write().set_yield(yield_annual)
    }

    /// Consistent copy of all metrics.
    pub fn metrics(&self) -> BondMetrics {
        self.inner.read().metrics()
    }

    /// Consistent copy of terms and metrics.
    pub fn snapshot(&self) -> BondSnapshot {
        self.inner.read().snapshot()
    }

    /// DV01 against the yield and price current at the time of the call.
    pub fn dv01(&self, bp: f64) -> f64 {
        self.inner.read().dv01(bp)
    }

    /// Price change estimate against the current valuation.
    pub fn estimate_price_change(&self, bp: f64) -> PriceChangeEstimate {
        self.inner.read().estimate_price_change(bp)
    }

    /// Runs `f` with shared access, for reading several values at once.
    pub fn with_model<R>(&self, f: impl FnOnce(&BondModel) -> R) -> R {
        f(&self.inner.read())
    }

    /// Clones the current model out of the handle.
    pub fn to_model(&self) -> BondModel {
        self.inner.read().clone()
    }
}

impl From<BondModel> for SharedBondModel {
    fn from(model: BondModel) -> Self {
        Self::new(model)
    }
}
