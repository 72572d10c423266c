//! # Bondmetrics Analytics
//!
//! Valuation and risk for a level-coupon bond at a flat yield:
//! - **Pricing**: present value of coupons and redemption
//! - **Yields**: yield-to-maturity from price (Newton or secant, Brent fallback)
//! - **Risk**: Macaulay and modified duration, convexity, DV01
//! - **Sensitivity**: yield and coupon sweeps, shock tables
//!
//! Periods are of equal length and `floor(maturity * periods_per_year)` of
//! them are paid; there are no calendars, day counts or curves.
//!
//! ## Usage
//!
//! ```rust
//! use bondmetrics_analytics::prelude::*;
//!
//! let bond = BondModel::builder()
//!     .coupon_rate(0.09)
//!     .par(100.0)
//!     .maturity(5.0)
//!     .yield_annual(0.09)
//!     .build()
//!     .unwrap();
//!
//! assert!((bond.price() - 100.0).abs() < 1e-9);
//! assert!((bond.macaulay_duration() - 4.1344).abs() < 1e-4);
//!
//! let up = bond.dv01(1.0);
//! let down = bond.dv01(-1.0);
//! assert!(up < 0.0 && down > -up);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod model;
pub mod pricing;
pub mod risk;
pub mod sensitivity;
pub mod shared;
pub mod terms;
pub mod yields;

pub use error::{BondError, BondResult};
pub use model::{BondMetrics, BondModel, BondModelBuilder, BondSnapshot};
pub use shared::SharedBondModel;
pub use terms::BondTerms;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondError, BondResult};
    pub use crate::model::{BondMetrics, BondModel, BondModelBuilder, BondSnapshot};
    pub use crate::pricing::{price_derivative, price_from_yield};
    pub use crate::risk::{
        convexity, dv01, macaulay_duration, modified_from_macaulay, price_change_from_duration,
        price_change_with_convexity, BASIS_POINT, DEFAULT_BUMP_BP,
    };
    pub use crate::sensitivity::{coupon_sweep, shift_table, yield_sweep, PriceChangeEstimate};
    pub use crate::shared::SharedBondModel;
    pub use crate::terms::{BondTerms, DEFAULT_PERIODS_PER_YEAR};
    pub use crate::yields::{
        zero_coupon_yield, YieldMethod, YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS,
    };
}
