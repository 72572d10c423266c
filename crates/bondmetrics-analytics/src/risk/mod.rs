//! Risk metrics for a level-coupon bond at a flat yield.
//!
//! - **Duration**: Macaulay and modified
//! - **Convexity**: discrete second-order measure in years squared
//! - **DV01**: literal price change for a yield bump in basis points
//!
//! All kernels take the bond's already computed price so that a model can
//! evaluate the whole set against one consistent valuation.

pub mod convexity;
pub mod duration;
pub mod dv01;

pub use convexity::{convexity, price_change_with_convexity};
pub use duration::{macaulay_duration, modified_from_macaulay, price_change_from_duration};
pub use dv01::{dv01, BASIS_POINT, DEFAULT_BUMP_BP};
