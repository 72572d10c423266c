//! Fixed contractual terms of a level-coupon bond.

use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};

/// Default number of coupon payments per year (semi-annual).
pub const DEFAULT_PERIODS_PER_YEAR: u32 = 2;

/// Terms that never change over the life of a [`BondModel`](crate::BondModel).
///
/// All periods are treated as equal length; the discount rate is flat.
///
/// Values obtained through `Deserialize` are not validated until they are
/// passed to [`BondTerms::validate`] or to the model builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Annual coupon rate as a decimal (0.05 for 5%). Zero for a zero-coupon bond.
    pub coupon_rate: f64,
    /// Face and redemption value.
    pub par: f64,
    /// Years to redemption.
    pub maturity: f64,
    /// Coupon payments per year.
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,
}

fn default_periods_per_year() -> u32 {
    DEFAULT_PERIODS_PER_YEAR
}

impl BondTerms {
    /// Creates validated bond terms.
    pub fn new(
        coupon_rate: f64,
        par: f64,
        maturity: f64,
        periods_per_year: u32,
    ) -> BondResult<Self> {
        let terms = Self {
            coupon_rate,
            par,
            maturity,
            periods_per_year,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Checks every invariant the pricing kernels rely on.
    pub fn validate(&self) -> BondResult<()> {
        if !self.coupon_rate.is_finite() || self.coupon_rate < 0.0 {
            return Err(BondError::configuration(format!(
                "coupon_rate must be a finite non-negative decimal, got {}",
                self.coupon_rate
            )));
        }
        if !self.par.is_finite() || self.par <= 0.0 {
            return Err(BondError::configuration(format!(
                "par must be positive, got {}",
                self.par
            )));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(BondError::configuration(format!(
                "maturity must be positive, got {}",
                self.maturity
            )));
        }
        if self.periods_per_year == 0 {
            return Err(BondError::configuration(
                "periods_per_year must be a positive integer",
            ));
        }

        let periods = (self.maturity * f64::from(self.periods_per_year)).floor();
        if periods < 1.0 {
            return Err(BondError::configuration(format!(
                "maturity {} is shorter than one coupon period at {} payments per year",
                self.maturity, self.periods_per_year
            )));
        }
        if periods > f64::from(i32::MAX) {
            return Err(BondError::configuration(format!(
                "{periods} coupon periods exceeds the supported maximum"
            )));
        }
        Ok(())
    }

    /// Number of whole coupon periods, `floor(maturity * periods_per_year)`.
    ///
    /// A fractional final period is dropped, not rounded.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn total_periods(&self) -> u32 {
        (self.maturity * f64::from(self.periods_per_year)).floor() as u32
    }

    /// Coupon cash flow paid each period.
    pub fn coupon_payment(&self) -> f64 {
        self.coupon_rate * self.par / f64::from(self.periods_per_year)
    }

    /// True when the bond pays no coupons.
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon_rate == 0.0
    }

    /// Per-period growth factor `1 + y / periods_per_year`.
    pub fn discount_base(&self, yield_annual: f64) -> f64 {
        1.0 + yield_annual / f64::from(self.periods_per_year)
    }

    /// True when `yield_annual` can be used for discounting.
    pub fn in_domain(&self, yield_annual: f64) -> bool {
        yield_annual.is_finite() && self.discount_base(yield_annual) > 0.0
    }

    /// Same terms with a different coupon rate.
    pub fn with_coupon_rate(&self, coupon_rate: f64) -> BondResult<Self> {
        Self::new(coupon_rate, self.par, self.maturity, self.periods_per_year)
    }

    /// Sum of all undiscounted cash flows (coupons plus redemption).
    pub fn undiscounted_cash_flow(&self) -> f64 {
        self.coupon_payment() * f64::from(self.total_periods()) + self.par
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_quantities() {
        let terms = BondTerms::new(0.06, 100.0, 25.0, 2).unwrap();

        assert_eq!(terms.total_periods(), 50);
        assert_relative_eq!(terms.coupon_payment(), 3.0);
        assert_relative_eq!(terms.undiscounted_cash_flow(), 250.0);
        assert!(!terms.is_zero_coupon());
    }

    #[test]
    fn test_fractional_period_truncated() {
        let terms = BondTerms::new(0.05, 100.0, 5.3, 2).unwrap();
        assert_eq!(terms.total_periods(), 10);

        let terms = BondTerms::new(0.05, 100.0, 2.99, 4).unwrap();
        assert_eq!(terms.total_periods(), 11);
    }

    #[test]
    fn test_rejects_invalid_terms() {
        assert!(BondTerms::new(-0.01, 100.0, 5.0, 2).unwrap_err().is_configuration());
        assert!(BondTerms::new(0.05, 0.0, 5.0, 2).unwrap_err().is_configuration());
        assert!(BondTerms::new(0.05, 100.0, -1.0, 2).unwrap_err().is_configuration());
        assert!(BondTerms::new(0.05, 100.0, 5.0, 0).unwrap_err().is_configuration());
        assert!(BondTerms::new(f64::NAN, 100.0, 5.0, 2).unwrap_err().is_configuration());
    }

    #[test]
    fn test_rejects_sub_period_maturity() {
        let err = BondTerms::new(0.05, 100.0, 0.25, 2).unwrap_err();
        assert!(err.to_string().contains("shorter than one coupon period"));
    }

    #[test]
    fn test_domain() {
        let terms = BondTerms::new(0.05, 100.0, 5.0, 2).unwrap();

        assert!(terms.in_domain(0.05));
        assert!(terms.in_domain(-1.9));
        assert!(!terms.in_domain(-2.0));
        assert!(!terms.in_domain(f64::INFINITY));
    }

    #[test]
    fn test_deserialize_defaults_frequency() {
        let terms: BondTerms =
            serde_json::from_str(r#"{"coupon_rate":0.09,"par":100.0,"maturity":5.0}"#).unwrap();

        assert_eq!(terms.periods_per_year, DEFAULT_PERIODS_PER_YEAR);
        assert!(terms.validate().is_ok());
    }
}
