//! # Domain Types
//!
//! Rate and mode types shared by the calculators.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    TaxRate      │   │  DiscountRate   │   │    TaxMode      │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  fraction (f64) │   │  percent (f64)  │   │  Inclusive      │        │
//! │  │  0.10 = 10%     │   │  20.0 = 20%OFF  │   │  Exclusive      │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both rate types validate on construction, so a calculator receiving one
//! never re-checks the range. The selected rate is always passed in as an
//! explicit parameter; the core never reads it from ambient view state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CalcError, CalcResult};

// =============================================================================
// Tax Mode
// =============================================================================

/// Direction of the tax conversion.
///
/// ## Wire Format
/// Serializes as `"inclusive"` / `"exclusive"`, the values the page's radio
/// buttons submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TaxMode {
    /// The input amount already contains tax; compute the tax-exclusive price.
    Inclusive,
    /// The input amount is before tax; compute the tax-inclusive price.
    Exclusive,
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Consumption tax rate, stored as a fraction in (0, 1).
///
/// ## Example
/// ```rust
/// use kakaku_core::types::TaxRate;
///
/// let rate = TaxRate::from_percent(10.0).unwrap();
/// assert_eq!(rate.fraction(), 0.10);
/// assert_eq!(rate.percent_display(), "10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct TaxRate(f64);

impl TaxRate {
    /// Creates a tax rate from a percent value in (0, 100) exclusive.
    ///
    /// Rejects zero, negative, non-finite, and ≥ 100 values; the page never
    /// offers those, so reaching the error means the rate selection is broken.
    pub fn from_percent(percent: f64) -> CalcResult<Self> {
        if percent.is_finite() && percent > 0.0 && percent < 100.0 {
            Ok(TaxRate(percent / 100.0))
        } else {
            Err(CalcError::TaxRateUnavailable)
        }
    }

    /// Returns the rate as a fraction (10% → 0.10).
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a percent (0.10 → 10.0).
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Percent rendered for breakdown lines: integer digits only (`"10"`).
    pub fn percent_display(&self) -> String {
        format!("{:.0}", self.percent())
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate, stored as a percent in (0, 100) exclusive.
///
/// ## Example
/// ```rust
/// use kakaku_core::types::DiscountRate;
///
/// let rate = DiscountRate::parse("12.5").unwrap();
/// assert_eq!(rate.fraction(), 0.125);
/// assert_eq!(rate.percent_display(), "12.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// Parses a raw rate-input string.
    ///
    /// Non-numeric input maps to the same out-of-range error as 0 or 100,
    /// so the page shows one message for every bad rate.
    pub fn parse(raw: &str) -> CalcResult<Self> {
        let percent: f64 = raw
            .trim()
            .parse()
            .map_err(|_| CalcError::DiscountRateOutOfRange)?;
        Self::from_percent(percent)
    }

    /// Creates a discount rate from a percent value in (0, 100) exclusive.
    pub fn from_percent(percent: f64) -> CalcResult<Self> {
        if percent.is_finite() && percent > 0.0 && percent < 100.0 {
            Ok(DiscountRate(percent))
        } else {
            Err(CalcError::DiscountRateOutOfRange)
        }
    }

    /// Returns the rate as a percent (20%OFF → 20.0).
    #[inline]
    pub const fn percent(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a fraction (20%OFF → 0.20).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// Percent rendered for breakdown lines: one decimal place with a
    /// trailing `.0` stripped (`"20"`, `"12.5"`).
    pub fn percent_display(&self) -> String {
        let fixed = format!("{:.1}", self.0);
        match fixed.strip_suffix(".0") {
            Some(trimmed) => trimmed.to_string(),
            None => fixed,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_accepts_page_presets() {
        assert_eq!(TaxRate::from_percent(10.0).unwrap().fraction(), 0.10);
        assert_eq!(TaxRate::from_percent(8.0).unwrap().fraction(), 0.08);
    }

    #[test]
    fn test_tax_rate_rejects_out_of_range() {
        assert_eq!(
            TaxRate::from_percent(0.0),
            Err(CalcError::TaxRateUnavailable)
        );
        assert_eq!(
            TaxRate::from_percent(-5.0),
            Err(CalcError::TaxRateUnavailable)
        );
        assert_eq!(
            TaxRate::from_percent(100.0),
            Err(CalcError::TaxRateUnavailable)
        );
        assert_eq!(
            TaxRate::from_percent(f64::NAN),
            Err(CalcError::TaxRateUnavailable)
        );
    }

    #[test]
    fn test_discount_rate_range() {
        assert!(DiscountRate::from_percent(20.0).is_ok());
        assert!(DiscountRate::from_percent(0.1).is_ok());
        assert!(DiscountRate::from_percent(99.9).is_ok());

        assert_eq!(
            DiscountRate::from_percent(0.0),
            Err(CalcError::DiscountRateOutOfRange)
        );
        assert_eq!(
            DiscountRate::from_percent(100.0),
            Err(CalcError::DiscountRateOutOfRange)
        );
        assert_eq!(
            DiscountRate::from_percent(-5.0),
            Err(CalcError::DiscountRateOutOfRange)
        );
    }

    #[test]
    fn test_discount_rate_parse() {
        assert_eq!(DiscountRate::parse("20").unwrap().percent(), 20.0);
        assert_eq!(DiscountRate::parse(" 12.5 ").unwrap().percent(), 12.5);

        assert_eq!(
            DiscountRate::parse("abc"),
            Err(CalcError::DiscountRateOutOfRange)
        );
        assert_eq!(
            DiscountRate::parse(""),
            Err(CalcError::DiscountRateOutOfRange)
        );
        assert_eq!(
            DiscountRate::parse("0"),
            Err(CalcError::DiscountRateOutOfRange)
        );
        assert_eq!(
            DiscountRate::parse("100"),
            Err(CalcError::DiscountRateOutOfRange)
        );
    }

    #[test]
    fn test_percent_display() {
        assert_eq!(TaxRate::from_percent(10.0).unwrap().percent_display(), "10");
        assert_eq!(TaxRate::from_percent(8.0).unwrap().percent_display(), "8");

        assert_eq!(
            DiscountRate::from_percent(20.0).unwrap().percent_display(),
            "20"
        );
        assert_eq!(
            DiscountRate::from_percent(12.5).unwrap().percent_display(),
            "12.5"
        );
    }

    #[test]
    fn test_tax_mode_wire_values() {
        assert_eq!(
            serde_json::to_string(&TaxMode::Inclusive).unwrap(),
            "\"inclusive\""
        );
        assert_eq!(
            serde_json::to_string(&TaxMode::Exclusive).unwrap(),
            "\"exclusive\""
        );
    }
}
