//! # Calculators
//!
//! The three pure calculations behind the page's tabs: tax conversion,
//! discount pricing, and discount-then-tax pricing.
//!
//! ## Rounding Policy
//! Each named step rounds its own result to whole yen (half away from zero)
//! before the next step consumes it. The final figures can differ by ±1 yen
//! from a single end-to-end rounding; that per-step behavior is the page's
//! fixed business rule and must not be collapsed.
//!
//! ## Usage
//! ```rust
//! use kakaku_core::calculator::convert_tax;
//! use kakaku_core::money::Amount;
//! use kakaku_core::types::{TaxMode, TaxRate};
//!
//! let amount = Amount::new(1100.0).unwrap();
//! let rate = TaxRate::from_percent(10.0).unwrap();
//!
//! let conversion = convert_tax(amount, rate, TaxMode::Inclusive);
//! assert_eq!(conversion.primary.value(), 1000); // tax-exclusive price
//! assert_eq!(conversion.tax.value(), 100);
//! ```

use crate::money::{Amount, Yen};
use crate::types::{DiscountRate, TaxMode, TaxRate};

// =============================================================================
// Tax Conversion
// =============================================================================

/// Result of a tax-inclusive ⇄ tax-exclusive conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxConversion {
    /// The converted price: tax-exclusive in `Inclusive` mode,
    /// tax-inclusive in `Exclusive` mode.
    pub primary: Yen,
    /// The consumption tax portion.
    pub tax: Yen,
}

/// Converts between tax-inclusive and tax-exclusive prices.
///
/// ## Steps
/// ```text
/// Inclusive:  exclusive = round(amount / (1 + rate))
///             tax       = round(amount - exclusive)
/// Exclusive:  tax       = round(amount * rate)
///             inclusive = round(amount + tax)
/// ```
pub fn convert_tax(amount: Amount, rate: TaxRate, mode: TaxMode) -> TaxConversion {
    match mode {
        TaxMode::Inclusive => {
            let exclusive = Yen::round(amount.value() / (1.0 + rate.fraction()));
            let tax = Yen::round(amount.value() - exclusive.as_f64());
            TaxConversion {
                primary: exclusive,
                tax,
            }
        }
        TaxMode::Exclusive => {
            let tax = Yen::round(amount.value() * rate.fraction());
            let inclusive = Yen::round(amount.value() + tax.as_f64());
            TaxConversion {
                primary: inclusive,
                tax,
            }
        }
    }
}

// =============================================================================
// Discount
// =============================================================================

/// Result of applying a percentage discount to an original price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountOutcome {
    /// How much is taken off the original price.
    pub discount_amount: Yen,
    /// The price after the discount.
    pub discounted_price: Yen,
}

/// Applies a percentage discount.
///
/// ## Steps
/// ```text
/// discount_amount  = round(original * percent / 100)
/// discounted_price = round(original - discount_amount)
/// ```
pub fn apply_discount(original: Amount, rate: DiscountRate) -> DiscountOutcome {
    let discount_amount = Yen::round(original.value() * rate.fraction());
    let discounted_price = Yen::round(original.value() - discount_amount.as_f64());
    DiscountOutcome {
        discount_amount,
        discounted_price,
    }
}

// =============================================================================
// Discount + Tax
// =============================================================================

/// Result of discounting a tax-exclusive price and then adding tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTaxOutcome {
    /// How much is taken off the original price.
    pub discount_amount: Yen,
    /// The discounted, still tax-exclusive price.
    pub discounted_exclusive: Yen,
    /// The consumption tax on the discounted price.
    pub tax_amount: Yen,
    /// The final tax-inclusive total.
    pub total_inclusive: Yen,
}

/// Applies a discount, then adds consumption tax to the discounted price.
///
/// The discount step is [`apply_discount`]; the tax step consumes the
/// already-rounded discounted price, matching the exclusive→inclusive
/// direction of [`convert_tax`].
///
/// ## Steps
/// ```text
/// discount_amount      = round(original * percent / 100)
/// discounted_exclusive = round(original - discount_amount)
/// tax_amount           = round(discounted_exclusive * rate)
/// total_inclusive      = round(discounted_exclusive + tax_amount)
/// ```
pub fn apply_discount_then_tax(
    original: Amount,
    discount: DiscountRate,
    tax: TaxRate,
) -> DiscountTaxOutcome {
    let DiscountOutcome {
        discount_amount,
        discounted_price: discounted_exclusive,
    } = apply_discount(original, discount);

    let tax_amount = Yen::round(discounted_exclusive.as_f64() * tax.fraction());
    let total_inclusive = Yen::round(discounted_exclusive.as_f64() + tax_amount.as_f64());

    DiscountTaxOutcome {
        discount_amount,
        discounted_exclusive,
        tax_amount,
        total_inclusive,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(value: f64) -> Amount {
        Amount::new(value).unwrap()
    }

    fn tax(percent: f64) -> TaxRate {
        TaxRate::from_percent(percent).unwrap()
    }

    fn discount(percent: f64) -> DiscountRate {
        DiscountRate::from_percent(percent).unwrap()
    }

    #[test]
    fn test_inclusive_to_exclusive() {
        let conv = convert_tax(amount(1100.0), tax(10.0), TaxMode::Inclusive);
        assert_eq!(conv.primary.value(), 1000);
        assert_eq!(conv.tax.value(), 100);
    }

    #[test]
    fn test_exclusive_to_inclusive() {
        let conv = convert_tax(amount(1000.0), tax(10.0), TaxMode::Exclusive);
        assert_eq!(conv.tax.value(), 100);
        assert_eq!(conv.primary.value(), 1100);
    }

    #[test]
    fn test_reduced_rate_conversion() {
        // 1080 yen at the 8% reduced rate: 1080 / 1.08 = 1000 exactly
        let conv = convert_tax(amount(1080.0), tax(8.0), TaxMode::Inclusive);
        assert_eq!(conv.primary.value(), 1000);
        assert_eq!(conv.tax.value(), 80);
    }

    #[test]
    fn test_inclusive_rounds_each_step() {
        // 1000 / 1.10 = 909.09... → 909; tax = round(1000 - 909) = 91
        let conv = convert_tax(amount(1000.0), tax(10.0), TaxMode::Inclusive);
        assert_eq!(conv.primary.value(), 909);
        assert_eq!(conv.tax.value(), 91);
    }

    #[test]
    fn test_fractional_amount_uses_raw_value() {
        // The unrounded 1234.5 feeds both steps:
        // 1234.5 / 1.10 = 1122.27... → 1122; round(1234.5 - 1122) = round(112.5) = 113
        let conv = convert_tax(amount(1234.5), tax(10.0), TaxMode::Inclusive);
        assert_eq!(conv.primary.value(), 1122);
        assert_eq!(conv.tax.value(), 113);
    }

    #[test]
    fn test_apply_discount() {
        let outcome = apply_discount(amount(1000.0), discount(20.0));
        assert_eq!(outcome.discount_amount.value(), 200);
        assert_eq!(outcome.discounted_price.value(), 800);
    }

    #[test]
    fn test_apply_discount_rounds_discount_first() {
        // 999 * 15% = 149.85 → 150; 999 - 150 = 849
        let outcome = apply_discount(amount(999.0), discount(15.0));
        assert_eq!(outcome.discount_amount.value(), 150);
        assert_eq!(outcome.discounted_price.value(), 849);
    }

    #[test]
    fn test_discount_then_tax() {
        let outcome = apply_discount_then_tax(amount(1000.0), discount(20.0), tax(10.0));
        assert_eq!(outcome.discount_amount.value(), 200);
        assert_eq!(outcome.discounted_exclusive.value(), 800);
        assert_eq!(outcome.tax_amount.value(), 80);
        assert_eq!(outcome.total_inclusive.value(), 880);
    }

    #[test]
    fn test_discount_then_tax_chains_rounded_steps() {
        // 1999 * 33% = 659.67 → 660; 1999 - 660 = 1339
        // 1339 * 8% = 107.12 → 107; 1339 + 107 = 1446
        let outcome = apply_discount_then_tax(amount(1999.0), discount(33.0), tax(8.0));
        assert_eq!(outcome.discount_amount.value(), 660);
        assert_eq!(outcome.discounted_exclusive.value(), 1339);
        assert_eq!(outcome.tax_amount.value(), 107);
        assert_eq!(outcome.total_inclusive.value(), 1446);
    }

    /// Converting exclusive→inclusive and back is not an exact inverse:
    /// each direction rounds its own steps. The drift stays within a couple
    /// of yen; this documents the bound without demanding a perfect
    /// round trip.
    #[test]
    fn test_round_trip_drift_is_bounded() {
        for &start in &[101.0, 999.0, 1234.0, 5678.0, 98765.0] {
            for &percent in &[8.0, 10.0] {
                let rate = tax(percent);

                let to_inclusive = convert_tax(amount(start), rate, TaxMode::Exclusive);
                let back = convert_tax(
                    Amount::new(to_inclusive.primary.as_f64()).unwrap(),
                    rate,
                    TaxMode::Inclusive,
                );

                let drift = (back.primary.as_f64() - start).abs();
                assert!(
                    drift <= 2.0,
                    "round trip drifted {drift} yen from {start} at {percent}%"
                );
            }
        }
    }
}
