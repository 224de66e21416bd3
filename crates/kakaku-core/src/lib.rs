//! # kakaku-core: Pure Calculation Logic for Kakaku Calc
//!
//! This crate is the **heart** of Kakaku Calc, a browser page with three
//! small price calculators for Japanese yen: tax-inclusive ⇄ tax-exclusive
//! conversion, discount pricing, and combined discount + tax pricing. All
//! arithmetic, validation, and display formatting lives here as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Kakaku Calc Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript)                          │   │
//! │  │   tab switching ── pill buttons ── inputs ── result panel       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw strings + selected rate            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kakaku-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   types   │  │ calculator │  │    api    │  │   │
//! │  │   │  Amount   │  │  TaxRate  │  │ convert_tax│  │ Calc-     │  │   │
//! │  │   │  Yen      │  │ Discount  │  │ discounts  │  │ Result    │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO NETWORK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CalculationResult (serde / ts-rs)      │
//! │                                ▼                                        │
//! │                     rendered into the page                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Amount` (validated input) and `Yen` (rounded, formatted)
//! - [`types`] - `TaxRate`, `DiscountRate`, `TaxMode`
//! - [`calculator`] - the three pure calculations
//! - [`error`] - typed validation errors
//! - [`api`] - the boundary the frontend invokes; builds `CalculationResult`
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: DOM, network, and file system access is FORBIDDEN here
//! 3. **Round Per Step**: every calculation step rounds to whole yen before
//!    the next step runs; half rounds away from zero
//! 4. **Explicit Rates**: the selected tax/discount rate is a parameter,
//!    never ambient state read from the page
//!
//! ## Example Usage
//!
//! ```rust
//! use kakaku_core::calculator::apply_discount_then_tax;
//! use kakaku_core::money::Amount;
//! use kakaku_core::types::{DiscountRate, TaxRate};
//!
//! let original = Amount::parse("1,000").unwrap();
//! let discount = DiscountRate::from_percent(20.0).unwrap();
//! let tax = TaxRate::from_percent(10.0).unwrap();
//!
//! let outcome = apply_discount_then_tax(original, discount, tax);
//! assert_eq!(outcome.discounted_exclusive.value(), 800);
//! assert_eq!(outcome.total_inclusive.value(), 880);
//! assert_eq!(outcome.total_inclusive.to_string(), "¥880");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod calculator;
pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kakaku_core::Yen` instead of
// `use kakaku_core::money::Yen`

pub use api::{
    calculate_discount, calculate_discount_with_tax, calculate_tax_conversion, BreakdownLine,
    CalculationResult, ErrorCode,
};
pub use calculator::{
    apply_discount, apply_discount_then_tax, convert_tax, DiscountOutcome, DiscountTaxOutcome,
    TaxConversion,
};
pub use error::{CalcError, CalcResult};
pub use money::{Amount, Yen};
pub use types::{DiscountRate, TaxMode, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tax-rate presets the page offers as pill buttons, in percent.
///
/// 10% is the standard consumption tax rate; 8% is the reduced rate for
/// take-out food and similar items.
pub const TAX_RATE_PRESETS_PERCENT: [f64; 2] = [10.0, 8.0];

/// The tax-rate pill selected when the page loads, in percent.
pub const DEFAULT_TAX_RATE_PERCENT: f64 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_construct_valid_rates() {
        for percent in TAX_RATE_PRESETS_PERCENT {
            assert!(TaxRate::from_percent(percent).is_ok());
        }
        assert!(TAX_RATE_PRESETS_PERCENT.contains(&DEFAULT_TAX_RATE_PERCENT));
    }
}
