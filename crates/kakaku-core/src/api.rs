//! # Calculation Boundary
//!
//! The surface the web frontend invokes: one entry point per calculator tab,
//! each taking the raw input strings plus the selected rate and returning a
//! serializable [`CalculationResult`].
//!
//! ## Result Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend                         kakaku-core                           │
//! │  ────────                         ───────────                           │
//! │                                                                         │
//! │  「計算する」 click                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculate_discount("1,000", "20")                                      │
//! │       │                                                                 │
//! │       ├── bad input ──► Failure { code, message, placeholder }          │
//! │       │                 error text + reset result panel                 │
//! │       │                                                                 │
//! │       └── valid ──────► Success { primary, label, breakdown[] }         │
//! │                         big price line + labeled sub-lines              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All user-facing copy lives here, next to the error mapping, so the pure
//! modules below stay free of display concerns. Validation runs in the same
//! order the page checks its fields: amount, then discount rate, then tax
//! rate.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::calculator::{apply_discount, apply_discount_then_tax, convert_tax};
use crate::error::CalcError;
use crate::money::{Amount, Yen};
use crate::types::{DiscountRate, TaxMode, TaxRate};

// =============================================================================
// User-Facing Copy
// =============================================================================

// Error messages, one per validation failure
const MSG_TAX_AMOUNT: &str = "1円より大きい金額を入力してください。";
const MSG_PRICE_AMOUNT: &str = "元の価格を 1円より大きい金額で入力してください。";
const MSG_DISCOUNT_RATE: &str = "割引率は 0〜100 の間で入力してください。";
const MSG_TAX_RATE: &str = "税率が正しく取得できませんでした。";

// Placeholder text the result panel resets to on failure
const PLACEHOLDER_TAX: &str = "金額を正しく入力してから「計算する」を押してください。";
const PLACEHOLDER_DISCOUNT: &str = "元の価格と割引率を入力してから「計算する」を押してください。";
const PLACEHOLDER_DISCOUNT_RATE: &str = "割引率を正しく入力してから「計算する」を押してください。";
const PLACEHOLDER_DISCOUNT_TAX: &str =
    "元の価格・割引率・税率を入力してから「計算する」を押してください。";

// Breakdown labels
const LABEL_SOURCE_INCLUSIVE: &str = "元の税込価格";
const LABEL_SOURCE_EXCLUSIVE: &str = "元の税抜価格";
const LABEL_SOURCE_PRICE: &str = "元の価格";
const LABEL_TAX_AMOUNT: &str = "消費税額";
const LABEL_DISCOUNT_AMOUNT: &str = "割引額";
const LABEL_DISCOUNTED_EXCLUSIVE: &str = "割引後税抜価格";
const LABEL_ROUNDING: &str = "端数処理";
const NOTE_ROUNDING: &str = "1円未満を四捨五入";

// Primary-line labels
const HEADLINE_INCLUSIVE_TO_EXCLUSIVE: &str = "税込 → 税抜";
const HEADLINE_EXCLUSIVE_TO_INCLUSIVE: &str = "税抜 → 税込";
const HEADLINE_DISCOUNTED_PRICE: &str = "割引後価格";
const HEADLINE_DISCOUNTED_INCLUSIVE: &str = "割引後 税込価格";

// =============================================================================
// Result DTOs
// =============================================================================

/// One labeled line of the result breakdown, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BreakdownLine {
    pub label: String,
    pub value: String,
}

impl BreakdownLine {
    fn new(label: &str, value: impl Into<String>) -> Self {
        BreakdownLine {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Machine-readable failure codes for programmatic handling.
///
/// ## Usage in Frontend
/// ```typescript
/// if (result.status === 'failure' && result.code === 'TAX_RATE_UNAVAILABLE') {
///   highlightRatePills();
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Amount missing, non-numeric, or ≤ 0
    AmountNotPositive,

    /// Discount rate non-numeric or outside (0, 100)
    DiscountRateOutOfRange,

    /// No active tax rate selection
    TaxRateUnavailable,
}

impl From<CalcError> for ErrorCode {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::AmountNotPositive => ErrorCode::AmountNotPositive,
            CalcError::DiscountRateOutOfRange => ErrorCode::DiscountRateOutOfRange,
            CalcError::TaxRateUnavailable => ErrorCode::TaxRateUnavailable,
        }
    }
}

/// Outcome of one button click, ready for the result panel.
///
/// ## Serialization
/// Tagged with `status`; the frontend switches on it:
/// ```json
/// { "status": "success", "primary": "¥880", "label": "割引後 税込価格",
///   "breakdown": [ { "label": "元の価格", "value": "¥1,000" } ] }
/// ```
/// ```json
/// { "status": "failure", "code": "AMOUNT_NOT_POSITIVE",
///   "message": "1円より大きい金額を入力してください。",
///   "placeholder": "金額を正しく入力してから「計算する」を押してください。" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "camelCase")]
#[ts(export)]
pub enum CalculationResult {
    /// The calculation ran; render the primary figure and its breakdown.
    Success {
        /// Formatted headline figure (`"¥1,000"`).
        primary: String,
        /// What the headline figure is (`"税込 → 税抜"`).
        label: String,
        /// Ordered sub-lines, last one always the rounding note.
        breakdown: Vec<BreakdownLine>,
    },
    /// Validation failed; show `message` and reset the panel to `placeholder`.
    Failure {
        code: ErrorCode,
        message: String,
        placeholder: String,
    },
}

impl CalculationResult {
    fn success(primary: Yen, label: &str, breakdown: Vec<BreakdownLine>) -> Self {
        CalculationResult::Success {
            primary: primary.to_string(),
            label: label.to_string(),
            breakdown,
        }
    }

    fn failure(err: CalcError, message: &str, placeholder: &str) -> Self {
        debug!(?err, "calculation rejected");
        CalculationResult::Failure {
            code: err.into(),
            message: message.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    /// True for the `Success` variant.
    pub fn is_success(&self) -> bool {
        matches!(self, CalculationResult::Success { .. })
    }
}

fn rounding_note() -> BreakdownLine {
    BreakdownLine::new(LABEL_ROUNDING, NOTE_ROUNDING)
}

// =============================================================================
// Entry Points
// =============================================================================

/// Tax tab: converts the entered amount between tax-included and
/// tax-excluded prices.
///
/// `rate` is the currently selected tax-rate pill; `None` means no pill is
/// active and yields the rate-unavailable failure.
pub fn calculate_tax_conversion(
    raw_amount: &str,
    rate: Option<TaxRate>,
    mode: TaxMode,
) -> CalculationResult {
    debug!(raw_amount, ?rate, ?mode, "tax conversion requested");

    let amount = match Amount::parse(raw_amount) {
        Some(amount) => amount,
        None => {
            return CalculationResult::failure(
                CalcError::AmountNotPositive,
                MSG_TAX_AMOUNT,
                PLACEHOLDER_TAX,
            )
        }
    };

    let rate = match rate {
        Some(rate) => rate,
        None => {
            return CalculationResult::failure(
                CalcError::TaxRateUnavailable,
                MSG_TAX_RATE,
                PLACEHOLDER_TAX,
            )
        }
    };

    let conversion = convert_tax(amount, rate, mode);
    let (headline, source_label) = match mode {
        TaxMode::Inclusive => (HEADLINE_INCLUSIVE_TO_EXCLUSIVE, LABEL_SOURCE_INCLUSIVE),
        TaxMode::Exclusive => (HEADLINE_EXCLUSIVE_TO_INCLUSIVE, LABEL_SOURCE_EXCLUSIVE),
    };

    CalculationResult::success(
        conversion.primary,
        headline,
        vec![
            BreakdownLine::new(source_label, Yen::round(amount.value()).to_string()),
            BreakdownLine::new(
                LABEL_TAX_AMOUNT,
                format!(
                    "{}（税率 {}％）",
                    conversion.tax,
                    rate.percent_display()
                ),
            ),
            rounding_note(),
        ],
    )
}

/// Discount tab: applies a percentage discount to the entered price.
pub fn calculate_discount(raw_amount: &str, raw_discount_percent: &str) -> CalculationResult {
    debug!(raw_amount, raw_discount_percent, "discount requested");

    let original = match Amount::parse(raw_amount) {
        Some(amount) => amount,
        None => {
            return CalculationResult::failure(
                CalcError::AmountNotPositive,
                MSG_PRICE_AMOUNT,
                PLACEHOLDER_DISCOUNT,
            )
        }
    };

    let rate = match DiscountRate::parse(raw_discount_percent) {
        Ok(rate) => rate,
        Err(err) => {
            return CalculationResult::failure(err, MSG_DISCOUNT_RATE, PLACEHOLDER_DISCOUNT_RATE)
        }
    };

    let outcome = apply_discount(original, rate);

    CalculationResult::success(
        outcome.discounted_price,
        HEADLINE_DISCOUNTED_PRICE,
        vec![
            BreakdownLine::new(LABEL_SOURCE_PRICE, Yen::round(original.value()).to_string()),
            BreakdownLine::new(
                LABEL_DISCOUNT_AMOUNT,
                format!("{}（{}％OFF）", outcome.discount_amount, rate.percent_display()),
            ),
            rounding_note(),
        ],
    )
}

/// Discount + tax tab: discounts the entered tax-exclusive price, then adds
/// consumption tax to the discounted price.
pub fn calculate_discount_with_tax(
    raw_amount: &str,
    raw_discount_percent: &str,
    rate: Option<TaxRate>,
) -> CalculationResult {
    debug!(
        raw_amount,
        raw_discount_percent,
        ?rate,
        "discount with tax requested"
    );

    let original = match Amount::parse(raw_amount) {
        Some(amount) => amount,
        None => {
            return CalculationResult::failure(
                CalcError::AmountNotPositive,
                MSG_PRICE_AMOUNT,
                PLACEHOLDER_DISCOUNT_TAX,
            )
        }
    };

    let discount = match DiscountRate::parse(raw_discount_percent) {
        Ok(rate) => rate,
        Err(err) => {
            return CalculationResult::failure(err, MSG_DISCOUNT_RATE, PLACEHOLDER_DISCOUNT_RATE)
        }
    };

    let tax = match rate {
        Some(rate) => rate,
        None => {
            return CalculationResult::failure(
                CalcError::TaxRateUnavailable,
                MSG_TAX_RATE,
                PLACEHOLDER_DISCOUNT_TAX,
            )
        }
    };

    let outcome = apply_discount_then_tax(original, discount, tax);

    CalculationResult::success(
        outcome.total_inclusive,
        HEADLINE_DISCOUNTED_INCLUSIVE,
        vec![
            BreakdownLine::new(LABEL_SOURCE_PRICE, Yen::round(original.value()).to_string()),
            BreakdownLine::new(
                LABEL_DISCOUNT_AMOUNT,
                format!(
                    "{}（{}％OFF）",
                    outcome.discount_amount,
                    discount.percent_display()
                ),
            ),
            BreakdownLine::new(
                LABEL_DISCOUNTED_EXCLUSIVE,
                outcome.discounted_exclusive.to_string(),
            ),
            BreakdownLine::new(
                LABEL_TAX_AMOUNT,
                format!("{}（税率 {}％）", outcome.tax_amount, tax.percent_display()),
            ),
            rounding_note(),
        ],
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
