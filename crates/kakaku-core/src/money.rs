//! # Money Module
//!
//! Provides the `Amount` and `Yen` types for handling monetary values safely.
//!
//! ## Two Types, Two Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Raw input        "1,234.5"                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Amount::parse ──► Amount(1234.5)   validated, still fractional         │
//! │       │                                                                 │
//! │       ▼  calculator step (×rate, ÷(1+rate), −, +)                       │
//! │  Yen::round    ──► Yen(1235)        whole yen, one rounding per step    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Display       ──► "¥1,235"                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The raw `Amount`, not a pre-rounded value, feeds the first arithmetic
//! step of every calculator. Rounding the input up front shifts later steps
//! by ±1 yen, so each step rounds its own result and nothing else.
//!
//! ## Usage
//! ```rust
//! use kakaku_core::money::{Amount, Yen};
//!
//! let amount = Amount::parse("1,234").unwrap();
//! assert_eq!(amount.value(), 1234.0);
//!
//! let rounded = Yen::round(amount.value() * 0.1);
//! assert_eq!(rounded.to_string(), "¥123");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Amount
// =============================================================================

/// A validated monetary amount as entered by the user.
///
/// Invariant: the inner value is finite and strictly greater than zero.
/// The only way to obtain an `Amount` is through [`Amount::parse`] or
/// [`Amount::new`], both of which enforce it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Parses a raw input string into a positive amount.
    ///
    /// ## Rules
    /// - Thousands-separator commas are stripped (`"1,234"` → 1234)
    /// - Surrounding whitespace is ignored
    /// - Anything that does not parse as a number yields `None`
    /// - Zero and negative values yield `None`
    ///
    /// ## Example
    /// ```rust
    /// use kakaku_core::money::Amount;
    ///
    /// assert_eq!(Amount::parse("1,234").unwrap().value(), 1234.0);
    /// assert!(Amount::parse("0").is_none());
    /// assert!(Amount::parse("abc").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned = raw.trim().replace(',', "");
        let value: f64 = cleaned.parse().ok()?;
        Self::new(value)
    }

    /// Wraps an already-numeric value, enforcing the positivity invariant.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value > 0.0 {
            Some(Amount(value))
        } else {
            None
        }
    }

    /// Returns the raw (possibly fractional) value in yen.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

// =============================================================================
// Yen
// =============================================================================

/// A whole-yen monetary value.
///
/// Every figure displayed on the page is a `Yen`: calculator steps round
/// their result to whole yen immediately, half away from zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Yen(i64);

impl Yen {
    /// Rounds a fractional yen value to whole yen, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use kakaku_core::money::Yen;
    ///
    /// assert_eq!(Yen::round(1234.5).value(), 1235);
    /// assert_eq!(Yen::round(0.5).value(), 1);
    /// assert_eq!(Yen::round(1234.4).value(), 1234);
    /// ```
    #[inline]
    pub fn round(value: f64) -> Self {
        // f64::round is round-half-away-from-zero, the page's fixed policy
        Yen(value.round() as i64)
    }

    /// Creates a `Yen` from an already-whole number of yen.
    #[inline]
    pub const fn from_yen(yen: i64) -> Self {
        Yen(yen)
    }

    /// Returns the value as whole yen.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Returns the value as `f64` for the next arithmetic step.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

/// Display implementation renders the ja-JP currency form: `¥` prefix and
/// comma thousands separators (`¥1,234`, `-¥550`).
impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}¥{}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Inserts comma separators every three digits from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
