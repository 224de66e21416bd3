//! # Error Types
//!
//! Typed validation errors for kakaku-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to exactly one user-facing message at the
//!    calculation boundary ([`crate::api`]); `Display` here is for logs
//!
//! Every error is recovered at the boundary and rendered into a
//! [`crate::api::CalculationResult::Failure`]; none aborts anything.

use thiserror::Error;

/// Validation errors raised while turning raw page input into calculator
/// arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Amount input is missing, non-numeric, or not strictly positive.
    #[error("amount must be a number greater than zero")]
    AmountNotPositive,

    /// Discount rate input is non-numeric or outside (0, 100) exclusive.
    #[error("discount rate must be between 0 and 100 exclusive")]
    DiscountRateOutOfRange,

    /// No usable tax rate selection was supplied.
    #[error("no valid tax rate is selected")]
    TaxRateUnavailable,
}

/// Convenience type alias for Results with CalcError.
pub type CalcResult<T> = Result<T, CalcError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalcError::AmountNotPositive.to_string(),
            "amount must be a number greater than zero"
        );
        assert_eq!(
            CalcError::TaxRateUnavailable.to_string(),
            "no valid tax rate is selected"
        );
    }
}
