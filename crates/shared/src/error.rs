//! Monetary error taxonomy.
//!
//! Every failure raised while constructing, combining, splitting or parsing a
//! money value is one of the variants below. Callers translate them into
//! validation failures or UI messages; nothing here recovers on its own.

use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur during money operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Amount is NaN, infinite, unparseable, or outside the safe integer range.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency code is not in the registry.
    #[error("Unsupported currency: {0}")]
    InvalidCurrency(String),

    /// Binary or aggregate operation across two different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        left: Currency,
        /// Currency of the right-hand operand.
        right: Currency,
    },

    /// Divisor is exactly zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Structural violation in allocation or aggregation input.
    #[error("Domain error: {0}")]
    Domain(String),
}

impl MoneyError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Domain(_) => "DOMAIN_ERROR",
        }
    }

    /// Builds a mismatch error from the two offending currencies.
    #[must_use]
    pub const fn mismatch(left: Currency, right: Currency) -> Self {
        Self::CurrencyMismatch { left, right }
    }
}
