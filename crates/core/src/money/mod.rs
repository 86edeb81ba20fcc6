//! Money type with exact minor-unit precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! A `Money` is a signed count of the currency's smallest unit (cents for
//! USD, whole yen for JPY). Real-valued inputs are converted to
//! `rust_decimal::Decimal` on entry and rounded to an integer immediately.

pub mod aggregate;
pub mod allocation;
pub mod arithmetic;
pub mod compare;
pub mod format;
pub mod parse;
pub mod record;

#[cfg(test)]
mod props;

pub use record::MoneyRecord;

use std::num::FpCategory;

use flowlytix_shared::{Currency, CurrencyDescriptor, MoneyError, MoneyResult, RoundingMode};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Largest magnitude a `Money` may hold, in minor units (2^53 - 1).
pub const MAX_SAFE_MINOR_UNITS: i64 = 9_007_199_254_740_991;

/// An immutable amount in a single currency.
///
/// Instances are only created through the named constructors, which validate
/// the range. Equality is structural: same minor units and same currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "MoneyRecord", try_from = "MoneyRecord")]
pub struct Money {
    minor_units: i64,
    currency: Currency,
}

impl Money {
    /// Creates money from an already-scaled count of minor units.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the value is outside
    /// `±MAX_SAFE_MINOR_UNITS`.
    pub fn from_integer(minor_units: i64, currency: Currency) -> MoneyResult<Self> {
        if !(-MAX_SAFE_MINOR_UNITS..=MAX_SAFE_MINOR_UNITS).contains(&minor_units) {
            return Err(MoneyError::InvalidAmount(format!(
                "{minor_units} minor units is outside the safe integer range"
            )));
        }
        Ok(Self {
            minor_units,
            currency,
        })
    }

    /// Creates money from a major-unit amount such as `10.99`.
    ///
    /// The amount is scaled by `10^minor_unit_digits` and rounded with `rounding`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` for NaN, infinities, or amounts
    /// outside the safe range.
    ///
    /// # Example
    ///
    /// ```
    /// use flowlytix_core::{Currency, Money, RoundingMode};
    ///
    /// let price = Money::from_decimal(10.995, Currency::Usd, RoundingMode::HalfUp).unwrap();
    /// assert_eq!(price.minor_units(), 1100);
    /// ```
    pub fn from_decimal(
        amount: f64,
        currency: Currency,
        rounding: RoundingMode,
    ) -> MoneyResult<Self> {
        Self::from_exact(exact_decimal(amount)?, currency, rounding)
    }

    /// `from_decimal` with Banker's Rounding.
    ///
    /// # Errors
    ///
    /// See [`Money::from_decimal`].
    pub fn from_decimal_default(amount: f64, currency: Currency) -> MoneyResult<Self> {
        Self::from_decimal(amount, currency, RoundingMode::HalfEven)
    }

    /// Creates money from an exact major-unit decimal.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the scaled amount is outside the
    /// safe range.
    pub fn from_exact(
        amount: Decimal,
        currency: Currency,
        rounding: RoundingMode,
    ) -> MoneyResult<Self> {
        let scaled = amount
            .checked_mul(scale_factor(currency))
            .ok_or_else(|| out_of_range(amount))?;
        Self::from_scaled(scaled, currency, rounding)
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            minor_units: 0,
            currency,
        }
    }

    /// Rounds a value already expressed in minor units and validates the range.
    pub(crate) fn from_scaled(
        minor_units: Decimal,
        currency: Currency,
        rounding: RoundingMode,
    ) -> MoneyResult<Self> {
        let rounded = rounding.round(minor_units);
        let minor_units = rounded.to_i64().ok_or_else(|| out_of_range(rounded))?;
        Self::from_integer(minor_units, currency)
    }

    /// Signed count of minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// ISO 4217 code of the currency.
    #[must_use]
    pub fn currency_code(&self) -> &'static str {
        self.currency.code()
    }

    /// A copy of the currency's registry entry.
    #[must_use]
    pub fn currency_descriptor(&self) -> CurrencyDescriptor {
        self.currency.descriptor()
    }

    /// The exact major-unit amount, e.g. `123.45` for 12345 cents.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.minor_units, self.currency.minor_unit_digits())
    }

    /// The major-unit amount as a float, for presentation only.
    ///
    /// Never feed this back into arithmetic; use `minor_units` and
    /// `from_integer` for exact round-trips.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::float_arithmetic)]
    pub fn decimal_amount(&self) -> f64 {
        // Both operands are exact in f64 within the safe range, so the
        // quotient is the nearest float to the true amount.
        let scale = 10_f64.powi(i32::try_from(self.currency.minor_unit_digits()).unwrap_or(0));
        self.minor_units as f64 / scale
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.minor_units > 0
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.minor_units < 0
    }

    pub(crate) fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::mismatch(self.currency, other.currency))
        }
    }
}

/// Converts a float to the decimal it was written as.
///
/// Uses the shortest round-trip representation, so `10.995` becomes exactly
/// `10.995` rather than its binary expansion. A non-zero value too small for
/// 28 fractional digits is never read as zero.
pub(crate) fn exact_decimal(value: f64) -> MoneyResult<Decimal> {
    if !value.is_finite() {
        return Err(MoneyError::InvalidAmount(format!("{value} is not a finite number")));
    }
    let decimal = match value.to_string().parse::<Decimal>() {
        Ok(decimal) => Some(decimal),
        Err(_) => Decimal::from_f64_retain(value),
    };
    match decimal {
        Some(decimal) if !decimal.is_zero() || value.classify() == FpCategory::Zero => Ok(decimal),
        // Magnitudes below 10^-28 become ±10^-28: any safe minor-unit count
        // times or divided by either rounds to the same result.
        _ if value.abs() < 1.0 => {
            let smallest = Decimal::new(1, 28);
            Ok(if value.is_sign_negative() { -smallest } else { smallest })
        }
        _ => Err(MoneyError::InvalidAmount(format!("{value} cannot be represented exactly"))),
    }
}

fn scale_factor(currency: Currency) -> Decimal {
    Decimal::from(10_u64.pow(currency.minor_unit_digits()))
}

fn out_of_range(value: Decimal) -> MoneyError {
    MoneyError::InvalidAmount(format!("{value} is outside the safe integer range"))
}
