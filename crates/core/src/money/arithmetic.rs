//! Same-currency arithmetic.
//!
//! Every binary operation checks the currency first; there is no implicit
//! conversion. Results are validated against the safe range like any other
//! construction.

use flowlytix_shared::{MoneyError, MoneyResult, RoundingMode};
use rust_decimal::Decimal;

use super::{Money, exact_decimal, out_of_range};

impl Money {
    /// Sum of two amounts in the same currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ, `InvalidAmount` if the
    /// result leaves the safe range.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> MoneyResult<Self> {
        self.ensure_same_currency(&other)?;
        Self::from_integer(self.minor_units + other.minor_units, self.currency)
    }

    /// Difference of two amounts in the same currency. The result may be negative.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ, `InvalidAmount` if the
    /// result leaves the safe range.
    pub fn subtract(self, other: Self) -> MoneyResult<Self> {
        self.ensure_same_currency(&other)?;
        Self::from_integer(self.minor_units - other.minor_units, self.currency)
    }

    /// The same amount with its sign flipped.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self {
            minor_units: -self.minor_units,
            currency: self.currency,
        }
    }

    /// The absolute amount.
    #[must_use]
    pub const fn abs(self) -> Self {
        if self.minor_units < 0 { self.negate() } else { self }
    }

    /// Scales the amount by `factor`, rounding the product to minor units.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if `factor` is not finite or the result leaves the safe range.
    pub fn multiply(self, factor: f64, rounding: RoundingMode) -> MoneyResult<Self> {
        self.multiply_exact(exact_decimal(factor)?, rounding)
    }

    /// `multiply` with an exact decimal factor, such as a tax rate.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if the result leaves the safe range.
    pub fn multiply_exact(self, factor: Decimal, rounding: RoundingMode) -> MoneyResult<Self> {
        let product = Decimal::from(self.minor_units)
            .checked_mul(factor)
            .ok_or_else(|| out_of_range(factor))?;
        Self::from_scaled(product, self.currency, rounding)
    }

    /// Divides the amount by `divisor`, rounding the quotient to minor units.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `divisor` is zero, `InvalidAmount` if it is not
    /// finite or the result leaves the safe range.
    pub fn divide(self, divisor: f64, rounding: RoundingMode) -> MoneyResult<Self> {
        self.divide_exact(exact_decimal(divisor)?, rounding)
    }

    /// `divide` with an exact decimal divisor.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `divisor` is zero, `InvalidAmount` if the result
    /// leaves the safe range.
    pub fn divide_exact(self, divisor: Decimal, rounding: RoundingMode) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = Decimal::from(self.minor_units)
            .checked_div(divisor)
            .ok_or_else(|| out_of_range(divisor))?;
        Self::from_scaled(quotient, self.currency, rounding)
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowlytix_shared::Currency;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn usd(minor_units: i64) -> Money {
        Money::from_integer(minor_units, Currency::Usd).unwrap()
    }

    #[test]
    fn test_add_and_subtract() {
        assert_eq!(usd(1050).add(usd(250)).unwrap(), usd(1300));
        assert_eq!(usd(1050).subtract(usd(2000)).unwrap(), usd(-950));
    }

    #[test]
    fn test_cross_currency_is_rejected() {
        let eur = Money::from_integer(100, Currency::Eur).unwrap();
        let expected = MoneyError::mismatch(Currency::Usd, Currency::Eur);
        assert_eq!(usd(100).add(eur), Err(expected.clone()));
        assert_eq!(usd(100).subtract(eur), Err(expected));
    }

    #[test]
    fn test_add_past_safe_range() {
        let max = usd(crate::MAX_SAFE_MINOR_UNITS);
        assert!(matches!(
            max.add(usd(1)),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_negate_and_abs() {
        assert_eq!(usd(500).negate(), usd(-500));
        assert_eq!(-usd(-500), usd(500));
        assert_eq!(usd(-500).abs(), usd(500));
        assert_eq!(usd(500).abs(), usd(500));
        assert_eq!(usd(0).negate(), usd(0));
    }

    #[rstest]
    #[case(1000, 1.5, RoundingMode::HalfEven, 1500)]
    #[case(333, 0.5, RoundingMode::HalfEven, 166)]
    #[case(333, 0.5, RoundingMode::HalfUp, 167)]
    #[case(333, 0.5, RoundingMode::HalfDown, 166)]
    #[case(333, 0.5, RoundingMode::Up, 167)]
    #[case(-333, 0.5, RoundingMode::Up, -166)]
    #[case(-333, 0.5, RoundingMode::Down, -167)]
    #[case(1999, 0.1, RoundingMode::HalfEven, 200)]
    fn test_multiply(
        #[case] minor_units: i64,
        #[case] factor: f64,
        #[case] mode: RoundingMode,
        #[case] expected: i64,
    ) {
        assert_eq!(usd(minor_units).multiply(factor, mode).unwrap(), usd(expected));
    }

    #[test]
    fn test_multiply_exact_tax_rate() {
        // 19.99 at 8.25% = 1.649175 -> 1.65
        let tax = usd(1999)
            .multiply_exact(dec!(0.0825), RoundingMode::HalfEven)
            .unwrap();
        assert_eq!(tax, usd(165));
    }

    #[test]
    fn test_multiply_rejects_non_finite() {
        assert!(matches!(
            usd(100).multiply(f64::NAN, RoundingMode::HalfEven),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(matches!(
            usd(100).multiply(f64::INFINITY, RoundingMode::HalfEven),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[rstest]
    #[case(1000, 3.0, RoundingMode::HalfEven, 333)]
    #[case(1000, 3.0, RoundingMode::Up, 334)]
    #[case(1000, 4.0, RoundingMode::HalfEven, 250)]
    #[case(10, 4.0, RoundingMode::HalfEven, 2)]
    #[case(30, 4.0, RoundingMode::HalfEven, 8)]
    #[case(10, 4.0, RoundingMode::HalfUp, 3)]
    #[case(-1000, 3.0, RoundingMode::Down, -334)]
    fn test_divide(
        #[case] minor_units: i64,
        #[case] divisor: f64,
        #[case] mode: RoundingMode,
        #[case] expected: i64,
    ) {
        assert_eq!(usd(minor_units).divide(divisor, mode).unwrap(), usd(expected));
    }

    #[test]
    fn test_tiny_factors_are_not_zero() {
        assert_eq!(usd(100).multiply(1e-30, RoundingMode::Up), Ok(usd(1)));
        assert_eq!(usd(100).multiply(1e-30, RoundingMode::HalfEven), Ok(usd(0)));
        assert!(matches!(
            usd(100).divide(1e-29, RoundingMode::HalfEven),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert_eq!(usd(0).divide(1e-29, RoundingMode::HalfEven), Ok(usd(0)));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            usd(100).divide(0.0, RoundingMode::HalfEven),
            Err(MoneyError::DivisionByZero)
        );
        assert_eq!(
            usd(100).divide(-0.0, RoundingMode::HalfEven),
            Err(MoneyError::DivisionByZero)
        );
        assert_eq!(
            usd(0).divide_exact(Decimal::ZERO, RoundingMode::HalfEven),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_rejects_non_finite() {
        assert!(matches!(
            usd(100).divide(f64::NAN, RoundingMode::HalfEven),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(matches!(
            usd(100).divide(f64::NEG_INFINITY, RoundingMode::HalfEven),
            Err(MoneyError::InvalidAmount(_))
        ));
    }
}
