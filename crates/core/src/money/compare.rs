//! Ordering between amounts of the same currency.

use std::cmp::Ordering;

use flowlytix_shared::MoneyResult;

use super::Money;

impl Money {
    /// Orders two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ.
    pub fn compare_to(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.minor_units.cmp(&other.minor_units))
    }

    /// `self > other`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare_to(other)?.is_gt())
    }

    /// `self >= other`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare_to(other)?.is_ge())
    }

    /// `self < other`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare_to(other)?.is_lt())
    }

    /// `self <= other`.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the currencies differ.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare_to(other)?.is_le())
    }
}

/// Amounts in different currencies are unordered.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}
