//! Aggregation over lists of same-currency amounts.

use flowlytix_shared::{MoneyError, MoneyResult};

use super::Money;

/// Total of all amounts.
///
/// # Errors
///
/// `Domain` if `values` is empty, `CurrencyMismatch` on the first amount whose
/// currency differs from the running total.
///
/// # Example
///
/// ```
/// use flowlytix_core::{Currency, Money, aggregate};
///
/// let lines = [
///     Money::from_decimal_default(10.0, Currency::Usd).unwrap(),
///     Money::from_decimal_default(20.0, Currency::Usd).unwrap(),
/// ];
/// assert_eq!(aggregate::sum(&lines).unwrap().minor_units(), 3000);
/// ```
pub fn sum(values: &[Money]) -> MoneyResult<Money> {
    let (first, rest) = split_non_empty(values, "sum")?;
    rest.iter().try_fold(*first, |total, value| total.add(*value))
}

/// Smallest amount.
///
/// # Errors
///
/// `Domain` if `values` is empty, `CurrencyMismatch` if currencies differ.
pub fn min(values: &[Money]) -> MoneyResult<Money> {
    let (first, rest) = split_non_empty(values, "min")?;
    rest.iter().try_fold(*first, |smallest, value| {
        Ok(if value.less_than(&smallest)? { *value } else { smallest })
    })
}

/// Largest amount.
///
/// # Errors
///
/// `Domain` if `values` is empty, `CurrencyMismatch` if currencies differ.
pub fn max(values: &[Money]) -> MoneyResult<Money> {
    let (first, rest) = split_non_empty(values, "max")?;
    rest.iter().try_fold(*first, |largest, value| {
        Ok(if value.greater_than(&largest)? { *value } else { largest })
    })
}

fn split_non_empty<'a>(
    values: &'a [Money],
    operation: &str,
) -> MoneyResult<(&'a Money, &'a [Money])> {
    values
        .split_first()
        .ok_or_else(|| MoneyError::Domain(format!("Cannot take the {operation} of no amounts")))
}
