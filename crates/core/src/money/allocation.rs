//! Proportional allocation that never loses a minor unit.
//!
//! Splits a total across ratios so the parts sum EXACTLY to the total:
//! 1. Floor each exact share `total * ratio / sum(ratios)`
//! 2. Compute the remainder (total - sum of floors), always `0 <= r < n`
//! 3. Give one extra minor unit to each of the first `r` parts, in input order
//!
//! Ratios are taken as the exact decimals they were written as and the
//! shares are computed with arbitrary-precision rationals, so no ratio is
//! ever rounded away however small or large it is.

use flowlytix_shared::{MoneyError, MoneyResult};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use tracing::{debug, trace};

use super::Money;

impl Money {
    /// Splits this amount according to `ratios`, one part per ratio.
    ///
    /// The parts are in the same currency and sum exactly to `self`.
    /// All-zero ratios yield all-zero parts.
    ///
    /// # Errors
    ///
    /// `Domain` for an empty list or a negative ratio, `InvalidAmount` for a
    /// non-finite ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use flowlytix_core::{Currency, Money};
    ///
    /// // $10.00 / 3 = [$3.34, $3.33, $3.33]
    /// let total = Money::from_integer(1000, Currency::Usd).unwrap();
    /// let parts = total.allocate(&[1.0, 1.0, 1.0]).unwrap();
    /// let cents: Vec<i64> = parts.iter().map(Money::minor_units).collect();
    /// assert_eq!(cents, vec![334, 333, 333]);
    /// ```
    pub fn allocate(self, ratios: &[f64]) -> MoneyResult<Vec<Self>> {
        if ratios.is_empty() {
            debug!(total = %self, "rejected allocation with no ratios");
            return Err(MoneyError::Domain(
                "Cannot allocate across an empty list of ratios".to_string(),
            ));
        }

        let ratios = ratios
            .iter()
            .map(|ratio| exact_ratio(*ratio))
            .collect::<MoneyResult<Vec<_>>>()?;

        if let Some(negative) = ratios.iter().find(|ratio| ratio.is_negative()) {
            debug!(total = %self, %negative, "rejected allocation with negative ratio");
            return Err(MoneyError::Domain(format!(
                "Allocation ratios must be non-negative, got {negative}"
            )));
        }

        self.allocate_by_ratios(&ratios)
    }

    /// Splits this amount into `parts` equal shares.
    ///
    /// # Errors
    ///
    /// `Domain` if `parts` is zero.
    pub fn allocate_equal(self, parts: usize) -> MoneyResult<Vec<Self>> {
        if parts == 0 {
            return Err(MoneyError::Domain("Cannot allocate into zero parts".to_string()));
        }
        self.allocate_by_ratios(&vec![BigRational::one(); parts])
    }

    fn allocate_by_ratios(self, ratios: &[BigRational]) -> MoneyResult<Vec<Self>> {
        let shares = split_by_ratios(self.minor_units, ratios).ok_or_else(|| {
            MoneyError::InvalidAmount(format!("Cannot allocate {self} across these ratios"))
        })?;
        shares
            .into_iter()
            .map(|share| Self::from_integer(share, self.currency))
            .collect()
    }
}

/// The exact value of the decimal a float was written as.
///
/// `0.1` is one tenth and `1e-300` is `1 / 10^300`, from the shortest
/// round-trip scientific notation of `value`.
fn exact_ratio(value: f64) -> MoneyResult<BigRational> {
    if !value.is_finite() {
        return Err(MoneyError::InvalidAmount(format!("{value} is not a finite ratio")));
    }
    let unrepresentable =
        || MoneyError::InvalidAmount(format!("{value} cannot be used as a ratio"));

    let text = format!("{value:e}");
    let (mantissa, exponent) = text.split_once('e').ok_or_else(unrepresentable)?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits: BigInt = format!("{whole}{fraction}").parse().map_err(|_| unrepresentable())?;

    let exponent = exponent.parse::<i64>().map_err(|_| unrepresentable())?
        - i64::try_from(fraction.len()).map_err(|_| unrepresentable())?;
    let magnitude = u32::try_from(exponent.unsigned_abs()).map_err(|_| unrepresentable())?;
    let power = BigInt::from(10_u8).pow(magnitude);

    Ok(if exponent < 0 {
        BigRational::new(digits, power)
    } else {
        BigRational::from_integer(digits * power)
    })
}

/// Floors each exact share of `total`, then hands out the remainder one
/// unit at a time from the first share onwards.
///
/// Returns `None` only if a floored share does not fit in an `i64`, which
/// cannot happen for non-negative ratios.
fn split_by_ratios(total: i64, ratios: &[BigRational]) -> Option<Vec<i64>> {
    let ratio_sum = ratios.iter().fold(BigRational::zero(), |sum, ratio| sum + ratio);
    if ratio_sum.is_zero() {
        return Some(vec![0; ratios.len()]);
    }

    let total_ratio = BigRational::from_integer(BigInt::from(total));
    let mut shares = ratios
        .iter()
        .map(|ratio| (&total_ratio * ratio / &ratio_sum).floor().to_integer().to_i64())
        .collect::<Option<Vec<i64>>>()?;

    let allocated: i64 = shares.iter().sum();
    let remainder = usize::try_from(total - allocated).ok()?;
    trace!(total, remainder, parts = shares.len(), "distributing allocation remainder");

    let parts = shares.len();
    for index in 0..remainder {
        shares[index % parts] += 1;
    }
    Some(shares)
}
