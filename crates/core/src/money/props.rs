//! Property-based tests for money operations.
//!
//! - Integer round-trip
//! - Decimal round-trip for amounts within the currency's precision
//! - Conservation of the total under allocation
//! - Currency-mismatch and division-by-zero rejection
//! - Sign predicates are mutually exclusive and exhaustive
//! - Display output parses back to the same value

#![allow(clippy::float_cmp)]

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use flowlytix_shared::{Currency, MoneyError, RoundingMode};

use super::{MAX_SAFE_MINOR_UNITS, Money, aggregate};

/// Strategy to pick any supported currency.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy to pick two different currencies.
fn currency_pair() -> impl Strategy<Value = (Currency, Currency)> {
    (currency(), currency()).prop_filter("currencies must differ", |(a, b)| a != b)
}

/// Strategy to generate any representable minor-unit count.
fn safe_minor_units() -> impl Strategy<Value = i64> {
    -MAX_SAFE_MINOR_UNITS..=MAX_SAFE_MINOR_UNITS
}

/// Strategy to generate invoice-sized amounts (up to ±10 billion minor units).
fn invoice_minor_units() -> impl Strategy<Value = i64> {
    -10_000_000_000i64..=10_000_000_000i64
}

/// Strategy to generate money in any currency.
fn money() -> impl Strategy<Value = Money> {
    (invoice_minor_units(), currency())
        .prop_map(|(minor_units, currency)| Money::from_integer(minor_units, currency).unwrap())
}

/// Strategy to generate money anywhere in the safe range.
fn safe_money() -> impl Strategy<Value = Money> {
    (safe_minor_units(), currency())
        .prop_map(|(minor_units, currency)| Money::from_integer(minor_units, currency).unwrap())
}

/// Strategy to generate 1-12 non-negative ratios with up to 2 decimal places.
fn ratios() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0u32..10_000, 1..12).prop_map(|values| {
        values
            .into_iter()
            .map(|v| Decimal::new(i64::from(v), 2).to_string().parse::<f64>().unwrap())
            .collect()
    })
}

/// Strategy to generate 1-8 positive ratios anywhere in the finite `f64`
/// range, subnormals included.
fn wide_ratios() -> impl Strategy<Value = Vec<f64>> {
    let positive = prop::num::f64::POSITIVE | prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL;
    prop::collection::vec(positive, 1..8)
}

/// Strategy to pick a rounding mode.
fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // =========================================================================
    // Round-trips
    // =========================================================================

    /// *For any* currency and safe integer, `from_integer` keeps both exactly.
    #[test]
    fn prop_from_integer_round_trip(n in safe_minor_units(), c in currency()) {
        let money = Money::from_integer(n, c).unwrap();
        prop_assert_eq!(money.minor_units(), n);
        prop_assert_eq!(money.currency_code(), c.code());
    }

    /// *For any* amount with no more fractional digits than the currency
    /// allows, `from_decimal(x).decimal_amount() == x`.
    #[test]
    fn prop_decimal_round_trip(
        n in -100_000_000_000_000i64..100_000_000_000_000i64,
        c in currency(),
        mode in rounding_mode(),
    ) {
        let x: f64 = Decimal::new(n, c.minor_unit_digits()).to_string().parse().unwrap();
        let money = Money::from_decimal(x, c, mode).unwrap();
        prop_assert_eq!(money.minor_units(), n);
        prop_assert_eq!(money.decimal_amount(), x);
    }

    /// *For any* money, the record snapshot rehydrates to the same value.
    #[test]
    fn prop_record_round_trip(m in money()) {
        prop_assert_eq!(Money::try_from(m.to_record()), Ok(m));
    }

    /// *For any* money, parsing its display form gives it back.
    #[test]
    fn prop_display_parse_round_trip(m in money()) {
        prop_assert_eq!(Money::parse(&m.to_string(), m.currency()), Ok(m));
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    /// *For any* money and non-empty non-negative ratios, the parts sum to
    /// the original exactly, in the same currency.
    #[test]
    fn prop_allocation_conserves_total(m in money(), rs in ratios()) {
        let parts = m.allocate(&rs).unwrap();
        prop_assert_eq!(parts.len(), rs.len());
        if rs.iter().all(|r| *r == 0.0) {
            prop_assert!(parts.iter().all(Money::is_zero));
        } else {
            prop_assert_eq!(aggregate::sum(&parts).unwrap(), m);
        }
    }

    /// *For any* money and positive ratios of any magnitude, allocation
    /// succeeds and the parts sum to the original exactly.
    #[test]
    fn prop_allocation_conserves_total_for_any_magnitude(m in safe_money(), rs in wide_ratios()) {
        let parts = m.allocate(&rs).unwrap();
        prop_assert_eq!(parts.len(), rs.len());
        prop_assert_eq!(aggregate::sum(&parts).unwrap(), m);
    }

    /// *For any* money and part count, equal parts differ by at most one
    /// minor unit and the larger ones come first.
    #[test]
    fn prop_equal_allocation_is_fair(m in money(), parts in 1usize..50) {
        let shares = m.allocate_equal(parts).unwrap();
        prop_assert_eq!(aggregate::sum(&shares).unwrap(), m);
        let units: Vec<i64> = shares.iter().map(Money::minor_units).collect();
        prop_assert!(units.windows(2).all(|w| w[0] >= w[1] && w[0] - w[1] <= 1));
    }

    // =========================================================================
    // Rejections
    // =========================================================================

    /// *For any* two different currencies, binary and aggregate operations fail.
    #[test]
    fn prop_currency_mismatch_rejected(
        a in invoice_minor_units(),
        b in invoice_minor_units(),
        (c1, c2) in currency_pair(),
    ) {
        let m1 = Money::from_integer(a, c1).unwrap();
        let m2 = Money::from_integer(b, c2).unwrap();
        let expected = MoneyError::mismatch(c1, c2);
        prop_assert_eq!(m1.add(m2), Err(expected.clone()));
        prop_assert_eq!(m1.subtract(m2), Err(expected.clone()));
        prop_assert_eq!(m1.compare_to(&m2), Err(expected.clone()));
        prop_assert_eq!(aggregate::sum(&[m1, m2]), Err(expected));
        prop_assert_ne!(m1, m2);
    }

    /// *For any* money, dividing by zero fails.
    #[test]
    fn prop_division_by_zero_rejected(m in money(), mode in rounding_mode()) {
        prop_assert_eq!(m.divide(0.0, mode), Err(MoneyError::DivisionByZero));
    }

    // =========================================================================
    // Algebra
    // =========================================================================

    /// *For any* money, exactly one sign predicate holds.
    #[test]
    fn prop_sign_predicates_exclusive(m in money()) {
        let held = [m.is_zero(), m.is_positive(), m.is_negative()]
            .into_iter()
            .filter(|p| *p)
            .count();
        prop_assert_eq!(held, 1);
    }

    /// *For any* three amounts in one currency, addition is associative.
    #[test]
    fn prop_addition_associative(
        a in invoice_minor_units(),
        b in invoice_minor_units(),
        d in invoice_minor_units(),
        c in currency(),
    ) {
        let (a, b, d) = (
            Money::from_integer(a, c).unwrap(),
            Money::from_integer(b, c).unwrap(),
            Money::from_integer(d, c).unwrap(),
        );
        prop_assert_eq!(
            a.add(b).unwrap().add(d).unwrap(),
            a.add(b.add(d).unwrap()).unwrap()
        );
    }

    /// *For any* money, `m - m` is zero and `-(-m) == m`.
    #[test]
    fn prop_negation_inverse(m in money()) {
        prop_assert!(m.subtract(m).unwrap().is_zero());
        prop_assert_eq!(m.negate().negate(), m);
        prop_assert_eq!(m.add(m.negate()).unwrap(), Money::zero(m.currency()));
    }

    /// *For any* money and mode, multiplying by one is the identity.
    #[test]
    fn prop_multiply_by_one(m in money(), mode in rounding_mode()) {
        prop_assert_eq!(m.multiply(1.0, mode), Ok(m));
        prop_assert_eq!(m.divide(1.0, mode), Ok(m));
    }

    /// *For any* input, rounding is deterministic.
    #[test]
    fn prop_multiply_deterministic(m in money(), factor in 0u32..100_000, mode in rounding_mode()) {
        let factor = Decimal::new(i64::from(factor), 4).to_f64().unwrap();
        prop_assert_eq!(m.multiply(factor, mode), m.multiply(factor, mode));
    }
}
