//! Parsing of user-typed or externally sourced amount text.
//!
//! Lenient on decoration, strict on the number: symbols, a leading currency
//! code, thousands separators and whitespace are stripped, then what remains
//! must be a single plain decimal.

use std::cmp::Reverse;

use flowlytix_shared::types::currency;
use flowlytix_shared::{Currency, MoneyError, MoneyResult, RoundingMode};
use rust_decimal::Decimal;
use tracing::debug;

use super::Money;

impl Money {
    /// Parses text such as `"$1,234.50"`, `"USD 100.50"` or `"-12"` in `currency`.
    ///
    /// Rounds with Banker's Rounding when the text has more fractional digits
    /// than the currency allows.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` for empty text, more than one decimal point, or
    ///   anything that is not a finite decimal once decoration is removed
    /// - `InvalidAmount` for an unknown three-letter code prefix
    /// - `CurrencyMismatch` for a known code prefix other than `currency`
    pub fn parse(text: &str, currency: Currency) -> MoneyResult<Self> {
        parse_amount(text, currency)
            .and_then(|amount| Self::from_exact(amount, currency, RoundingMode::HalfEven))
            .inspect_err(|error| debug!(input = text, %currency, %error, "rejected money text"))
    }
}

fn parse_amount(text: &str, currency: Currency) -> MoneyResult<Decimal> {
    let without_code = strip_code_prefix(text.trim(), currency)?;
    let cleaned = strip_decoration(without_code);

    if cleaned.is_empty() {
        return Err(MoneyError::InvalidAmount(format!("No amount found in {text:?}")));
    }
    if cleaned.matches('.').count() > 1 {
        return Err(MoneyError::InvalidAmount(format!(
            "More than one decimal separator in {text:?}"
        )));
    }

    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(cleaned.as_str())),
    };
    if !is_plain_decimal(digits) {
        return Err(MoneyError::InvalidAmount(format!("{text:?} is not a number")));
    }

    let magnitude = decimal_from_digits(digits).ok_or_else(|| {
        MoneyError::InvalidAmount(format!("{text:?} cannot be represented exactly"))
    })?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Builds a decimal from `123.45`-shaped text; either side of the point may be empty.
fn decimal_from_digits(digits: &str) -> Option<Decimal> {
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let mantissa = format!("{whole}{fraction}").parse::<i128>().ok()?;
    let scale = u32::try_from(fraction.len()).ok()?;
    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}

/// Removes a leading three-letter code such as `USD` in `"USD 100.50"`.
///
/// Letters that name no supported currency make the text unparseable.
fn strip_code_prefix(text: &str, currency: Currency) -> MoneyResult<&str> {
    let Some(prefix) = text.get(..3) else {
        return Ok(text);
    };
    let rest = &text[3..];
    let is_code = prefix.chars().all(|c| c.is_ascii_alphabetic())
        && !rest.is_empty()
        && !rest.starts_with(|c: char| c.is_alphabetic());
    if !is_code {
        return Ok(text);
    }

    let named = Currency::from_code(prefix)
        .map_err(|_| MoneyError::InvalidAmount(format!("{prefix:?} is not a currency code")))?;
    if named != currency {
        return Err(MoneyError::mismatch(currency, named));
    }
    Ok(rest)
}

/// Drops every registered symbol, `,` separators and whitespace.
fn strip_decoration(text: &str) -> String {
    let mut symbols: Vec<&str> = currency::all().iter().map(|d| d.symbol).collect();
    // "CN¥" and "S$" must go before "¥" and "$".
    symbols.sort_by_key(|symbol| Reverse(symbol.chars().count()));

    let mut cleaned = text.to_string();
    for symbol in symbols {
        cleaned = cleaned.replace(symbol, "");
    }
    cleaned
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

fn is_plain_decimal(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || c == '.')
}
