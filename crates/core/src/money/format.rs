//! Display formatting.
//!
//! `Display` is the canonical compact form: symbol, then the signed amount
//! with exactly the currency's minor-unit digits (`$123.45`, `¥1000`,
//! `$-50.25`). The sign follows the symbol; existing consumers depend on it.

use std::fmt;

use flowlytix_shared::types::{Locale, SymbolPosition};

use super::Money;

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.to_decimal())
    }
}

impl Money {
    /// Locale-aware rendering with grouping separators, e.g. `$1,234.56`
    /// for `en-US` or `1.234,56 €` for `de-DE`.
    #[must_use]
    pub fn format(&self, locale: Locale) -> String {
        let conventions = locale.conventions();
        let digits = self.currency.minor_unit_digits();
        let magnitude = self.minor_units.unsigned_abs();
        let unit = 10_u64.pow(digits);

        let whole = group_thousands(magnitude / unit, conventions.grouping);
        let number = if digits == 0 {
            whole
        } else {
            let width = usize::try_from(digits).unwrap_or_default();
            format!("{whole}{}{:0width$}", conventions.decimal, magnitude % unit)
        };

        let symbol = self.currency.symbol();
        let spacing = conventions.symbol_spacing;
        let body = match conventions.symbol_position {
            SymbolPosition::Prefix => format!("{symbol}{spacing}{number}"),
            SymbolPosition::Suffix => format!("{number}{spacing}{symbol}"),
        };

        if self.is_negative() {
            format!("-{body}")
        } else {
            body
        }
    }
}

fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}
