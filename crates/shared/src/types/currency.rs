//! Closed registry of supported currencies.
//!
//! The table is a compile-time constant. Nothing can add, remove or alter an
//! entry at runtime, so lookups need no synchronization.

use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Static presentation and scaling metadata for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencyDescriptor {
    /// ISO 4217 code (e.g., "USD").
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display symbol, placed before the amount.
    pub symbol: &'static str,
    /// Number of decimal places in one major unit (USD = 2, JPY = 0).
    pub minor_unit_digits: u32,
}

/// ISO 4217 currency codes supported by the system.
///
/// Declaration order is the stable listing order returned by [`all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
    /// Japanese Yen
    Jpy,
    /// Indonesian Rupiah
    Idr,
    /// Singapore Dollar
    Sgd,
    /// Australian Dollar
    Aud,
    /// Canadian Dollar
    Cad,
    /// Swiss Franc
    Chf,
    /// Chinese Yuan
    Cny,
    /// Indian Rupee
    Inr,
    /// South Korean Won
    Krw,
    /// Kuwaiti Dinar
    Kwd,
}

static REGISTRY: [CurrencyDescriptor; 13] = [
    descriptor("USD", "US Dollar", "$", 2),
    descriptor("EUR", "Euro", "€", 2),
    descriptor("GBP", "Pound Sterling", "£", 2),
    descriptor("JPY", "Japanese Yen", "¥", 0),
    descriptor("IDR", "Indonesian Rupiah", "Rp", 2),
    descriptor("SGD", "Singapore Dollar", "S$", 2),
    descriptor("AUD", "Australian Dollar", "A$", 2),
    descriptor("CAD", "Canadian Dollar", "C$", 2),
    descriptor("CHF", "Swiss Franc", "CHF", 2),
    descriptor("CNY", "Chinese Yuan", "CN¥", 2),
    descriptor("INR", "Indian Rupee", "₹", 2),
    descriptor("KRW", "South Korean Won", "₩", 0),
    descriptor("KWD", "Kuwaiti Dinar", "KD", 3),
];

const fn descriptor(
    code: &'static str,
    name: &'static str,
    symbol: &'static str,
    minor_unit_digits: u32,
) -> CurrencyDescriptor {
    CurrencyDescriptor {
        code,
        name,
        symbol,
        minor_unit_digits,
    }
}

impl Currency {
    /// Every supported currency, in registry order.
    pub const ALL: [Self; 13] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Idr,
        Self::Sgd,
        Self::Aud,
        Self::Cad,
        Self::Chf,
        Self::Cny,
        Self::Inr,
        Self::Krw,
        Self::Kwd,
    ];

    /// Resolves a currency code, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidCurrency` if the code is not registered.
    pub fn from_code(code: &str) -> MoneyResult<Self> {
        let wanted = code.trim();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MoneyError::InvalidCurrency(code.to_string()))
    }

    /// Returns a copy of this currency's registry entry.
    #[must_use]
    pub fn descriptor(self) -> CurrencyDescriptor {
        REGISTRY[self as usize]
    }

    /// ISO 4217 code.
    #[must_use]
    pub fn code(self) -> &'static str {
        REGISTRY[self as usize].code
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        REGISTRY[self as usize].name
    }

    /// Display symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        REGISTRY[self as usize].symbol
    }

    /// Decimal places in one major unit.
    #[must_use]
    pub fn minor_unit_digits(self) -> u32 {
        REGISTRY[self as usize].minor_unit_digits
    }
}

/// Looks up the descriptor for a currency code.
///
/// # Errors
///
/// Returns `MoneyError::InvalidCurrency` if the code is not registered.
pub fn lookup(code: &str) -> MoneyResult<CurrencyDescriptor> {
    Currency::from_code(code).map(Currency::descriptor)
}

/// Returns true if the code names a registered currency.
#[must_use]
pub fn is_supported(code: &str) -> bool {
    Currency::from_code(code).is_ok()
}

/// Returns every registered currency in stable listing order.
#[must_use]
pub fn all() -> &'static [CurrencyDescriptor] {
    &REGISTRY
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
