//! Common types used across the money crates.

pub mod currency;
pub mod locale;
pub mod rounding;

pub use currency::{Currency, CurrencyDescriptor};
pub use locale::{Locale, LocaleConventions, SymbolPosition};
pub use rounding::RoundingMode;
