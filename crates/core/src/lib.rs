//! Core money logic for Flowlytix.
//!
//! This crate contains the monetary value type with ZERO web or database
//! dependencies. Every price, tax, discount and installment amount in the
//! system is a [`Money`].
//!
//! # Modules
//!
//! - `money` - Minor-unit money value, arithmetic, allocation, parsing, formatting

pub mod money;

pub use flowlytix_shared::{
    Currency, CurrencyDescriptor, Locale, MoneyError, MoneyResult, RoundingMode,
};
pub use money::{MAX_SAFE_MINOR_UNITS, Money, MoneyRecord, aggregate};
