//! Shared types, errors, and configuration for Flowlytix.
//!
//! This crate provides the leaf types the money core is built on:
//! - The closed currency registry
//! - Rounding modes and display locales
//! - The monetary error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, CurrencyDescriptor, Locale, RoundingMode};
