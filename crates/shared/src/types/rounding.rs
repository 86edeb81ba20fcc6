//! Rounding policy for turning real-valued intermediates into minor units.
//!
//! All rounding is performed on `rust_decimal::Decimal`, never on floats, so
//! the same inputs and mode always give bit-for-bit identical results
//! regardless of platform or locale.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// How a fractional minor-unit value becomes an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Toward positive infinity.
    Up,
    /// Toward negative infinity.
    Down,
    /// Nearest integer; ties away from zero.
    HalfUp,
    /// Nearest integer; ties toward zero.
    HalfDown,
    /// Nearest integer; ties to the even neighbour (Banker's Rounding).
    #[default]
    HalfEven,
}

impl RoundingMode {
    /// Every mode, for listings and exhaustive tests.
    pub const ALL: [Self; 5] = [
        Self::Up,
        Self::Down,
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfEven,
    ];

    /// The equivalent `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Up => RoundingStrategy::ToPositiveInfinity,
            Self::Down => RoundingStrategy::ToNegativeInfinity,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Rounds `value` to an integral decimal using this mode.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use flowlytix_shared::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::HalfEven.round(dec!(2.5)), dec!(2));
    /// assert_eq!(RoundingMode::HalfUp.round(dec!(2.5)), dec!(3));
    /// ```
    #[must_use]
    pub fn round(self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(0, self.strategy())
    }

    /// Canonical snake_case name, as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::HalfUp => "half_up",
            Self::HalfDown => "half_down",
            Self::HalfEven => "half_even",
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = MoneyError;

    /// Accepts `half_even`, `HALF_EVEN` and `half-even` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| MoneyError::Domain(format!("Unknown rounding mode: {s}")))
    }
}
