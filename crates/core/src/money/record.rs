//! Plain structural snapshot for transport and persistence.
//!
//! Collaborators store `minor_units` and `currency_code` as two primitive
//! fields and rehydrate through `Money::try_from`, which goes through
//! `from_integer`. `decimal_amount` is informational and ignored on the way back.

use flowlytix_shared::{Currency, MoneyError};
use serde::{Deserialize, Serialize};

use super::Money;

/// Externalized form of a [`Money`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Signed count of minor units.
    pub minor_units: i64,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Major-unit amount for display; not read back.
    #[serde(default)]
    pub decimal_amount: f64,
}

impl Money {
    /// Snapshot of this value for transport or persistence.
    #[must_use]
    pub fn to_record(&self) -> MoneyRecord {
        MoneyRecord {
            minor_units: self.minor_units,
            currency_code: self.currency_code().to_string(),
            decimal_amount: self.decimal_amount(),
        }
    }
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        money.to_record()
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Self::from_integer(record.minor_units, Currency::from_code(&record.currency_code)?)
    }
}
