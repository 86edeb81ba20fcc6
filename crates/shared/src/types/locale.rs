//! Display locales for presentation-edge money formatting.

use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1,234.56`
    Prefix,
    /// `1.234,56 €`
    Suffix,
}

/// Number-formatting conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConventions {
    /// Separator between groups of three integer digits.
    pub grouping: &'static str,
    /// Separator between the integer and fractional digits.
    pub decimal: &'static str,
    /// Placement of the currency symbol.
    pub symbol_position: SymbolPosition,
    /// Text between the symbol and the number.
    pub symbol_spacing: &'static str,
}

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// English (United States)
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// English (United Kingdom)
    #[serde(rename = "en-GB")]
    EnGb,
    /// German (Germany)
    #[serde(rename = "de-DE")]
    DeDe,
    /// French (France)
    #[serde(rename = "fr-FR")]
    FrFr,
    /// Japanese (Japan)
    #[serde(rename = "ja-JP")]
    JaJp,
    /// Indonesian (Indonesia)
    #[serde(rename = "id-ID")]
    IdId,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 6] = [
        Self::EnUs,
        Self::EnGb,
        Self::DeDe,
        Self::FrFr,
        Self::JaJp,
        Self::IdId,
    ];

    /// BCP 47 language tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
            Self::JaJp => "ja-JP",
            Self::IdId => "id-ID",
        }
    }

    /// Formatting conventions for this locale.
    #[must_use]
    pub const fn conventions(self) -> LocaleConventions {
        match self {
            Self::EnUs | Self::EnGb | Self::JaJp => LocaleConventions {
                grouping: ",",
                decimal: ".",
                symbol_position: SymbolPosition::Prefix,
                symbol_spacing: "",
            },
            Self::DeDe => LocaleConventions {
                grouping: ".",
                decimal: ",",
                symbol_position: SymbolPosition::Suffix,
                symbol_spacing: "\u{a0}",
            },
            Self::FrFr => LocaleConventions {
                grouping: "\u{202f}",
                decimal: ",",
                symbol_position: SymbolPosition::Suffix,
                symbol_spacing: "\u{a0}",
            },
            Self::IdId => LocaleConventions {
                grouping: ".",
                decimal: ",",
                symbol_position: SymbolPosition::Prefix,
                symbol_spacing: "\u{a0}",
            },
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = MoneyError;

    /// Accepts `en-US` and `en_US`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| MoneyError::Domain(format!("Unsupported locale: {s}")))
    }
}
