//! Locale type: the two languages the site is written in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a locale code does not name a supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Unknown locale code: '{0}'")]
    UnknownCode(String),
}

/// One of the two supported site locales.
///
/// Portuguese is the default: the site is aimed at a Brazilian audience and
/// English is offered as the alternate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    /// All supported locales, default first.
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    /// Parse a locale from its code.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace, so
    /// `"PT"` and `" en "` are accepted.
    pub fn from_code(code: &str) -> Result<Locale, LocaleError> {
        let normalized = code.trim().to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == normalized)
            .ok_or_else(|| LocaleError::UnknownCode(code.to_string()))
    }

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    /// The other locale.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::Pt => Locale::En,
            Locale::En => Locale::Pt,
        }
    }

    /// Compact encoding used by the resolver's atomic cell.
    pub(crate) fn to_bits(self) -> u8 {
        match self {
            Locale::Pt => 0,
            Locale::En => 1,
        }
    }

    pub(crate) fn from_bits(bits: u8) -> Locale {
        if bits & 1 == 0 {
            Locale::Pt
        } else {
            Locale::En
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}
