//! Locales and localized month names.

use crate::prelude::*;
use crate::{CalendarError, ParseError, types::Month};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language used when rendering month names and digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, romanized month names
    #[default]
    #[display(fmt = "en")]
    En,
    /// Nepali, Devanagari month names
    #[display(fmt = "ne")]
    Ne,
}

/// Romanized month names, Baisakh first
pub const MONTH_NAMES_EN: [&str; 12] = [
    "Baisakh", "Jestha", "Ashadh", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Devanagari month names, बैशाख first
pub const MONTH_NAMES_NE: [&str; 12] = [
    "बैशाख", "जेठ", "असार", "श्रावण", "भदौ", "असोज", "कार्तिक", "मंसिर", "पुष", "माघ", "फागुन", "चैत",
];

/// All twelve month names for `locale`.
pub const fn month_names(locale: Locale) -> [&'static str; 12] {
    match locale {
        Locale::En => MONTH_NAMES_EN,
        Locale::Ne => MONTH_NAMES_NE,
    }
}

/// Name of `month` (1 = Baisakh) in `locale`.
///
/// # Errors
/// Returns `CalendarError::MonthOutOfRange` if `month` is outside `1..=12`.
pub fn month_name(month: u8, locale: Locale) -> Result<&'static str, CalendarError> {
    Ok(Month::new(month)?.name(locale))
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ne" => Ok(Self::Ne),
            _ => Err(ParseError::UnknownLocale(s.to_owned())),
        }
    }
}
