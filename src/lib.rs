//! Conversion between the Gregorian (AD) calendar and the Bikram Sambat (BS)
//! calendar.
//!
//! BS month lengths vary from year to year and are looked up from a table
//! covering BS 2000 through 2100. All arithmetic is anchored at
//! BS 2000-01-01, which falls on AD 1943-04-14.
//!
//! ```
//! use bikram_sambat::{BsDate, ad_to_bs, bs_to_ad, parse_bs_date};
//! use chrono::NaiveDate;
//!
//! let ad = NaiveDate::from_ymd_opt(2023, 4, 14).unwrap();
//! let bs = ad_to_bs(ad).unwrap();
//! assert_eq!(bs, BsDate { year: 2080, month: 1, day: 1 });
//! assert_eq!(bs_to_ad(bs).unwrap(), ad);
//! assert_eq!(parse_bs_date("2080-1-1"), Some(bs));
//! assert_eq!(parse_bs_date("2080/01/01"), None);
//! ```

mod consts;
mod convert;
mod format;
mod locale;
mod prelude;
mod table;
mod types;

pub use consts::*;
pub use convert::{ad_to_bs, bs_to_ad, current_bs_date};
pub use format::{format_bs_date, format_bs_date_with_month, localize_digits};
pub use locale::{Locale, MONTH_NAMES_EN, MONTH_NAMES_NE, month_name, month_names};
pub use table::{days_in_bs_month, is_bs_date_valid, total_days_in_bs_year};
pub use types::{Month, Year};

use crate::prelude::*;
use chrono::NaiveDate;
use std::str::FromStr;

/// A day in the Bikram Sambat calendar.
///
/// Fields are public, so a `BsDate` built by hand may name a day that does
/// not exist; use [`BsDate::new`] or [`BsDate::is_valid`] to check. Every
/// `BsDate` produced by this crate is valid. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct BsDate {
    pub year:  u16,
    pub month: u8,
    pub day:   u8,
}

/// Failures of table lookups and conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The AD date falls before BS `MIN_YEAR`.
    #[error("date precedes supported range: {0}")]
    PrecedesSupportedRange(NaiveDate),

    /// The AD date falls after BS `MAX_YEAR`.
    #[error("date exceeds supported range: {0}")]
    ExceedsSupportedRange(NaiveDate),

    /// The BS triple does not name a day in the calendar table.
    #[error("invalid BS date: {year}-{month}-{day}")]
    InvalidDate { year: u16, month: u8, day: u8 },

    /// A year argument outside the table.
    #[error("year {0} is outside the supported range {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(u16),

    /// A month argument outside `1..=12`.
    #[error("month {0} is outside 1-{max}", max = MONTHS_IN_YEAR)]
    MonthOutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-M-D)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid BS date: {year}-{month}-{day}")]
    InvalidDate { year: u16, month: u8, day: u8 },
    #[display(fmt = "Unknown locale: {_0}")]
    UnknownLocale(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl BsDate {
    /// Creates a date, checking it against the calendar table
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the triple fails [`is_bs_date_valid`].
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !is_bs_date_valid(year, month, day) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Whether this date exists in the calendar table
    pub fn is_valid(&self) -> bool {
        is_bs_date_valid(self.year, self.month, self.day)
    }

    /// Length of the month this date falls in
    ///
    /// # Errors
    /// Returns a structural error if the year or month is out of range.
    pub fn days_in_month(&self) -> Result<u8, CalendarError> {
        days_in_bs_month(self.year, self.month)
    }

    pub(crate) const fn invalid(&self) -> CalendarError {
        CalendarError::InvalidDate {
            year:  self.year,
            month: self.month,
            day:   self.day,
        }
    }
}

/// Parses a `YYYY-M-D` string, returning `None` for malformed input or a
/// date that is not in the calendar. Never panics.
///
/// Use `str::parse::<BsDate>` to learn why parsing failed.
pub fn parse_bs_date(s: &str) -> Option<BsDate> {
    s.parse().ok()
}

impl FromStr for BsDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        };
        if !is_digits(year, 4..=4) || !is_digits(month, 1..=2) || !is_digits(day, 1..=2) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let year = parse_component::<u16>(year, s)?;
        let month = parse_component::<u8>(month, s)?;
        let day = parse_component::<u8>(day, s)?;

        Self::new(year, month, day).map_err(|_| ParseError::InvalidDate { year, month, day })
    }
}

/// ASCII digits only, with a length in `len`
fn is_digits(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_component<T: FromStr>(part: &str, input: &str) -> Result<T, ParseError> {
    part.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(input.to_owned()))
}

impl serde::Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    pub fn bs(year: u16, month: u8, day: u8) -> BsDate {
        BsDate::new(year, month, day).expect("fixture BS date must be valid")
    }

    pub fn ad(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("fixture AD date must be valid")
    }
}
