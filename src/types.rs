use crate::CalendarError;
use crate::consts::{BAISAKH, CHAITRA, MAX_YEAR, MIN_YEAR, MONTHS_IN_YEAR};
use crate::locale::{Locale, month_names};
use crate::table::month_lengths;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A BS year guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (2000..=2100),
/// i.e. a year the calendar table has a row for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(u16);

impl Year {
    /// Creates a new Year, validating it against the supported range
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the value is outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub const fn new(value: u16) -> Result<Self, CalendarError> {
        if value < MIN_YEAR || value > MAX_YEAR {
            return Err(CalendarError::YearOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Days in `month` of this year
    #[inline]
    pub fn days_in(self, month: Month) -> u8 {
        month_lengths(self)[(month.get() - 1) as usize]
    }

    /// Day counts of Baisakh through Chaitra
    #[inline]
    pub fn month_lengths(self) -> &'static [u8; MONTHS_IN_YEAR as usize] {
        month_lengths(self)
    }

    /// Days in the whole year
    pub fn total_days(self) -> u16 {
        self.month_lengths().iter().copied().map(u16::from).sum()
    }

    /// The following year, or `None` past `MAX_YEAR`
    pub const fn next(self) -> Option<Self> {
        if self.0 >= MAX_YEAR {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=12` (Baisakh..=Chaitra)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= 12
    ///
    /// # Errors
    /// Returns `CalendarError::MonthOutOfRange` if the value is 0 or > 12.
    pub const fn new(value: u8) -> Result<Self, CalendarError> {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MONTHS_IN_YEAR => Ok(Self(non_zero)),
            _ => Err(CalendarError::MonthOutOfRange(value)),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Name of this month in `locale`
    pub const fn name(self, locale: Locale) -> &'static str {
        month_names(locale)[(self.get() - 1) as usize]
    }

    /// The following month and whether it wrapped from Chaitra into a new year
    pub const fn next(self) -> (Self, bool) {
        match Self::new(self.get() + 1) {
            Ok(month) => (month, false),
            Err(_) => (Self::BAISAKH, true),
        }
    }

    /// First month of the year
    pub const BAISAKH: Self = Self(match NonZeroU8::new(BAISAKH) {
        Some(month) => month,
        None => panic!("Baisakh must be non-zero"),
    });

    /// Last month of the year
    pub const CHAITRA: Self = Self(match NonZeroU8::new(CHAITRA) {
        Some(month) => month,
        None => panic!("Chaitra must be non-zero"),
    });
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
