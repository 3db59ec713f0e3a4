use chrono::NaiveDate;

use crate::BsDate;
use crate::table::TABLE_YEARS;

/// Earliest supported BS year (inclusive)
pub const MIN_YEAR: u16 = 2000;

/// Latest supported BS year (inclusive), derived from the calendar table
#[allow(clippy::cast_possible_truncation)]
pub const MAX_YEAR: u16 = MIN_YEAR + TABLE_YEARS as u16 - 1;

/// Number of months in every BS year
pub const MONTHS_IN_YEAR: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for Baisakh
pub const BAISAKH: u8 = 1;
/// Month number for Chaitra
pub const CHAITRA: u8 = 12;

/// The BS half of the reference anchor. Its predecessor lies outside the table.
pub const ANCHOR_BS: BsDate = BsDate {
    year:  MIN_YEAR,
    month: BAISAKH,
    day:   MIN_DAY,
};

/// The AD half of the reference anchor: 1943-04-14 is BS 2000-01-01.
pub const ANCHOR_AD: NaiveDate = match NaiveDate::from_ymd_opt(1943, 4, 14) {
    Some(date) => date,
    None => panic!("reference anchor is not a valid Gregorian date"),
};

/// Date component separator
pub const DATE_SEPARATOR: char = '-';

/// Template used when no format is given
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD";

/// Four-digit year token
pub const YEAR_TOKEN: &str = "YYYY";
/// Zero-padded month token
pub const MONTH_TOKEN: &str = "MM";
/// Zero-padded day token
pub const DAY_TOKEN: &str = "DD";
