//! Conversion between AD and BS dates, both measured as a day offset from
//! the reference anchor.

use chrono::{Datelike, Days, Local, NaiveDate, TimeDelta, Weekday};
use tracing::{debug, trace};

use crate::consts::{ANCHOR_AD, ANCHOR_BS, MIN_DAY};
use crate::table::total_days_in_bs_year;
use crate::types::{Month, Year};
use crate::{BsDate, CalendarError};

/// Converts an AD date to its BS date.
///
/// Walks the calendar table month by month from the anchor, consuming the
/// days elapsed since `ANCHOR_AD`.
///
/// # Errors
/// Returns `CalendarError::PrecedesSupportedRange` for dates before
/// `ANCHOR_AD`, and `CalendarError::ExceedsSupportedRange` once the walk
/// leaves `MAX_YEAR`.
pub fn ad_to_bs(ad: NaiveDate) -> Result<BsDate, CalendarError> {
    let mut remaining = ad.signed_duration_since(ANCHOR_AD).num_days();
    if remaining < 0 {
        debug!(%ad, "AD date precedes supported range");
        return Err(CalendarError::PrecedesSupportedRange(ad));
    }

    let mut year = Year::new(ANCHOR_BS.year)?;
    let mut month = Month::new(ANCHOR_BS.month)?;
    let mut day = ANCHOR_BS.day;

    loop {
        let days_left = i64::from(year.days_in(month) - day + 1);
        if remaining < days_left {
            break;
        }
        remaining -= days_left;
        day = MIN_DAY;

        let (next, wrapped) = month.next();
        month = next;
        if wrapped {
            year = year.next().ok_or_else(|| {
                debug!(%ad, "AD date exceeds supported range");
                CalendarError::ExceedsSupportedRange(ad)
            })?;
        }
    }

    // remaining < days_left <= 32
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bs = BsDate {
        year:  year.get(),
        month: month.get(),
        day:   day + remaining as u8,
    };
    trace!(%ad, %bs, "converted AD to BS");
    Ok(bs)
}

/// Converts a BS date to its AD date.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `bs` is not a day in the calendar table.
pub fn bs_to_ad(bs: BsDate) -> Result<NaiveDate, CalendarError> {
    if !bs.is_valid() {
        debug!(%bs, "invalid BS date");
        return Err(bs.invalid());
    }
    let year = Year::new(bs.year)?;
    let month = Month::new(bs.month)?;

    let whole_years = (ANCHOR_BS.year..bs.year)
        .map(|y| total_days_in_bs_year(y).map(u64::from))
        .sum::<Result<u64, _>>()?;
    let whole_months: u64 = year.month_lengths()[..usize::from(month.get() - 1)]
        .iter()
        .map(|&days| u64::from(days))
        .sum();
    let offset = whole_years + whole_months + u64::from(bs.day - MIN_DAY);

    let ad = ANCHOR_AD + Days::new(offset);
    trace!(%bs, %ad, "converted BS to AD");
    Ok(ad)
}

/// Today's BS date, according to the host's local civil date.
///
/// # Errors
/// Fails only if the system clock lies outside the supported range.
pub fn current_bs_date() -> Result<BsDate, CalendarError> {
    ad_to_bs(Local::now().date_naive())
}

impl BsDate {
    /// The AD date of this day
    ///
    /// # Errors
    /// See [`bs_to_ad`].
    pub fn to_ad(self) -> Result<NaiveDate, CalendarError> {
        bs_to_ad(self)
    }

    /// The BS date of an AD day
    ///
    /// # Errors
    /// See [`ad_to_bs`].
    pub fn from_ad(ad: NaiveDate) -> Result<Self, CalendarError> {
        ad_to_bs(ad)
    }

    /// Day of the week, shared with the AD date
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if this date is not in the table.
    pub fn weekday(self) -> Result<Weekday, CalendarError> {
        Ok(self.to_ad()?.weekday())
    }

    /// The date `days` days later (or earlier, if negative)
    ///
    /// # Errors
    /// Fails if this date is invalid or the result leaves the supported range.
    pub fn checked_add_days(self, days: i64) -> Result<Self, CalendarError> {
        let ad = self.to_ad()?;
        // a step that overflows chrono is far outside the table either way
        let Some(target) = TimeDelta::try_days(days).and_then(|delta| ad.checked_add_signed(delta))
        else {
            debug!(%self, days, "day step leaves the representable range");
            return Err(if days < 0 {
                CalendarError::PrecedesSupportedRange(ad)
            } else {
                CalendarError::ExceedsSupportedRange(ad)
            });
        };
        ad_to_bs(target)
    }
}

impl TryFrom<NaiveDate> for BsDate {
    type Error = CalendarError;

    fn try_from(ad: NaiveDate) -> Result<Self, Self::Error> {
        ad_to_bs(ad)
    }
}

impl TryFrom<BsDate> for NaiveDate {
    type Error = CalendarError;

    fn try_from(bs: BsDate) -> Result<Self, Self::Error> {
        bs_to_ad(bs)
    }
}
