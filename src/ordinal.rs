//! Conversion between serial day numbers and (year, month, day) triples.
//!
//! The serial numbering matches the convention used by common spreadsheet
//! programs: serial 2 is 1 January 1900 and serial 1 is reserved. The
//! functions here are the only place the epoch is encoded; everything else
//! in the crate works in terms of these conversions.

use crate::DateError;
use crate::consts::{
    DAYS_BEFORE_MONTH, DAYS_PER_WEEK, EPOCH_ORDINAL, EPOCH_WEEKDAY, MAX_ORDINAL, MAX_YEAR,
    MIN_ORDINAL, MIN_YEAR,
};
use crate::types::{Month, Weekday, days_in_month, is_leap_year, leap_year_count};

/// Serial day number of 1 January of the given year.
/// Callers must pass a year of at least `MIN_YEAR`; years past `MAX_YEAR`
/// are allowed so the year search in `from_ordinal` can overshoot safely.
fn first_ordinal_of_year(year: u16) -> i32 {
    let elapsed = i32::from(year - MIN_YEAR);
    EPOCH_ORDINAL + 365 * elapsed + i32::from(leap_year_count(year - 1))
}

/// Days in the given year that precede the first of `month`.
fn days_before_month(year: u16, month: Month) -> i32 {
    let mut days = DAYS_BEFORE_MONTH[month.index() as usize];
    if month > Month::February && is_leap_year(year) {
        days += 1;
    }
    days
}

/// Computes the serial day number for a (year, month, day) triple.
///
/// # Errors
/// Returns `DateError::InvalidYear` if the year is outside the supported
/// range, or `DateError::InvalidDay` if the day does not exist in the given
/// month and year.
pub(crate) fn to_ordinal(year: u16, month: Month, day: u8) -> Result<i32, DateError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateError::InvalidYear(i64::from(year)));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(DateError::InvalidDay {
            year,
            month: month.index(),
            day,
        });
    }
    Ok(first_ordinal_of_year(year) + days_before_month(year, month) + i32::from(day) - 1)
}

/// Recovers the (year, month, day) triple for a serial day number.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the serial is outside
/// `MIN_ORDINAL..=MAX_ORDINAL`.
pub(crate) fn from_ordinal(ordinal: i32) -> Result<(u16, Month, u8), DateError> {
    if !(MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal) {
        return Err(DateError::OutOfRange(i64::from(ordinal)));
    }

    // A 365-day year estimate can only overshoot (by the number of elapsed
    // leap days), so correct downward until the year start fits.
    let days = ordinal - EPOCH_ORDINAL;
    let mut year = MIN_YEAR + u16::try_from(days / 365).unwrap_or(0);
    while first_ordinal_of_year(year) > ordinal {
        year -= 1;
    }

    let mut remaining = ordinal - first_ordinal_of_year(year) + 1;
    for month in Month::ALL {
        let length = i32::from(days_in_month(year, month));
        if remaining <= length {
            return Ok((year, month, remaining as u8));
        }
        remaining -= length;
    }
    Err(DateError::OutOfRange(i64::from(ordinal)))
}

/// Derives the weekday of a serial day number from the single calibration
/// point `(EPOCH_ORDINAL, EPOCH_WEEKDAY)`.
pub(crate) fn weekday_of(ordinal: i32) -> Weekday {
    let offset = i32::from(EPOCH_WEEKDAY.days_from_monday());
    let index = (ordinal - EPOCH_ORDINAL + offset).rem_euclid(DAYS_PER_WEEK);
    Weekday::ALL[index as usize]
}
