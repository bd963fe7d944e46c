use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MIN_YEAR,
};
use serde::{Deserialize, Serialize};

/// A month of the Gregorian year, January through December.
/// Carries the conventional 1-based index (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Creates a Month from its 1-based index (January = 1, December = 12).
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the index is outside `1..=12`.
    pub const fn from_index(index: u8) -> Result<Self, DateError> {
        match index {
            1 => Ok(Self::January),
            2 => Ok(Self::February),
            3 => Ok(Self::March),
            4 => Ok(Self::April),
            5 => Ok(Self::May),
            6 => Ok(Self::June),
            7 => Ok(Self::July),
            8 => Ok(Self::August),
            9 => Ok(Self::September),
            10 => Ok(Self::October),
            11 => Ok(Self::November),
            12 => Ok(Self::December),
            _ => Err(DateError::InvalidMonth(index)),
        }
    }

    /// Returns the 1-based month index (January = 1)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the quarter this month belongs to (1-4)
    pub const fn quarter(self) -> u8 {
        (self as u8) / 3 + 1
    }

    /// Returns the last day of this month in the given year
    pub const fn last_day(self, year: u16) -> u8 {
        days_in_month(year, self)
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.index()
    }
}

/// A day of the week, Monday through Sunday.
/// Carries the ISO 8601 index (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Creates a Weekday from its ISO index (Monday = 1, Sunday = 7).
    ///
    /// # Errors
    /// Returns `DateError::InvalidWeekday` if the index is outside `1..=7`.
    pub const fn from_index(index: u8) -> Result<Self, DateError> {
        match index {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(DateError::InvalidWeekday(index)),
        }
    }

    /// Returns the ISO weekday index (Monday = 1, Sunday = 7)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Offset from Monday (0-6), used for modular weekday arithmetic
    #[inline]
    pub(crate) const fn days_from_monday(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: Month) -> u8 {
    if matches!(month, Month::February) && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.index() as usize]
    }
}

/// Number of leap years since 1900, up to and including `year`.
/// Years before 1900 count as zero.
pub const fn leap_year_count(year: u16) -> u16 {
    if year < MIN_YEAR {
        return 0;
    }
    let leap4 = (year - 1896) / 4;
    let leap100 = (year - 1800) / 100;
    let leap400 = (year - 1600) / 400;
    leap4 - leap100 + leap400
}
