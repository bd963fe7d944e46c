//! Month and weekday names as immutable configuration.
//!
//! Rendering and name parsing go through an explicit [`NameTable`] rather
//! than process-wide locale state; callers that need another language build
//! their own table once and pass it in. Enum ordinal `i` corresponds to
//! table index `i`.

use crate::ParseError;
use crate::types::{Month, Weekday};
use std::fmt;
use std::str::FromStr;

/// Long and short names for months and weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTable {
    pub months: [&'static str; 12],
    pub short_months: [&'static str; 12],
    pub weekdays: [&'static str; 7],
    pub short_weekdays: [&'static str; 7],
}

impl NameTable {
    /// The built-in English table.
    pub const fn english() -> Self {
        Self {
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            short_months: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            weekdays: [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ],
            short_weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    /// Returns the long name of `month`
    pub const fn month_name(&self, month: Month) -> &'static str {
        self.months[month as usize]
    }

    /// Returns the short name of `month`
    pub const fn short_month_name(&self, month: Month) -> &'static str {
        self.short_months[month as usize]
    }

    /// Returns the long name of `weekday`
    pub const fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekdays[weekday as usize]
    }

    /// Returns the short name of `weekday`
    pub const fn short_weekday_name(&self, weekday: Weekday) -> &'static str {
        self.short_weekdays[weekday as usize]
    }

    /// Resolves a month from a 1-12 index string or a long/short name,
    /// ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownMonth` if nothing matches.
    pub fn parse_month(&self, s: &str) -> Result<Month, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if let Ok(index) = trimmed.parse::<u8>() {
            return Month::from_index(index).map_err(ParseError::from);
        }
        for month in Month::ALL {
            if trimmed.eq_ignore_ascii_case(self.month_name(month))
                || trimmed.eq_ignore_ascii_case(self.short_month_name(month))
            {
                return Ok(month);
            }
        }
        Err(ParseError::UnknownMonth(trimmed.to_owned()))
    }

    /// Resolves a weekday from a long/short name, ignoring case and
    /// surrounding whitespace.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownWeekday` if nothing matches.
    pub fn parse_weekday(&self, s: &str) -> Result<Weekday, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        for weekday in Weekday::ALL {
            if trimmed.eq_ignore_ascii_case(self.weekday_name(weekday))
                || trimmed.eq_ignore_ascii_case(self.short_weekday_name(weekday))
            {
                return Ok(weekday);
            }
        }
        Err(ParseError::UnknownWeekday(trimmed.to_owned()))
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NameTable::english().month_name(*self))
    }
}

impl FromStr for Month {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameTable::english().parse_month(s)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NameTable::english().weekday_name(*self))
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameTable::english().parse_weekday(s)
    }
}
