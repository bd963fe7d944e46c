mod arith;
mod consts;
mod names;
mod ordinal;
mod prelude;
mod types;

pub use arith::DateInterval;
pub use consts::*;
pub use names::NameTable;
pub use types::{Month, Weekday, days_in_month, is_leap_year, leap_year_count};

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// An immutable calendar date in the proleptic Gregorian calendar,
/// representable both as a (year, month, day) triple and as a serial day
/// number counted from a fixed epoch (serial 2 = 1 January 1900, matching
/// the numbering used by common spreadsheet programs).
///
/// The serial number is canonical: all comparisons go through it, and the
/// cached triple always agrees with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.index()", day)]
pub struct DayDate {
    ordinal: i32,
    year: u16,
    month: types::Month,
    day: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid weekday: {} (must be 1-7)", "_0")]
    InvalidWeekday(u8),
    #[display(
        fmt = "Out-of-range serial day {} (must be {}-{})",
        "_0",
        MIN_ORDINAL,
        MAX_ORDINAL
    )]
    OutOfRange(i64),
}

impl std::error::Error for DateError {}

/// Error type for parsing dates, month names and weekday names from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input is not in the expected shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// A recognised component has an impossible value.
    #[error(transparent)]
    Date(#[from] DateError),

    /// String is not a known month name or index.
    #[error("Unrecognised month: {0}")]
    UnknownMonth(String),

    /// String is not a known weekday name.
    #[error("Unrecognised weekday: {0}")]
    UnknownWeekday(String),

    /// Empty input string.
    #[error("Empty date string")]
    EmptyInput,
}

impl DayDate {
    /// Creates a date from a (year, month, day) triple.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` or `DateError::InvalidDay` if the
    /// triple does not name a real date in the supported range.
    pub fn new(year: u16, month: Month, day: u8) -> Result<Self, DateError> {
        let ordinal = ordinal::to_ordinal(year, month, day)?;
        Ok(Self {
            ordinal,
            year,
            month,
            day,
        })
    }

    /// Creates a date from its serial day number.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the serial is outside
    /// `MIN_ORDINAL..=MAX_ORDINAL`.
    pub fn from_ordinal(ordinal: i32) -> Result<Self, DateError> {
        let (year, month, day) = ordinal::from_ordinal(ordinal)?;
        Ok(Self {
            ordinal,
            year,
            month,
            day,
        })
    }

    /// Creates a date from a platform timestamp, truncating any time of day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the timestamp falls outside the
    /// supported year range.
    pub fn from_system_time(time: SystemTime) -> Result<Self, DateError> {
        let days = match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs() / SECONDS_PER_DAY)
                .map_err(|_| DateError::OutOfRange(i64::MAX))?,
            Err(before_epoch) => {
                let seconds = before_epoch.duration().as_secs();
                -i64::try_from(seconds.div_ceil(SECONDS_PER_DAY))
                    .map_err(|_| DateError::OutOfRange(i64::MIN))?
            }
        };
        let target = i64::from(UNIX_EPOCH_ORDINAL) + days;
        if target < i64::from(MIN_ORDINAL) || target > i64::from(MAX_ORDINAL) {
            return Err(DateError::OutOfRange(target));
        }
        Self::from_ordinal(target as i32)
    }

    /// Returns the platform timestamp for midnight UTC at the start of this
    /// date. Inverse of [`Self::from_system_time`] up to time of day.
    pub fn to_system_time(&self) -> SystemTime {
        let days = i64::from(self.ordinal - UNIX_EPOCH_ORDINAL);
        let seconds = days.unsigned_abs() * SECONDS_PER_DAY;
        if days >= 0 {
            UNIX_EPOCH + Duration::from_secs(seconds)
        } else {
            UNIX_EPOCH - Duration::from_secs(seconds)
        }
    }

    /// Returns the current date according to the system clock.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the clock reads outside the
    /// supported year range.
    pub fn today() -> Result<Self, DateError> {
        Self::from_system_time(SystemTime::now())
    }

    /// Returns the year (1900-9999)
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of the month (1-31)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the serial day number
    #[inline]
    pub const fn ordinal(&self) -> i32 {
        self.ordinal
    }

    /// Returns the day of the week
    pub fn weekday(&self) -> Weekday {
        ordinal::weekday_of(self.ordinal)
    }

    /// Returns true if this date is strictly earlier than `other`
    pub fn is_before(&self, other: Self) -> bool {
        self.ordinal < other.ordinal
    }

    /// Returns true if this date is strictly later than `other`
    pub fn is_after(&self, other: Self) -> bool {
        self.ordinal > other.ordinal
    }

    /// Returns true if both values represent the same date
    pub fn is_on(&self, other: Self) -> bool {
        self.ordinal == other.ordinal
    }

    /// Returns true if this date is on or earlier than `other`
    pub fn is_on_or_before(&self, other: Self) -> bool {
        self.ordinal <= other.ordinal
    }

    /// Returns true if this date is on or later than `other`
    pub fn is_on_or_after(&self, other: Self) -> bool {
        self.ordinal >= other.ordinal
    }

    /// Renders the date as e.g. "9 November 2001" using the given names.
    pub fn format_with(&self, names: &NameTable) -> String {
        format!("{} {} {}", self.day, names.month_name(self.month), self.year)
    }
}

impl PartialOrd for DayDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Serial comparison only; the cached triple never takes part.
        self.ordinal.cmp(&other.ordinal)
    }
}

impl FromStr for DayDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(|p| p.trim()).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got: {trimmed}"
            )));
        }

        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(parts[0].to_owned()))?;
        let month_index = parts[1]
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(parts[2].to_owned()))?;

        let month = Month::from_index(month_index)?;
        Ok(Self::new(year, month, day)?)
    }
}

impl TryFrom<(u16, u8, u8)> for DayDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        let month = Month::from_index(value.1)?;
        Self::new(value.0, month, value.2)
    }
}

impl serde::Serialize for DayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DayDate {
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

    /// Builds a date from raw components, panicking on invalid input.
    /// Test-only shorthand.
    pub(crate) fn date(year: u16, month: u8, day: u8) -> DayDate {
        DayDate::try_from((year, month, day)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_caches_matching_representations() {
        let d = date(2001, 11, 9);
        assert_eq!(d.year(), 2001);
        assert_eq!(d.month(), Month::November);
        assert_eq!(d.day(), 9);
        assert_eq!(d.ordinal(), 37_204);
        assert_eq!(DayDate::from_ordinal(37_204).unwrap(), d);
    }

    #[test]
    fn test_new_rejects_invalid_dates() {
        let result = DayDate::new(1899, Month::December, 31);
        assert!(matches!(result, Err(DateError::InvalidYear(1899))));

        let result = DayDate::new(2023, Month::February, 29);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));

        let result = DayDate::new(2023, Month::June, 0);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_from_ordinal_bounds() {
        assert_eq!(
            DayDate::from_ordinal(MIN_ORDINAL).unwrap(),
            date(1900, 1, 1)
        );
        assert_eq!(
            DayDate::from_ordinal(MAX_ORDINAL).unwrap(),
            date(9999, 12, 31)
        );

        // Serial 1 is the reserved spreadsheet artifact.
        assert!(matches!(
            DayDate::from_ordinal(1),
            Err(DateError::OutOfRange(1))
        ));
        assert!(matches!(
            DayDate::from_ordinal(MAX_ORDINAL + 1),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2001, 11, 9).weekday(), Weekday::Friday);
        assert_eq!(date(1970, 1, 22).weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_comparison_predicates_are_exclusive_and_exhaustive() {
        let pairs = [
            (date(2001, 11, 9), date(2001, 11, 12)),
            (date(2001, 11, 12), date(2001, 11, 9)),
            (date(2001, 11, 9), date(2001, 11, 9)),
            (date(1900, 1, 1), date(9999, 12, 31)),
        ];

        for (a, b) in pairs {
            let holds = [a.is_before(b), a.is_on(b), a.is_after(b)];
            assert_eq!(
                holds.iter().filter(|&&h| h).count(),
                1,
                "exactly one of before/on/after must hold for {a} vs {b}"
            );
            assert_eq!(a.is_on_or_before(b), a.is_before(b) || a.is_on(b));
            assert_eq!(a.is_on_or_after(b), a.is_after(b) || a.is_on(b));
        }
    }

    #[test]
    fn test_ordering_follows_serial() {
        let d1 = date(2001, 11, 9);
        let d2 = date(2001, 11, 12);
        assert!(d1 < d2);
        assert_eq!(d1.cmp(&d2), std::cmp::Ordering::Less);
        assert_eq!(d1.max(d2), d2);

        let mut dates = vec![d2, date(1970, 1, 1), d1];
        dates.sort();
        assert_eq!(dates, vec![date(1970, 1, 1), d1, d2]);
    }

    #[test]
    fn test_display_iso() {
        assert_eq!(date(2001, 11, 9).to_string(), "2001-11-09");
        assert_eq!(date(1900, 1, 1).to_string(), "1900-01-01");
        assert_eq!(date(9999, 12, 31).to_string(), "9999-12-31");
    }

    #[test]
    fn test_format_with_names() {
        let names = NameTable::english();
        assert_eq!(date(2001, 11, 9).format_with(&names), "9 November 2001");
        assert_eq!(date(2004, 2, 29).format_with(&names), "29 February 2004");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2001-11-09".parse::<DayDate>().unwrap(), date(2001, 11, 9));
        assert_eq!(" 2001-11-09 ".parse::<DayDate>().unwrap(), date(2001, 11, 9));
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        let result = "".parse::<DayDate>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));

        let result = "2001-11".parse::<DayDate>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "2001-11-09-05".parse::<DayDate>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "2001-XX-09".parse::<DayDate>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "2001-13-09".parse::<DayDate>();
        assert!(matches!(
            result,
            Err(ParseError::Date(DateError::InvalidMonth(13)))
        ));

        let result = "2023-02-29".parse::<DayDate>();
        assert!(matches!(
            result,
            Err(ParseError::Date(DateError::InvalidDay { .. }))
        ));
    }

    #[test]
    fn test_try_from_triple() {
        let d: DayDate = (2001, 11, 9).try_into().unwrap();
        assert_eq!(d, date(2001, 11, 9));

        let result: Result<DayDate, _> = (2001, 13, 9).try_into();
        assert!(matches!(result, Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2001, 11, 9);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2001-11-09""#);

        let parsed: DayDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<DayDate, _> = serde_json::from_str(r#""2024-13-01""#);
        assert!(result.is_err());

        let result: Result<DayDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());

        let result: Result<DayDate, _> = serde_json::from_str(r#""1899-12-31""#);
        assert!(result.is_err());

        let result: Result<DayDate, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_serde_reconstructs_from_string_alone() {
        // The string form carries only the triple; the serial is re-derived.
        let d = date(2004, 5, 31);
        let json = serde_json::to_string(&d).unwrap();
        let parsed: DayDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ordinal(), d.ordinal());
    }

    #[test]
    fn test_from_system_time() {
        use std::time::Duration;

        let epoch = DayDate::from_system_time(UNIX_EPOCH).unwrap();
        assert_eq!(epoch, date(1970, 1, 1));
        assert_eq!(epoch.ordinal(), UNIX_EPOCH_ORDINAL);

        // Time of day truncates.
        let later = UNIX_EPOCH + Duration::from_secs(86_399);
        assert_eq!(DayDate::from_system_time(later).unwrap(), date(1970, 1, 1));

        let next_day = UNIX_EPOCH + Duration::from_secs(86_400);
        assert_eq!(
            DayDate::from_system_time(next_day).unwrap(),
            date(1970, 1, 2)
        );

        // Before the unix epoch rounds toward earlier days.
        let before = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(
            DayDate::from_system_time(before).unwrap(),
            date(1969, 12, 31)
        );
    }

    #[test]
    fn test_to_system_time() {
        assert_eq!(date(1970, 1, 1).to_system_time(), UNIX_EPOCH);

        let next_day = UNIX_EPOCH + std::time::Duration::from_secs(86_400);
        assert_eq!(date(1970, 1, 2).to_system_time(), next_day);

        // Round trips both before and after the unix epoch.
        for d in [
            date(1900, 1, 1),
            date(1969, 12, 31),
            date(2001, 11, 9),
            date(9999, 12, 31),
        ] {
            assert_eq!(DayDate::from_system_time(d.to_system_time()).unwrap(), d);
        }
    }

    #[test]
    fn test_today_is_in_supported_range() {
        let today = DayDate::today().unwrap();
        assert!(today.year() >= MIN_YEAR);
        assert!(today.year() <= MAX_YEAR);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DateError::InvalidYear(1899).to_string(),
            "Invalid year: 1899 (must be 1900-9999)"
        );
        assert_eq!(
            DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
        assert_eq!(
            DateError::OutOfRange(1).to_string(),
            "Out-of-range serial day 1 (must be 2-2958465)"
        );
    }
}
