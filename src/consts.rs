use crate::types::Weekday;

/// Earliest supported year (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Latest supported year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Serial day number of 1 January `MIN_YEAR`.
///
/// Serial 1 is reserved, matching the numbering used by common spreadsheet
/// programs, so the supported range starts at 2.
pub const EPOCH_ORDINAL: i32 = 2;

/// Smallest valid serial day number (1 January 1900)
pub const MIN_ORDINAL: i32 = EPOCH_ORDINAL;

/// Largest valid serial day number (31 December 9999)
pub const MAX_ORDINAL: i32 = 2_958_465;

/// Weekday of `EPOCH_ORDINAL` (1 January 1900 was a Monday).
/// Single calibration point from which every other weekday is derived.
pub const EPOCH_WEEKDAY: Weekday = Weekday::Monday;

/// Serial day number of 1 January 1970
pub const UNIX_EPOCH_ORDINAL: i32 = 25_569;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a week
pub const DAYS_PER_WEEK: i32 = 7;

pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Cumulative days before each month in a non-leap year (index 0 unused).
/// Months from March onward gain one day in leap years.
pub(crate) const DAYS_BEFORE_MONTH: [i32; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
