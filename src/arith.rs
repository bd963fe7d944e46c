//! Calendar arithmetic on [`DayDate`] values: day/month/year offsets,
//! weekday searches and range membership.

use crate::consts::{DAYS_PER_WEEK, MAX_ORDINAL, MIN_ORDINAL};
use crate::types::{Month, Weekday, days_in_month};
use crate::{DateError, DayDate};

/// Boundary-inclusion policy for [`DayDate::is_in_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateInterval {
    /// Both endpoints excluded
    Open,
    /// Start included, end excluded
    ClosedStart,
    /// Start excluded, end included
    ClosedEnd,
    /// Both endpoints included
    Closed,
}

impl DateInterval {
    pub(crate) const fn contains(self, ordinal: i32, left: i32, right: i32) -> bool {
        match self {
            Self::Open => left < ordinal && ordinal < right,
            Self::ClosedStart => left <= ordinal && ordinal < right,
            Self::ClosedEnd => left < ordinal && ordinal <= right,
            Self::Closed => left <= ordinal && ordinal <= right,
        }
    }
}

impl DayDate {
    /// Returns the date `days` days after this one (negative moves backward).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported
    /// serial range.
    pub fn plus_days(&self, days: i32) -> Result<Self, DateError> {
        let target = i64::from(self.ordinal()) + i64::from(days);
        if target < i64::from(MIN_ORDINAL) || target > i64::from(MAX_ORDINAL) {
            return Err(DateError::OutOfRange(target));
        }
        Self::from_ordinal(target as i32)
    }

    /// Returns the date `months` months after this one (negative moves
    /// backward). The day of month is clamped to the target month's last
    /// day, never rolled over: 31 May + 1 month = 30 June, not 1 July.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the target year leaves the
    /// supported range.
    pub fn plus_months(&self, months: i32) -> Result<Self, DateError> {
        // Widened to i64 so extreme offsets fail instead of wrapping.
        let total =
            12 * i64::from(self.year()) + i64::from(self.month().index()) - 1 + i64::from(months);
        let target = total.div_euclid(12);
        let month = Month::ALL[total.rem_euclid(12) as usize];
        let year = u16::try_from(target).map_err(|_| DateError::InvalidYear(target))?;
        let day = self.day().min(days_in_month(year, month));
        Self::new(year, month, day)
    }

    /// Returns the date `years` years after this one (negative moves
    /// backward). The day of month is clamped, so 29 February maps to
    /// 28 February in a non-leap target year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the target year leaves the
    /// supported range.
    pub fn plus_years(&self, years: i32) -> Result<Self, DateError> {
        let target = i64::from(self.year()) + i64::from(years);
        let year = u16::try_from(target).map_err(|_| DateError::InvalidYear(target))?;
        let day = self.day().min(days_in_month(year, self.month()));
        Self::new(year, self.month(), day)
    }

    /// Latest date strictly before this one that falls on `target`.
    /// If this date already falls on `target`, the result is 7 days earlier.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported
    /// serial range.
    pub fn previous_weekday(&self, target: Weekday) -> Result<Self, DateError> {
        let base = i32::from(self.weekday().days_from_monday());
        let goal = i32::from(target.days_from_monday());
        let mut back = (base - goal).rem_euclid(DAYS_PER_WEEK);
        if back == 0 {
            back = DAYS_PER_WEEK;
        }
        self.plus_days(-back)
    }

    /// Earliest date strictly after this one that falls on `target`.
    /// If this date already falls on `target`, the result is 7 days later.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported
    /// serial range.
    pub fn following_weekday(&self, target: Weekday) -> Result<Self, DateError> {
        let base = i32::from(self.weekday().days_from_monday());
        let goal = i32::from(target.days_from_monday());
        let mut forward = (goal - base).rem_euclid(DAYS_PER_WEEK);
        if forward == 0 {
            forward = DAYS_PER_WEEK;
        }
        self.plus_days(forward)
    }

    /// Date closest to this one that falls on `target` (this date itself if
    /// it already does). When the candidates are 3 days back and 4 days
    /// ahead, the earlier date wins; callers depend on that exact choice.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported
    /// serial range.
    pub fn nearest_weekday(&self, target: Weekday) -> Result<Self, DateError> {
        let base = i32::from(self.weekday().days_from_monday());
        let goal = i32::from(target.days_from_monday());
        let mut adjust = (goal - base).rem_euclid(DAYS_PER_WEEK);
        if adjust > 3 {
            adjust -= DAYS_PER_WEEK;
        }
        self.plus_days(adjust)
    }

    /// Returns true if this date lies between `d1` and `d2`, with endpoint
    /// handling controlled by `interval`. The order of `d1` and `d2` does
    /// not matter.
    pub fn is_in_range(&self, d1: Self, d2: Self, interval: DateInterval) -> bool {
        let left = d1.ordinal().min(d2.ordinal());
        let right = d1.ordinal().max(d2.ordinal());
        interval.contains(self.ordinal(), left, right)
    }

    /// Returns this date rolled forward to the last day of its month.
    pub fn end_of_month(&self) -> Self {
        let last = days_in_month(self.year(), self.month());
        // Same year and month with a day the month is known to contain.
        Self::new(self.year(), self.month(), last).unwrap_or(*self)
    }

    /// Signed number of days between this date and `other`: positive if this
    /// date is later, negative if earlier.
    pub fn days_since(&self, other: Self) -> i32 {
        self.ordinal() - other.ordinal()
    }
}
