//! Proleptic Gregorian date at daily resolution.

use std::fmt;

use crate::error::CalendarError;

/// Days per month in a non-leap year, indexed by `month - 1`.
const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian
/// calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let base = MONTH_LENGTHS[usize::from(month - 1)];
    if month == 2 && is_leap_year(year) {
        Ok(base + 1)
    } else {
        Ok(base)
    }
}

/// A proleptic Gregorian calendar date at daily resolution.
///
/// Used as the `time` coordinate value of labeled arrays. Ordered
/// chronologically and displayed as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalDate {
    /// Creates a new `CalDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for the
    /// Gregorian calendar (leap years accounted for).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay { day, month, max_day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the next calendar day.
    ///
    /// Month ends roll over to the next month; December 31 wraps to
    /// January 1 of the following year.
    pub fn next(self) -> Self {
        let max_day =
            days_in_month(self.year, self.month).expect("CalDate always holds a valid month");
        if self.day < max_day {
            Self {
                year: self.year,
                month: self.month,
                day: self.day + 1,
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }
}

impl fmt::Display for CalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
