//! Error types for verifix-calendar.

/// Error type for all fallible operations in the verifix-calendar crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month is outside 1..=12.
    #[error("invalid month: {month} (expected 1..=12)")]
    InvalidMonth {
        /// The offending month value.
        month: u8,
    },

    /// Returned when a day is invalid for the given month and year.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The offending day value.
        day: u8,
        /// The month the day was checked against.
        month: u8,
        /// The largest valid day for that month.
        max_day: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (expected 1..=12)");
    }

    #[test]
    fn display_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 2,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 2 (max 29)");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<CalendarError>();
    }
}
