//! Daily date sequence generation.

use crate::date::CalDate;

/// Generates a contiguous sequence of daily dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month and year boundaries are
/// handled automatically, leap years included.
///
/// # Example
///
/// ```
/// use verifix_calendar::{CalDate, daily_range};
///
/// let start = CalDate::new(2000, 1, 1).unwrap();
/// let dates = daily_range(start, 3);
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[2], CalDate::new(2000, 1, 3).unwrap());
/// ```
pub fn daily_range(start: CalDate, n_days: usize) -> Vec<CalDate> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.next();
        dates.push(current);
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let start = CalDate::new(2000, 1, 1).unwrap();
        assert!(daily_range(start, 0).is_empty());
    }

    #[test]
    fn single() {
        let start = CalDate::new(2000, 6, 15).unwrap();
        let dates = daily_range(start, 1);
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn january_2000() {
        let start = CalDate::new(2000, 1, 1).unwrap();
        let dates = daily_range(start, 12);
        assert_eq!(dates.len(), 12);
        assert_eq!(dates[0], CalDate::new(2000, 1, 1).unwrap());
        assert_eq!(dates[11], CalDate::new(2000, 1, 12).unwrap());
    }

    #[test]
    fn crosses_leap_february() {
        let start = CalDate::new(2000, 2, 27).unwrap();
        let dates = daily_range(start, 4);
        assert_eq!(dates[2], CalDate::new(2000, 2, 29).unwrap());
        assert_eq!(dates[3], CalDate::new(2000, 3, 1).unwrap());
    }

    #[test]
    fn crosses_year_boundary() {
        let start = CalDate::new(2000, 12, 30).unwrap();
        let dates = daily_range(start, 4);
        assert_eq!(dates[1], CalDate::new(2000, 12, 31).unwrap());
        assert_eq!(dates[2], CalDate::new(2001, 1, 1).unwrap());
        assert_eq!(dates[3], CalDate::new(2001, 1, 2).unwrap());
    }

    #[test]
    fn full_leap_year() {
        let start = CalDate::new(2000, 1, 1).unwrap();
        let dates = daily_range(start, 366);
        assert_eq!(dates.len(), 366);
        let last = dates.last().unwrap();
        assert_eq!(*last, CalDate::new(2000, 12, 31).unwrap());
    }

    #[test]
    fn strictly_increasing() {
        let start = CalDate::new(1999, 12, 28).unwrap();
        let dates = daily_range(start, 10);
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
