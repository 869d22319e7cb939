//! Gregorian daily calendar support for verifix time axes.
//!
//! Provides [`CalDate`], a proleptic Gregorian date at daily resolution,
//! and [`daily_range`] for building contiguous daily time coordinates.

mod date;
mod error;
mod sequence;

pub use date::{CalDate, days_in_month, is_leap_year};
pub use error::CalendarError;
pub use sequence::daily_range;
