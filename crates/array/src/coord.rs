//! Coordinate vectors attached to array dimensions.

use verifix_calendar::CalDate;

/// Coordinate values labelling one dimension of a [`crate::DataArray`].
///
/// A coordinate vector has one entry per index along its axis: calendar
/// dates for time axes, integers for spatial or ensemble axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordValues {
    /// Calendar-date coordinate (a time axis).
    Time(Vec<CalDate>),
    /// Integer coordinate (latitude/longitude grid index, ensemble member).
    Int(Vec<i64>),
}

impl CoordValues {
    /// Returns the number of coordinate entries.
    pub fn len(&self) -> usize {
        match self {
            CoordValues::Time(v) => v.len(),
            CoordValues::Int(v) => v.len(),
        }
    }

    /// Returns `true` if the coordinate has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the numeric value at `index`, or `None` for time
    /// coordinates or out-of-range indices.
    pub fn as_f64(&self, index: usize) -> Option<f64> {
        match self {
            CoordValues::Time(_) => None,
            CoordValues::Int(v) => v.get(index).map(|&x| x as f64),
        }
    }

    /// Returns the integer entries, or `None` for time coordinates.
    pub fn as_int(&self) -> Option<&[i64]> {
        match self {
            CoordValues::Time(_) => None,
            CoordValues::Int(v) => Some(v),
        }
    }

    /// Returns the date entries, or `None` for integer coordinates.
    pub fn as_time(&self) -> Option<&[CalDate]> {
        match self {
            CoordValues::Time(v) => Some(v),
            CoordValues::Int(_) => None,
        }
    }

}
