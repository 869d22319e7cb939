//! Error types for verifix-fixtures.

/// Error type for all fallible operations in the verifix-fixtures crate.
///
/// Fixture construction only fails on internal contract violations (a
/// shape or coordinate mismatch in the factory itself); wrapping the
/// upstream errors keeps those failures diagnosable instead of panicking.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Wraps an error originating from the verifix-array crate.
    #[error("array error: {reason}")]
    Array {
        /// Description of the underlying array failure.
        reason: String,
    },

    /// Wraps an error originating from the verifix-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<verifix_array::ArrayError> for FixtureError {
    fn from(e: verifix_array::ArrayError) -> Self {
        FixtureError::Array {
            reason: e.to_string(),
        }
    }
}

impl From<verifix_calendar::CalendarError> for FixtureError {
    fn from(e: verifix_calendar::CalendarError) -> Self {
        FixtureError::Calendar {
            reason: e.to_string(),
        }
    }
}
