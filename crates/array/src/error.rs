//! Error types for verifix-array.

/// Error type for all fallible operations in the verifix-array crate.
///
/// Covers construction-time validation of dimension names and coordinate
/// lengths, out-of-range selection and masking, and shape failures bubbled
/// up from the underlying array library.
#[derive(Debug, thiserror::Error)]
pub enum ArrayError {
    /// Returned when the number of dimension names does not match the
    /// array's dimensionality.
    #[error("dimension count mismatch: expected {expected}, got {got}")]
    DimensionCount {
        /// Number of axes in the data.
        expected: usize,
        /// Number of dimension names supplied.
        got: usize,
    },

    /// Returned when the number of coordinate vectors does not match the
    /// number of dimensions.
    #[error("coordinate count mismatch: expected {expected}, got {got}")]
    CoordCount {
        /// Number of dimensions.
        expected: usize,
        /// Number of coordinate vectors supplied.
        got: usize,
    },

    /// Returned when the same dimension name appears twice.
    #[error("duplicate dimension name: '{name}'")]
    DuplicateDim {
        /// The repeated dimension name.
        name: String,
    },

    /// Returned when a named dimension does not exist on the array.
    #[error("unknown dimension: '{name}'")]
    UnknownDim {
        /// The missing dimension name.
        name: String,
    },

    /// Returned when a coordinate vector's length does not match its axis.
    #[error("coordinate '{dim}' has length {coord_len}, axis has length {axis_len}")]
    CoordLength {
        /// Dimension the coordinate belongs to.
        dim: String,
        /// Length of the coordinate vector.
        coord_len: usize,
        /// Length of the corresponding axis.
        axis_len: usize,
    },

    /// Returned when a selection index is outside its axis.
    #[error("index {index} out of bounds for dimension '{dim}' of length {len}")]
    IndexOutOfBounds {
        /// Dimension being indexed.
        dim: String,
        /// The offending index.
        index: usize,
        /// Length of the axis.
        len: usize,
    },

    /// Returned when a mask block range is empty or extends past its axis.
    #[error("invalid range {start}..{end} for dimension '{dim}' of length {len}")]
    InvalidRange {
        /// Dimension being masked.
        dim: String,
        /// Range start.
        start: usize,
        /// Range end (exclusive).
        end: usize,
        /// Length of the axis.
        len: usize,
    },

    /// Returned when a numeric coordinate is required but the dimension
    /// carries calendar dates.
    #[error("coordinate '{dim}' is not numeric")]
    NonNumericCoord {
        /// Dimension with the non-numeric coordinate.
        dim: String,
    },

    /// Returned when a chunk row count of zero is requested.
    #[error("chunk rows must be positive, got {rows}")]
    InvalidChunkRows {
        /// The offending chunk size.
        rows: usize,
    },

    /// Returned when an operation needs at least one axis with data.
    #[error("array has no data to operate on")]
    EmptyArray,

    /// Wraps a shape error from the underlying array library.
    #[error("shape error: {reason}")]
    Shape {
        /// Description of the underlying shape failure.
        reason: String,
    },
}

impl From<ndarray::ShapeError> for ArrayError {
    fn from(e: ndarray::ShapeError) -> Self {
        ArrayError::Shape {
            reason: e.to_string(),
        }
    }
}
