//! Labeled multi-dimensional array.

use std::collections::BTreeMap;
use std::ops::Range;

use ndarray::{ArrayD, ArrayViewD, Axis};

use crate::coord::CoordValues;
use crate::error::ArrayError;

/// A multi-dimensional `f64` array whose axes carry named coordinate
/// metadata.
///
/// Dimension names are unique, each dimension has a coordinate vector of
/// matching length, and free-form string attributes tag provenance. All
/// transforms return new arrays; a derived array never aliases its
/// parent's storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray {
    data: ArrayD<f64>,
    dims: Vec<String>,
    coords: BTreeMap<String, CoordValues>,
    attrs: BTreeMap<String, String>,
}

impl DataArray {
    /// Creates a labeled array from data, dimension names, and coordinate
    /// vectors given in dimension order.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::DimensionCount`] if the number of names does
    /// not match the data's dimensionality,
    /// [`ArrayError::CoordCount`] if the number of coordinate vectors does
    /// not match the number of dimensions,
    /// [`ArrayError::DuplicateDim`] if a dimension name repeats, and
    /// [`ArrayError::CoordLength`] if a coordinate's length differs from
    /// its axis length.
    pub fn new(
        data: ArrayD<f64>,
        dims: &[&str],
        coords: Vec<CoordValues>,
    ) -> Result<Self, ArrayError> {
        if dims.len() != data.ndim() {
            return Err(ArrayError::DimensionCount {
                expected: data.ndim(),
                got: dims.len(),
            });
        }
        if coords.len() != dims.len() {
            return Err(ArrayError::CoordCount {
                expected: dims.len(),
                got: coords.len(),
            });
        }
        for (i, name) in dims.iter().enumerate() {
            if dims[..i].contains(name) {
                return Err(ArrayError::DuplicateDim {
                    name: (*name).to_string(),
                });
            }
        }
        for (axis, (name, coord)) in dims.iter().zip(&coords).enumerate() {
            let axis_len = data.shape()[axis];
            if coord.len() != axis_len {
                return Err(ArrayError::CoordLength {
                    dim: (*name).to_string(),
                    coord_len: coord.len(),
                    axis_len,
                });
            }
        }
        let dims: Vec<String> = dims.iter().map(|d| (*d).to_string()).collect();
        let coords = dims.iter().cloned().zip(coords).collect();
        Ok(Self {
            data,
            dims,
            coords,
            attrs: BTreeMap::new(),
        })
    }

    /// Rebuilds an array from already-validated parts.
    pub(crate) fn from_parts(
        data: ArrayD<f64>,
        dims: Vec<String>,
        coords: BTreeMap<String, CoordValues>,
        attrs: BTreeMap<String, String>,
    ) -> Self {
        Self {
            data,
            dims,
            coords,
            attrs,
        }
    }

    /// Attaches an attribute, returning the modified array.
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.insert(key.to_string(), value.to_string());
        self
    }

    /// Returns the axis lengths.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Returns the number of dimensions.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Returns the dimension names in axis order.
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// Returns the coordinate vector for a dimension, if present.
    pub fn coord(&self, dim: &str) -> Option<&CoordValues> {
        self.coords.get(dim)
    }

    /// Returns all coordinate vectors keyed by dimension name.
    pub fn coords(&self) -> &BTreeMap<String, CoordValues> {
        &self.coords
    }

    /// Returns an attribute value, if present.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Returns all attributes.
    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    /// Returns a view of the underlying values.
    pub fn values(&self) -> ArrayViewD<'_, f64> {
        self.data.view()
    }

    /// Returns the value at a full index, or `None` if out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Returns the axis position of a named dimension.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::UnknownDim`] if the dimension does not exist.
    pub fn axis_of(&self, dim: &str) -> Result<usize, ArrayError> {
        self.dims
            .iter()
            .position(|d| d == dim)
            .ok_or_else(|| ArrayError::UnknownDim {
                name: dim.to_string(),
            })
    }

    /// Selects a single index along a named dimension and drops that
    /// dimension and its coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::UnknownDim`] for an unknown dimension and
    /// [`ArrayError::IndexOutOfBounds`] if `index` exceeds the axis.
    pub fn isel(&self, dim: &str, index: usize) -> Result<Self, ArrayError> {
        let axis = self.axis_of(dim)?;
        let len = self.data.shape()[axis];
        if index >= len {
            return Err(ArrayError::IndexOutOfBounds {
                dim: dim.to_string(),
                index,
                len,
            });
        }
        let data = self.data.index_axis(Axis(axis), index).to_owned();
        let dims: Vec<String> = self
            .dims
            .iter()
            .filter(|d| d.as_str() != dim)
            .cloned()
            .collect();
        let mut coords = self.coords.clone();
        coords.remove(dim);
        Ok(Self::from_parts(data, dims, coords, self.attrs.clone()))
    }

    /// Keeps values where `pred` holds and replaces the rest with NaN.
    pub fn keep_where(&self, pred: impl Fn(f64) -> bool) -> Self {
        let data = self.data.mapv(|v| if pred(v) { v } else { f64::NAN });
        Self::from_parts(
            data,
            self.dims.clone(),
            self.coords.clone(),
            self.attrs.clone(),
        )
    }

    /// Keeps values where `pred` holds and replaces the rest with `fill`.
    pub fn fill_where(&self, pred: impl Fn(f64) -> bool, fill: f64) -> Self {
        let data = self.data.mapv(|v| if pred(v) { v } else { fill });
        Self::from_parts(
            data,
            self.dims.clone(),
            self.coords.clone(),
            self.attrs.clone(),
        )
    }

    /// Replaces the block spanned by the given index ranges with NaN.
    ///
    /// Each `(dim, range)` pair restricts one named dimension; dimensions
    /// not named are covered in full. The parent array is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::UnknownDim`] for an unknown dimension and
    /// [`ArrayError::InvalidRange`] for an empty range or one extending
    /// past its axis.
    pub fn mask_block(&self, block: &[(&str, Range<usize>)]) -> Result<Self, ArrayError> {
        let mut axis_ranges: Vec<(usize, Range<usize>)> = Vec::with_capacity(block.len());
        for (dim, range) in block {
            let axis = self.axis_of(dim)?;
            let len = self.data.shape()[axis];
            if range.start >= range.end || range.end > len {
                return Err(ArrayError::InvalidRange {
                    dim: (*dim).to_string(),
                    start: range.start,
                    end: range.end,
                    len,
                });
            }
            axis_ranges.push((axis, range.clone()));
        }
        let mut data = self.data.clone();
        for (idx, value) in data.indexed_iter_mut() {
            let inside = axis_ranges
                .iter()
                .all(|(axis, range)| range.contains(&idx[*axis]));
            if inside {
                *value = f64::NAN;
            }
        }
        Ok(Self::from_parts(
            data,
            self.dims.clone(),
            self.coords.clone(),
            self.attrs.clone(),
        ))
    }

    /// Builds an array of this array's shape whose every element is
    /// `f(coordinate value)` along the named dimension, broadcast over
    /// all other dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::UnknownDim`] for an unknown dimension and
    /// [`ArrayError::NonNumericCoord`] if the dimension carries calendar
    /// dates instead of numbers.
    pub fn broadcast_coord(
        &self,
        dim: &str,
        f: impl Fn(f64) -> f64,
    ) -> Result<Self, ArrayError> {
        let axis = self.axis_of(dim)?;
        let coord = self
            .coords
            .get(dim)
            .ok_or_else(|| ArrayError::UnknownDim {
                name: dim.to_string(),
            })?;
        let values: Vec<f64> = (0..coord.len())
            .map(|i| coord.as_f64(i))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| ArrayError::NonNumericCoord {
                dim: dim.to_string(),
            })?;
        let data = ArrayD::from_shape_fn(self.data.raw_dim(), |idx| f(values[idx[axis]]));
        Ok(Self::from_parts(
            data,
            self.dims.clone(),
            self.coords.clone(),
            BTreeMap::new(),
        ))
    }

    /// Returns `true` if both arrays have the same dimensions, coordinates,
    /// and elementwise values within `tol`, with NaN matching NaN.
    pub fn all_close(&self, other: &Self, tol: f64) -> bool {
        if self.dims != other.dims
            || self.coords != other.coords
            || self.data.shape() != other.data.shape()
        {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&x, &y)| (x.is_nan() && y.is_nan()) || (x - y).abs() <= tol)
    }
}
