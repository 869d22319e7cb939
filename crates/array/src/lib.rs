//! Labeled multi-dimensional arrays for verifix synthetic data.
//!
//! A [`DataArray`] is an `f64` array whose axes carry named coordinate
//! metadata (time, lat, lon, member) plus free-form attributes, with pure
//! selection, masking, and broadcast transforms. [`ChunkedArray`] wraps a
//! `DataArray` for partitioned, deferred evaluation so downstream tests
//! can compare eager and deferred results.

mod chunk;
mod coord;
mod data_array;
mod error;
mod grid;

pub use chunk::ChunkedArray;
pub use coord::CoordValues;
pub use data_array::DataArray;
pub use error::ArrayError;
pub use grid::linspace;
