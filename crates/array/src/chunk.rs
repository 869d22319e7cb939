//! Deferred, partitioned evaluation over labeled arrays.
//!
//! A [`ChunkedArray`] holds the values of a [`DataArray`] split into
//! row-blocks along the leading axis, plus a queue of elementwise
//! transforms that are only applied when [`ChunkedArray::compute`] runs.
//! Downstream metric tests use it to assert that results are identical
//! under eager and deferred evaluation.

use std::collections::BTreeMap;

use ndarray::{ArrayD, Axis};

use crate::coord::CoordValues;
use crate::data_array::DataArray;
use crate::error::ArrayError;

/// Elementwise transform applied at compute time.
type ElemOp = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// A [`DataArray`] partitioned into chunks with deferred elementwise
/// transforms.
///
/// Values are copied out of the source at construction; the source is
/// never aliased or mutated.
pub struct ChunkedArray {
    dims: Vec<String>,
    coords: BTreeMap<String, CoordValues>,
    attrs: BTreeMap<String, String>,
    pieces: Vec<ArrayD<f64>>,
    ops: Vec<ElemOp>,
}

impl std::fmt::Debug for ChunkedArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkedArray")
            .field("dims", &self.dims)
            .field("n_chunks", &self.pieces.len())
            .field("pending_ops", &self.ops.len())
            .finish()
    }
}

impl ChunkedArray {
    /// Partitions `source` into row-blocks of `chunk_rows` along the
    /// leading axis. `None` produces a single chunk covering the whole
    /// array.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::EmptyArray`] if the source has no axes or an
    /// empty leading axis, and [`ArrayError::InvalidChunkRows`] for a
    /// chunk size of zero.
    pub fn from_array(source: &DataArray, chunk_rows: Option<usize>) -> Result<Self, ArrayError> {
        if source.ndim() == 0 || source.shape()[0] == 0 {
            return Err(ArrayError::EmptyArray);
        }
        let rows = chunk_rows.unwrap_or(source.shape()[0]);
        if rows == 0 {
            return Err(ArrayError::InvalidChunkRows { rows });
        }
        let pieces: Vec<ArrayD<f64>> = source
            .values()
            .axis_chunks_iter(Axis(0), rows)
            .map(|chunk| chunk.to_owned())
            .collect();
        Ok(Self {
            dims: source.dims().to_vec(),
            coords: source.coords().clone(),
            attrs: source.attrs().clone(),
            pieces,
            ops: Vec::new(),
        })
    }

    /// Queues a deferred elementwise transform. Nothing is evaluated
    /// until [`ChunkedArray::compute`].
    pub fn map_elements(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.ops.push(Box::new(f));
        self
    }

    /// Returns the number of chunks.
    pub fn n_chunks(&self) -> usize {
        self.pieces.len()
    }

    /// Returns the number of queued transforms.
    pub fn n_pending(&self) -> usize {
        self.ops.len()
    }

    /// Applies queued transforms chunk by chunk and reassembles the full
    /// labeled array.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Shape`] if the chunks cannot be concatenated,
    /// which indicates internal corruption and cannot happen for a
    /// `ChunkedArray` built by [`ChunkedArray::from_array`].
    pub fn compute(&self) -> Result<DataArray, ArrayError> {
        let mut evaluated = Vec::with_capacity(self.pieces.len());
        for piece in &self.pieces {
            let mut out = piece.clone();
            for op in &self.ops {
                out.mapv_inplace(|v| op(v));
            }
            evaluated.push(out);
        }
        let views: Vec<_> = evaluated.iter().map(ArrayD::view).collect();
        let data = ndarray::concatenate(Axis(0), &views)?;
        Ok(DataArray::from_parts(
            data,
            self.dims.clone(),
            self.coords.clone(),
            self.attrs.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    fn sample() -> DataArray {
        let data = ArrayD::from_shape_vec(
            IxDyn(&[4, 2]),
            vec![0.1, 0.9, 0.4, 0.6, 0.2, 0.8, 0.3, 0.7],
        )
        .unwrap();
        DataArray::new(
            data,
            &["time", "lat"],
            vec![
                CoordValues::Int(vec![0, 1, 2, 3]),
                CoordValues::Int(vec![0, 1]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn single_chunk_round_trip() {
        let arr = sample();
        let chunked = ChunkedArray::from_array(&arr, None).unwrap();
        assert_eq!(chunked.n_chunks(), 1);
        let computed = chunked.compute().unwrap();
        assert!(computed.all_close(&arr, 0.0));
    }

    #[test]
    fn multi_chunk_round_trip() {
        let arr = sample();
        let chunked = ChunkedArray::from_array(&arr, Some(3)).unwrap();
        // 4 rows in blocks of 3: one full chunk plus a remainder.
        assert_eq!(chunked.n_chunks(), 2);
        let computed = chunked.compute().unwrap();
        assert!(computed.all_close(&arr, 0.0));
    }

    #[test]
    fn deferred_map_matches_eager() {
        let arr = sample();
        let eager = arr.keep_where(|v| v < 0.5);
        let deferred = ChunkedArray::from_array(&arr, Some(2))
            .unwrap()
            .map_elements(|v| if v < 0.5 { v } else { f64::NAN });
        assert_eq!(deferred.n_pending(), 1);
        let computed = deferred.compute().unwrap();
        assert!(computed.all_close(&eager, 0.0));
    }

    #[test]
    fn ops_apply_in_queue_order() {
        let arr = sample();
        let chunked = ChunkedArray::from_array(&arr, Some(1))
            .unwrap()
            .map_elements(|v| v + 1.0)
            .map_elements(|v| v * 2.0);
        let computed = chunked.compute().unwrap();
        // (v + 1) * 2, not v * 2 + 1.
        assert!((computed.get(&[0, 0]).unwrap() - 2.2).abs() < 1e-12);
    }

    #[test]
    fn compute_preserves_labels() {
        let arr = sample().with_attr("source", "test");
        let computed = ChunkedArray::from_array(&arr, Some(2))
            .unwrap()
            .compute()
            .unwrap();
        assert_eq!(computed.dims(), arr.dims());
        assert_eq!(computed.coords(), arr.coords());
        assert_eq!(computed.attr("source"), Some("test"));
    }

    #[test]
    fn zero_chunk_rows_rejected() {
        let arr = sample();
        let err = ChunkedArray::from_array(&arr, Some(0)).unwrap_err();
        assert!(matches!(err, ArrayError::InvalidChunkRows { rows: 0 }));
    }

    #[test]
    fn source_not_mutated() {
        let arr = sample();
        let before = arr.values().to_owned();
        let chunked = ChunkedArray::from_array(&arr, None)
            .unwrap()
            .map_elements(|_| 0.0);
        let _ = chunked.compute().unwrap();
        assert_eq!(arr.values(), before.view());
    }
}
