//! The fixture factory: named, reproducible synthetic arrays.

use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use verifix_array::{ChunkedArray, CoordValues, DataArray, linspace};
use verifix_calendar::{CalDate, daily_range};

use crate::error::FixtureError;
use crate::{N_LATS, N_LONS, N_MEMBERS, PERIODS, SEED};

/// Salt for the observation stream.
const SALT_OBS: u64 = 1;
/// Salt for the probabilistic-forecast stream.
const SALT_FORECAST: u64 = 2;

/// Golden-ratio stride keeping child streams distinct per salt.
const STREAM_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Produces the catalog of synthetic verification arrays.
///
/// Every fixture is a pure function of the factory seed: each base random
/// fixture draws from its own child generator derived from the seed and a
/// per-fixture salt, so repeated construction yields identical values and
/// construction order never matters. Derived fixtures (masked, zeroed,
/// chunked, sliced, weighted) are pure transforms of their parents and
/// never mutate them.
#[derive(Debug, Clone, Copy)]
pub struct FixtureFactory {
    seed: u64,
}

impl Default for FixtureFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureFactory {
    /// Creates a factory with the standard seed ([`SEED`]).
    pub fn new() -> Self {
        Self { seed: SEED }
    }

    /// Creates a factory with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the factory seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn stream(&self, salt: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(salt.wrapping_mul(STREAM_STRIDE)))
    }

    fn start(&self) -> Result<CalDate, FixtureError> {
        Ok(CalDate::new(2000, 1, 1)?)
    }

    fn short_axis(&self) -> Result<Vec<CalDate>, FixtureError> {
        Ok(daily_range(self.start()?, 3))
    }

    /// Time coordinate: [`PERIODS`] consecutive daily dates from
    /// 2000-01-01.
    pub fn times(&self) -> Result<Vec<CalDate>, FixtureError> {
        Ok(daily_range(self.start()?, PERIODS))
    }

    /// Latitude coordinate: grid indices `0..4`.
    pub fn lats(&self) -> Vec<i64> {
        (0..N_LATS as i64).collect()
    }

    /// Longitude coordinate: grid indices `0..5`.
    pub fn lons(&self) -> Vec<i64> {
        (0..N_LONS as i64).collect()
    }

    /// Ensemble member coordinate: indices `0..3`.
    pub fn members(&self) -> Vec<i64> {
        (0..N_MEMBERS as i64).collect()
    }

    /// Observation: shape (time, lat, lon) = (12, 4, 5), uniform in
    /// [0, 1), tagged `source = test`.
    pub fn o(&self) -> Result<DataArray, FixtureError> {
        let times = self.times()?;
        let lats = self.lats();
        let lons = self.lons();
        let mut rng = self.stream(SALT_OBS);
        let shape = IxDyn(&[times.len(), lats.len(), lons.len()]);
        let data = ArrayD::from_shape_fn(shape, |_| rng.random::<f64>());
        debug!(seed = self.seed, "built observation field");
        Ok(DataArray::new(
            data,
            &["time", "lat", "lon"],
            vec![
                CoordValues::Time(times),
                CoordValues::Int(lats),
                CoordValues::Int(lons),
            ],
        )?
        .with_attr("source", "test"))
    }

    /// Probabilistic forecast: shape (member, time, lat, lon) =
    /// (3, 12, 4, 5), uniform in [0, 1), tagged `source = test`.
    pub fn f_prob(&self) -> Result<DataArray, FixtureError> {
        let members = self.members();
        let times = self.times()?;
        let lats = self.lats();
        let lons = self.lons();
        let mut rng = self.stream(SALT_FORECAST);
        let shape = IxDyn(&[members.len(), times.len(), lats.len(), lons.len()]);
        let data = ArrayD::from_shape_fn(shape, |_| rng.random::<f64>());
        debug!(seed = self.seed, "built probabilistic forecast field");
        Ok(DataArray::new(
            data,
            &["member", "time", "lat", "lon"],
            vec![
                CoordValues::Int(members),
                CoordValues::Time(times),
                CoordValues::Int(lats),
                CoordValues::Int(lons),
            ],
        )?
        .with_attr("source", "test"))
    }

    /// Deterministic forecast: the probabilistic forecast with the member
    /// axis fixed at index 0 and dropped.
    pub fn f(&self) -> Result<DataArray, FixtureError> {
        Ok(self.f_prob()?.isel("member", 0)?)
    }

    /// Deterministic-metric alias for the observation.
    pub fn a(&self) -> Result<DataArray, FixtureError> {
        self.o()
    }

    /// Deterministic-metric alias for the forecast.
    pub fn b(&self) -> Result<DataArray, FixtureError> {
        self.f()
    }

    /// Observation with values >= 0.5 replaced by NaN.
    pub fn a_rand_nan(&self) -> Result<DataArray, FixtureError> {
        Ok(self.a()?.keep_where(|v| v < 0.5))
    }

    /// Forecast with values >= 0.5 replaced by NaN.
    pub fn b_rand_nan(&self) -> Result<DataArray, FixtureError> {
        Ok(self.b()?.keep_where(|v| v < 0.5))
    }

    /// Observation with the lat 1..3 by lon 1..3 block NaN for all times.
    pub fn a_fixed_nan(&self) -> Result<DataArray, FixtureError> {
        Ok(self.a()?.mask_block(&[("lat", 1..3), ("lon", 1..3)])?)
    }

    /// Forecast with the lat 1..3 by lon 1..3 block NaN for all times.
    pub fn b_fixed_nan(&self) -> Result<DataArray, FixtureError> {
        Ok(self.b()?.mask_block(&[("lat", 1..3), ("lon", 1..3)])?)
    }

    /// Observation with values >= 0.5 replaced by zero.
    pub fn a_with_zeros(&self) -> Result<DataArray, FixtureError> {
        Ok(self.a()?.fill_where(|v| v < 0.5, 0.0))
    }

    /// Single-chunk deferred wrap of the observation.
    pub fn o_chunked(&self) -> Result<ChunkedArray, FixtureError> {
        Ok(ChunkedArray::from_array(&self.o()?, None)?)
    }

    /// Single-chunk deferred wrap of the probabilistic forecast.
    pub fn f_prob_chunked(&self) -> Result<ChunkedArray, FixtureError> {
        Ok(ChunkedArray::from_array(&self.f_prob()?, None)?)
    }

    /// Single-chunk deferred wrap of `a`.
    pub fn a_chunked(&self) -> Result<ChunkedArray, FixtureError> {
        Ok(ChunkedArray::from_array(&self.a()?, None)?)
    }

    /// Single-chunk deferred wrap of `b`.
    pub fn b_chunked(&self) -> Result<ChunkedArray, FixtureError> {
        Ok(ChunkedArray::from_array(&self.b()?, None)?)
    }

    /// Single-chunk deferred wrap of the randomly masked observation.
    pub fn a_rand_nan_chunked(&self) -> Result<ChunkedArray, FixtureError> {
        Ok(ChunkedArray::from_array(&self.a_rand_nan()?, None)?)
    }

    /// Single-chunk deferred wrap of the randomly masked forecast.
    pub fn b_rand_nan_chunked(&self) -> Result<ChunkedArray, FixtureError> {
        Ok(ChunkedArray::from_array(&self.b_rand_nan()?, None)?)
    }

    /// Time series of `a` at lat 0, lon 0.
    pub fn a_1d(&self) -> Result<DataArray, FixtureError> {
        Ok(self.a()?.isel("lat", 0)?.isel("lon", 0)?)
    }

    /// Time series of `b` at lat 0, lon 0.
    pub fn b_1d(&self) -> Result<DataArray, FixtureError> {
        Ok(self.b()?.isel("lat", 0)?.isel("lon", 0)?)
    }

    /// Literal series [3, NaN, 5] over 2000-01-01..2000-01-03, for
    /// exact-value edge-case tests.
    pub fn a_1d_fixed_nan(&self) -> Result<DataArray, FixtureError> {
        let time = self.short_axis()?;
        let data = ArrayD::from_shape_vec(IxDyn(&[3]), vec![3.0, f64::NAN, 5.0])
            .map_err(verifix_array::ArrayError::from)?;
        Ok(DataArray::new(
            data,
            &["time"],
            vec![CoordValues::Time(time)],
        )?)
    }

    /// Literal series [7, 2, NaN] over the same axis as
    /// [`FixtureFactory::a_1d_fixed_nan`].
    pub fn b_1d_fixed_nan(&self) -> Result<DataArray, FixtureError> {
        let time = self.short_axis()?;
        let data = ArrayD::from_shape_vec(IxDyn(&[3]), vec![7.0, 2.0, f64::NAN])
            .map_err(verifix_array::ArrayError::from)?;
        Ok(DataArray::new(
            data,
            &["time"],
            vec![CoordValues::Time(time)],
        )?)
    }

    /// Time series of `a_with_zeros` at lat 0, lon 0.
    pub fn a_1d_with_zeros(&self) -> Result<DataArray, FixtureError> {
        Ok(self.a_with_zeros()?.isel("lat", 0)?.isel("lon", 0)?)
    }

    /// Cosine-of-latitude weights: |cos(lat)| broadcast to `a`'s shape.
    ///
    /// Latitude grid indices are taken as radians, matching the source
    /// data convention.
    pub fn weights_cos_lat(&self) -> Result<DataArray, FixtureError> {
        Ok(self.a()?.broadcast_coord("lat", |v| v.cos().abs())?)
    }

    /// Latitude weights in degrees: cos(deg2rad(lat)) broadcast to `a`'s
    /// shape, then collapsed to a lat/lon surface at the first time step.
    pub fn weights_lonlat(&self) -> Result<DataArray, FixtureError> {
        Ok(self
            .a()?
            .broadcast_coord("lat", |v| v.to_radians().cos())?
            .isel("time", 0)?)
    }

    /// Literal weight series [1, 2, 3] aligned to the 3-day axis of
    /// [`FixtureFactory::a_1d_fixed_nan`].
    pub fn weights_time(&self) -> Result<DataArray, FixtureError> {
        let time = self.short_axis()?;
        let data = ArrayD::from_shape_vec(IxDyn(&[3]), vec![1.0, 2.0, 3.0])
            .map_err(verifix_array::ArrayError::from)?;
        Ok(DataArray::new(
            data,
            &["time"],
            vec![CoordValues::Time(time)],
        )?)
    }

    /// Single-chunk deferred wrap of the cosine-of-latitude weights.
    pub fn weights_cos_lat_chunked(&self) -> Result<ChunkedArray, FixtureError> {
        Ok(ChunkedArray::from_array(&self.weights_cos_lat()?, None)?)
    }

    /// Category bin edges: 6 evenly spaced values from 0 to 1 + 1e-8.
    ///
    /// The epsilon above 1 keeps uniform [0, 1) samples strictly inside
    /// the final bin.
    pub fn category_edges(&self) -> Vec<f64> {
        linspace(0.0, 1.0 + 1e-8, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_lengths() {
        let factory = FixtureFactory::new();
        assert_eq!(factory.times().unwrap().len(), 12);
        assert_eq!(factory.lats(), vec![0, 1, 2, 3]);
        assert_eq!(factory.lons(), vec![0, 1, 2, 3, 4]);
        assert_eq!(factory.members(), vec![0, 1, 2]);
    }

    #[test]
    fn observation_shape_and_attrs() {
        let o = FixtureFactory::new().o().unwrap();
        assert_eq!(o.shape(), &[12, 4, 5]);
        assert_eq!(
            o.dims(),
            &["time".to_string(), "lat".to_string(), "lon".to_string()]
        );
        assert_eq!(o.attr("source"), Some("test"));
    }

    #[test]
    fn forecast_shape() {
        let f_prob = FixtureFactory::new().f_prob().unwrap();
        assert_eq!(f_prob.shape(), &[3, 12, 4, 5]);
        assert_eq!(f_prob.dims()[0], "member");
    }

    #[test]
    fn values_in_unit_interval() {
        let factory = FixtureFactory::new();
        for arr in [factory.o().unwrap(), factory.f_prob().unwrap()] {
            for &v in arr.values().iter() {
                assert!((0.0..1.0).contains(&v));
            }
        }
    }

    #[test]
    fn aliases_match_parents() {
        let factory = FixtureFactory::new();
        assert!(factory.a().unwrap().all_close(&factory.o().unwrap(), 0.0));
        assert!(factory.b().unwrap().all_close(&factory.f().unwrap(), 0.0));
    }

    #[test]
    fn one_dimensional_slices() {
        let factory = FixtureFactory::new();
        let a_1d = factory.a_1d().unwrap();
        assert_eq!(a_1d.dims(), &["time".to_string()]);
        assert_eq!(a_1d.shape(), &[12]);
        let a = factory.a().unwrap();
        for t in 0..12 {
            assert_eq!(a_1d.get(&[t]), a.get(&[t, 0, 0]));
        }
    }

    #[test]
    fn distinct_seeds_differ() {
        let o_default = FixtureFactory::new().o().unwrap();
        let o_other = FixtureFactory::with_seed(7).o().unwrap();
        assert!(!o_default.all_close(&o_other, 0.0));
    }

    #[test]
    fn observation_and_forecast_streams_differ() {
        let factory = FixtureFactory::new();
        let o = factory.o().unwrap();
        let f_prob = factory.f_prob().unwrap();
        // Same leading 60 draws would mean the streams collided.
        let o_flat: Vec<f64> = o.values().iter().copied().take(60).collect();
        let f_flat: Vec<f64> = f_prob.values().iter().copied().take(60).collect();
        assert_ne!(o_flat, f_flat);
    }
}
