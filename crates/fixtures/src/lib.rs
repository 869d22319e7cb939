//! Deterministic synthetic climate-style arrays for verification metric
//! tests.
//!
//! [`FixtureFactory`] produces a fixed catalog of named, reproducible
//! labeled arrays: an observation field, deterministic and probabilistic
//! forecasts, masked and zero-filled variants, chunked variants for
//! eager-versus-deferred comparisons, 1-D time-series slices, weight
//! fields, and category bin edges. All values derive from an explicit
//! seed, never from global generator state.

mod error;
mod factory;

pub use error::FixtureError;
pub use factory::FixtureFactory;

/// Standard factory seed.
pub const SEED: u64 = 42;

/// Length of the time axis. Shorter series push the downstream
/// effective-p-value significance computation into degenerate territory.
pub const PERIODS: usize = 12;

/// Length of the latitude axis.
pub const N_LATS: usize = 4;

/// Length of the longitude axis.
pub const N_LONS: usize = 5;

/// Number of ensemble members.
pub const N_MEMBERS: usize = 3;
