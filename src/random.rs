//! Random number service shared by every evolutionary operator.
//!
//! A run owns exactly one engine. Operators never create their own; they
//! receive `&mut R` from the runner, so tests can substitute a seeded
//! engine and replay a run bit-for-bit.
//!
//! Distributions are cheap to re-parameterize: [`next_int`] and
//! [`next_real`] take their bounds per call, which is how parent sampling
//! over `[0, population_len - 1]` is expressed without touching the engine.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;

/// Creates a reproducible engine from a fixed seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an engine seeded from the operating system's entropy source.
pub fn entropy_rng() -> StdRng {
    StdRng::from_os_rng()
}

/// Uniform integer in `[low, high]` (inclusive).
///
/// # Panics
/// Panics if `low > high`.
pub fn next_int<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> i64 {
    assert!(low <= high, "empty integer range [{low}, {high}]");
    rng.random_range(low..=high)
}

/// Uniform real in `[low, high]` (inclusive).
///
/// # Panics
/// Panics if `low > high` or either bound is not finite.
pub fn next_real<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    assert!(
        low.is_finite() && high.is_finite() && low <= high,
        "invalid real range [{low}, {high}]"
    );
    rng.random_range(low..=high)
}

/// Uniform index in `[0, len - 1]`.
///
/// # Panics
/// Panics if `len == 0`; sampling from an empty pool means a configuration
/// check was bypassed.
pub fn index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    assert!(len > 0, "cannot sample an index from an empty pool");
    rng.random_range(0..len)
}

/// Shuffles a slice in place (Fisher–Yates).
pub fn shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    slice.shuffle(rng);
}

/// Inclusive integer range used for gene initialization and mutation deltas.
///
/// # Examples
///
/// ```
/// use u_evolution::random::{create_rng, IntRange};
///
/// let range = IntRange::new(-5, 5).unwrap();
/// let mut rng = create_rng(7);
/// let v = range.sample(&mut rng);
/// assert!(range.contains(v));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntRange {
    min: i64,
    max: i64,
}

impl IntRange {
    /// Creates a range, rejecting `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// The degenerate range `[value, value]`.
    pub fn single(value: i64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Whether `value` lies within the range.
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Draws one value uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        next_int(rng, self.min, self.max)
    }
}
