//! Uniform random sources
//!
//! Every random draw in the simulation goes through [`UniformSource`], so a
//! match can run on a seeded stream, an OS-entropy stream, or a scripted
//! sequence of values in tests.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{MatchError, Result};

/// A source of uniform values in `[0, 1)`.
pub trait UniformSource {
    /// Next value uniformly distributed in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Uniform index into a collection of `len` items.
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on empty collection");
        let idx = (self.next_uniform() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

/// Adapter from any `rand` generator to [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore> {
    rng: R,
}

/// Reproducible source: same seed, same match.
pub type SeededSource = RngSource<ChaCha8Rng>;

/// Production source seeded from OS entropy.
pub type EntropySource = RngSource<StdRng>;

impl<R: RngCore> RngSource<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }
}

impl<R: RngCore> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values outside `[0, 1)` are clamped into range.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(MatchError::EmptyScript);
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self { values: vec![value], cursor: 0 }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
