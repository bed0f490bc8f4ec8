//! Uniform index sources used for tie-breaking.

use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IteratorRandom;

/// Supplies uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `[0, bound)`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: rand::Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Non-deterministic source seeded from the operating system.
    pub fn from_entropy() -> Self {
        RngSource::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (0..bound).choose(&mut self.rng).unwrap_or(0)
    }
}

/// Replays a fixed sequence of indices, wrapping each into range.
///
/// Intended for tests that need a predictable tie-break.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        SequenceSource {
            values: values.into(),
            pos: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() || bound == 0 {
            return 0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value % bound
    }
}
