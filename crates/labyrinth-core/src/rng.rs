//! Injected, reseedable random source.
//!
//! Carving, dead-end removal and tie-breaking all draw from a
//! [`RandomSource`] passed in by the caller, never from a global
//! generator. The production source is [`SeededRng`], a ChaCha8 stream
//! keyed by a `u64` seed, so identical seeds produce bit-identical mazes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Narrow interface over a pseudo-random integer stream.
pub trait RandomSource {
    /// Uniform integer in `0..bound`.
    ///
    /// `bound == 0` returns 0 without advancing the stream.
    fn next_int(&mut self, bound: usize) -> usize;
}

/// Deterministic ChaCha8-backed [`RandomSource`].
#[derive(Clone, Debug)]
pub struct SeededRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl SeededRng {
    /// Create a source positioned at the start of the stream for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Restart the stream from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.inner = ChaCha8Rng::seed_from_u64(seed);
    }

    /// The seed this stream was last (re)started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn next_int(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.inner.random_range(0..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self, bound: usize) -> usize {
        (**self).next_int(bound)
    }
}

/// Fisher–Yates shuffle driven by `rng`.
///
/// Walks from the back, swapping slot `i` with a uniform pick in `0..=i`.
pub fn shuffle<R: RandomSource + ?Sized, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_int(i + 1);
        items.swap(i, j);
    }
}

/// Uniform pick from a slice. Returns `None` for an empty slice.
pub fn pick<'a, R: RandomSource + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_int(items.len()))
}
