//! # Random Source
//!
//! The single randomness seam for the whole crate.
//!
//! ## Why a trait?
//!
//! Production runs are intentionally unseeded (every run is a fresh
//! kitchen), but every selection rule in the catalog and composer must be
//! testable with exact draws. No module is allowed to call an ambient RNG
//! directly — all randomness flows through [`RandomSource`], so a test can
//! swap in a scripted or seeded stream and replay a run draw for draw.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer sampling, the only randomness the engine consumes.
pub trait RandomSource {
    /// Draws a uniform integer in `[low, high)`.
    ///
    /// `high > low` is a caller invariant; every call site in this crate
    /// passes a compile-time-fixed, non-empty range.
    fn uniform(&mut self, low: u32, high: u32) -> u32;
}

/// Production source backed by the thread-local RNG.
///
/// Unseeded by design: visual determinism across runs is a non-goal.
#[derive(Default)]
pub struct ThreadSource {
    rng: rand::rngs::ThreadRng,
}

impl ThreadSource {
    /// Creates a new thread-RNG-backed source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RandomSource for ThreadSource {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..high)
    }
}

/// Seeded source for reproducible runs.
///
/// Same seed, same endless kitchen. Backed by `ChaCha8` — fast, portable,
/// and identical across platforms.
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Creates a source from a 64-bit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..high)
    }
}

/// Scripted source for tests.
///
/// Replays a fixed list of draw values, cycling when exhausted. Each raw
/// value is folded into the requested range (`low + value % width`), so a
/// script can be written as the intended in-range results directly.
pub struct SequenceSource {
    values: Vec<u32>,
    next: usize,
}

impl SequenceSource {
    /// Creates a source that replays `values` in order, cycling.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() {
            return low;
        }
        let raw = self.values[self.next % self.values.len()];
        self.next += 1;
        low + raw % (high - low)
    }
}
