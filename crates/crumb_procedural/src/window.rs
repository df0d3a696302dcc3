//! # Generation Window
//!
//! Counts every chunk ever produced in the run and decides which trailing
//! chunks have fallen out of the retention window.
//!
//! The eviction test is a stateless per-chunk predicate, re-evaluated every
//! tick rather than fired once. That makes it tolerant of any host cadence:
//! a missed tick evicts a chunk late, never early, and a repeat check is a
//! no-op. The spawn counter and the retention size reset only together —
//! resetting one without the other silently shifts the eviction math.

use crate::chunk::ChunkId;

/// Tracks total production and the trailing retention window.
#[derive(Clone, Copy, Debug)]
pub struct GenerationWindow {
    /// Chunks produced since the last reset.
    total_generated: u64,
    /// How many of the newest chunks stay alive.
    retention: u64,
}

impl GenerationWindow {
    /// Creates a window with the given retention size.
    #[must_use]
    pub const fn new(retention: u64) -> Self {
        Self {
            total_generated: 0,
            retention,
        }
    }

    /// Records one spawned chunk and returns its id.
    ///
    /// Ids are handed out gap-free from 0: the id is the pre-increment
    /// counter value.
    pub fn record_spawn(&mut self) -> ChunkId {
        let id = ChunkId(self.total_generated);
        self.total_generated += 1;
        id
    }

    /// True once `id` has fallen out of the trailing window.
    ///
    /// A chunk is stale when more than `retention` newer chunks exist, i.e.
    /// `id + retention < total_generated`. Until `retention` chunks have
    /// been produced nothing is stale.
    #[inline]
    #[must_use]
    pub const fn should_evict(&self, id: ChunkId) -> bool {
        id.value() + self.retention < self.total_generated
    }

    /// Chunks produced since the last reset.
    #[inline]
    #[must_use]
    pub const fn total_generated(&self) -> u64 {
        self.total_generated
    }

    /// The retention window size.
    #[inline]
    #[must_use]
    pub const fn retention(&self) -> u64 {
        self.retention
    }

    /// Resets the spawn counter for a new run.
    pub fn reset(&mut self) {
        self.total_generated = 0;
    }
}
