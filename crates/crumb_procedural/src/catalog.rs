//! # Chunk Catalog
//!
//! The fixed variant table and its weighting.
//!
//! One die, seven faces: two faces are Normal, one each for the five
//! specials. The 2-in-7 lean toward Normal is intentional — Normal chunks
//! are the structural backbone, everything else is an insertion. Tutorial
//! never appears on the die; it is produced once, explicitly, before the
//! catalog-driven loop begins.

use crate::chunk::ChunkVariant;
use crate::rng::RandomSource;

/// Number of faces on the variant die.
pub const VARIANT_DIE_FACES: u32 = 7;

/// Weighted selector over the fixed chunk variant set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChunkCatalog;

impl ChunkCatalog {
    /// Creates the catalog. There is only one; the table is compile-time.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Draws the next variant.
    ///
    /// The selection space is closed, so an out-of-range draw is not an
    /// error — it degrades to Normal.
    pub fn select_variant<R: RandomSource>(self, rng: &mut R) -> ChunkVariant {
        match rng.uniform(0, VARIANT_DIE_FACES) {
            0 | 1 => ChunkVariant::Normal,
            2 => ChunkVariant::DownNormal,
            3 => ChunkVariant::Water,
            4 => ChunkVariant::MovingSpoon,
            5 => ChunkVariant::Trapdoor,
            6 => ChunkVariant::Coin,
            _ => ChunkVariant::Normal,
        }
    }
}
