//! # Chunk Data Model
//!
//! A chunk is one logical unit of kitchen: a floor segment, an anchor
//! position, and up to two decorations (hazards or obstacles) in its two
//! lateral slots. Chunks are purely logical — the scene host owns whatever
//! visual objects they become.
//!
//! ## Lifecycle
//!
//! `Active -> Evicted`, and that's it. Eviction is terminal and an evicted
//! chunk's id is never reused.

/// Identifier of a chunk within a run.
///
/// Ids are assigned at creation, strictly increasing and gap-free from 0
/// after every reset. They double as the eviction ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkId(pub u64);

impl ChunkId {
    /// Returns the raw id value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// The fixed catalog of chunk variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChunkVariant {
    /// Plain counter-top segment, the structural backbone (2-in-7 weight).
    Normal,
    /// Sink segment with a water pit.
    Water,
    /// Segment crossed by a swinging spoon.
    MovingSpoon,
    /// Segment with a drop-away trapdoor panel.
    Trapdoor,
    /// Normal segment one step down.
    DownNormal,
    /// Segment strewn with pickup coins.
    Coin,
    /// The one-shot, double-width tutorial segment. Never drawn from the
    /// catalog; produced explicitly on first run only.
    Tutorial,
}

impl ChunkVariant {
    /// True for the variant that carries randomized decorations.
    #[inline]
    #[must_use]
    pub const fn is_decorated(self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Lethal decoration kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HazardKind {
    /// Knife spinning in place at fixed height.
    RotatingKnife,
    /// Fork planted tines-up at a randomized height.
    Fork,
    /// Wall-mounted holder that fires knives on an interval.
    KnifeHolder,
    /// Stove burner with a hot pan. Subject to the anti-repeat rule.
    PanAndStove,
}

/// Non-lethal blocking decoration kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Mixing bowl to vault over.
    Bowl,
    /// Full-height cookie jar.
    CookieJar,
    /// Low-profile jar lid.
    CookieJarLid,
}

/// A decoration is either a hazard or an obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// Kills on contact.
    Hazard(HazardKind),
    /// Blocks movement only.
    Obstacle(ObstacleKind),
}

/// Which of the chunk's two lateral slots a decoration occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LateralSlot {
    /// Quarter-width left of the chunk anchor.
    Left,
    /// Quarter-width right of the chunk anchor.
    Right,
}

/// A placed decoration inside a chunk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoration {
    /// What was placed.
    pub kind: DecorationKind,
    /// Which lateral slot it occupies.
    pub slot: LateralSlot,
    /// World position of the placement.
    pub position: (f32, f32),
    /// Firing interval in seconds. `Some` only for [`HazardKind::KnifeHolder`].
    pub interval_s: Option<u32>,
}

/// Chunk lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Materialized and inside the retention window.
    #[default]
    Active,
    /// Fell out of the trailing window. Terminal.
    Evicted,
}

/// One logical unit of level content.
#[derive(Clone, Debug)]
pub struct Chunk {
    /// Creation-ordered id, unique within a run.
    pub id: ChunkId,
    /// Which catalog variant this chunk is.
    pub variant: ChunkVariant,
    /// Anchor position taken from the spawn cursor at creation time.
    pub origin: (f32, f32),
    /// 0-2 decoration placements; empty for every non-Normal variant.
    pub decorations: Vec<Decoration>,
    /// Current lifecycle state.
    pub lifecycle: Lifecycle,
}

impl Chunk {
    /// Creates an undecorated, active chunk.
    #[must_use]
    pub const fn new(id: ChunkId, variant: ChunkVariant, origin: (f32, f32)) -> Self {
        Self {
            id,
            variant,
            origin,
            decorations: Vec::new(),
            lifecycle: Lifecycle::Active,
        }
    }

    /// Marks the chunk evicted. Idempotent; there is no way back.
    #[inline]
    pub fn evict(&mut self) {
        self.lifecycle = Lifecycle::Evicted;
    }

    /// True while the chunk is inside the retention window.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chunk_is_active_and_bare() {
        let chunk = Chunk::new(ChunkId(7), ChunkVariant::Water, (16.0, 0.0));
        assert!(chunk.is_active());
        assert!(chunk.decorations.is_empty());
        assert_eq!(chunk.id.value(), 7);
    }

    #[test]
    fn eviction_is_terminal() {
        let mut chunk = Chunk::new(ChunkId(0), ChunkVariant::Normal, (0.0, 0.0));
        chunk.evict();
        assert_eq!(chunk.lifecycle, Lifecycle::Evicted);
        // A second evict changes nothing.
        chunk.evict();
        assert_eq!(chunk.lifecycle, Lifecycle::Evicted);
    }

    #[test]
    fn only_normal_is_decorated() {
        assert!(ChunkVariant::Normal.is_decorated());
        for variant in [
            ChunkVariant::Water,
            ChunkVariant::MovingSpoon,
            ChunkVariant::Trapdoor,
            ChunkVariant::DownNormal,
            ChunkVariant::Coin,
            ChunkVariant::Tutorial,
        ] {
            assert!(!variant.is_decorated(), "{variant:?} should be bare");
        }
    }
}
