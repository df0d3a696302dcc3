//! # Spawn Cursor
//!
//! The accumulating anchor position for the next chunk.
//!
//! The cursor is owned by the streaming engine and advanced only by
//! chunk-append operations — eviction never touches it. Across the lifetime
//! of a run `x` is non-decreasing: the kitchen only ever extends to the
//! right.

/// Mutable placement state for the next chunk anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnCursor {
    /// Horizontal anchor for the next chunk.
    pub x: f32,
    /// Vertical anchor (floor height) for the next chunk.
    pub y: f32,
}

impl SpawnCursor {
    /// Creates a cursor at the given start position.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Resets the cursor to a start position. Only `start` calls this.
    #[inline]
    pub fn reset(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Applies the staircase nudge between consecutive composed chunks.
    ///
    /// `dx` must be non-negative to preserve the left-to-right invariant;
    /// `dy` may go either way (stairs climb, ramps descend).
    #[inline]
    pub fn nudge(&mut self, dx: f32, dy: f32) {
        self.x += dx.max(0.0);
        self.y += dy;
    }

    /// Advances past a placed chunk footprint of the given width.
    #[inline]
    pub fn advance(&mut self, width: f32) {
        self.x += width.max(0.0);
    }
}

impl Default for SpawnCursor {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
