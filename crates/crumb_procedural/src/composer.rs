//! # Chunk Composer
//!
//! Materializes a chunk variant at the spawn cursor: floor anchor, lateral
//! slot layout, and the randomized hazard/obstacle pass.
//!
//! ## Slot layout
//!
//! A decorated chunk has exactly two lateral slots, a quarter segment-width
//! left and right of the anchor. One draw picks which of four fill patterns
//! applies; each slot then rolls its own decoration.
//!
//! ## Anti-repeat rule
//!
//! Two `PanAndStove` hazards must not land in consecutive kill-slot
//! resolutions. When the roll repeats, the slot is *suppressed* — dropped,
//! not re-rolled — and the streak flag clears. A suppressed slot is the
//! only way a decorated chunk ends up with fewer than two decorations.
//!
//! ## Staircase nudge
//!
//! Consecutive composed chunks step up by a small fixed offset instead of
//! butting flush; the nudge applies only when the previous chunk came out
//! of this composer with its decoration pass (the engine clears the streak
//! when a special variant interleaves).

use crate::chunk::{
    Chunk, ChunkId, ChunkVariant, Decoration, DecorationKind, HazardKind, LateralSlot,
    ObstacleKind,
};
use crate::config::GeneratorConfig;
use crate::cursor::SpawnCursor;
use crate::rng::RandomSource;

/// Per-run composer state: the two anti-repeat flags.
///
/// Both reset at `start`; neither lives anywhere but here.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChunkComposer {
    /// Set after each decorated compose; gates the staircase nudge.
    just_spawned_chunk: bool,
    /// Set while the latest kill-slot resolution placed a pan-and-stove.
    just_spawned_pan_and_stove: bool,
}

impl ChunkComposer {
    /// Faces on the slot-pattern die.
    const PATTERN_DIE_FACES: u32 = 6;
    /// Fixed height of a rotating knife above the floor.
    const ROTATING_KNIFE_HEIGHT: f32 = 2.5;
    /// Fork height draw range (whole units above the floor).
    const FORK_HEIGHT: (u32, u32) = (2, 4);
    /// Knife holder mount height draw range.
    const KNIFE_HOLDER_HEIGHT: (u32, u32) = (7, 9);
    /// Knife holder firing interval draw range, seconds.
    const KNIFE_HOLDER_INTERVAL_S: (u32, u32) = (3, 6);
    /// Height of a cookie jar lid above the floor.
    const COOKIE_JAR_LID_HEIGHT: f32 = 0.7;

    /// Creates a composer with cleared flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both flags for a fresh run.
    pub fn reset(&mut self) {
        self.just_spawned_chunk = false;
        self.just_spawned_pan_and_stove = false;
    }

    /// Clears the staircase streak.
    ///
    /// The engine calls this before composing any special variant, so a
    /// special never gets nudged and the chunk after it anchors at the
    /// default footprint spacing.
    pub fn clear_chunk_streak(&mut self) {
        self.just_spawned_chunk = false;
    }

    /// Composes one catalog-driven chunk at the cursor.
    ///
    /// Applies the staircase nudge when the streak flag is set, runs the
    /// decoration pass for decorated variants, then advances the cursor by
    /// one segment width. Never fails: all draws are bounded.
    pub fn compose<R: RandomSource>(
        &mut self,
        id: ChunkId,
        variant: ChunkVariant,
        cursor: &mut SpawnCursor,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Chunk {
        debug_assert!(
            variant != ChunkVariant::Tutorial,
            "tutorial has its own composer"
        );

        if self.just_spawned_chunk {
            cursor.nudge(config.staircase_dx, config.staircase_dy);
        }

        let mut chunk = Chunk::new(id, variant, (cursor.x, cursor.y));

        if variant.is_decorated() {
            self.decorate(&mut chunk, config, rng);
            self.just_spawned_chunk = true;
        }

        cursor.advance(config.floor_segment_width);
        chunk
    }

    /// Composes the one-shot tutorial chunk.
    ///
    /// Fixed and non-randomized: two floor segments side by side, no
    /// decorations, cursor advanced by the double footprint. Leaves both
    /// flags untouched, so the chunk after it spaces normally.
    pub fn compose_tutorial(
        &self,
        id: ChunkId,
        cursor: &mut SpawnCursor,
        config: &GeneratorConfig,
    ) -> Chunk {
        let chunk = Chunk::new(id, ChunkVariant::Tutorial, (cursor.x, cursor.y));
        cursor.advance(config.floor_segment_width * 2.0);
        chunk
    }

    /// Runs the randomized decoration pass over both lateral slots.
    fn decorate<R: RandomSource>(
        &mut self,
        chunk: &mut Chunk,
        config: &GeneratorConfig,
        rng: &mut R,
    ) {
        let (origin_x, origin_y) = chunk.origin;
        let lateral = config.floor_segment_width / 4.0;

        // Pattern table: 0-1 {kill, obstacle}, 2-3 {obstacle, kill},
        // 4 {kill, kill}, 5 {obstacle, obstacle}.
        let (left_is_kill, right_is_kill) = match rng.uniform(0, Self::PATTERN_DIE_FACES) {
            0 | 1 => (true, false),
            2 | 3 => (false, true),
            4 => (true, true),
            _ => (false, false),
        };

        let slots = [
            (LateralSlot::Left, origin_x - lateral, left_is_kill),
            (LateralSlot::Right, origin_x + lateral, right_is_kill),
        ];
        for (slot, x, is_kill) in slots {
            let placed = if is_kill {
                self.roll_hazard(x, origin_y, slot, config, rng)
            } else {
                Some(Self::roll_obstacle(x, origin_y, slot, config, rng))
            };
            if let Some(decoration) = placed {
                chunk.decorations.push(decoration);
            }
        }
    }

    /// Resolves one kill slot. Returns `None` on an anti-repeat skip.
    fn roll_hazard<R: RandomSource>(
        &mut self,
        x: f32,
        y: f32,
        slot: LateralSlot,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Option<Decoration> {
        let draw = rng.uniform(0, 4);
        if draw != 3 {
            self.just_spawned_pan_and_stove = false;
        }

        let (kind, height, interval_s) = match draw {
            0 => (HazardKind::RotatingKnife, Self::ROTATING_KNIFE_HEIGHT, None),
            1 => {
                let h = rng.uniform(Self::FORK_HEIGHT.0, Self::FORK_HEIGHT.1);
                (HazardKind::Fork, h as f32, None)
            }
            2 => {
                let h = rng.uniform(Self::KNIFE_HOLDER_HEIGHT.0, Self::KNIFE_HOLDER_HEIGHT.1);
                let interval = rng.uniform(
                    Self::KNIFE_HOLDER_INTERVAL_S.0,
                    Self::KNIFE_HOLDER_INTERVAL_S.1,
                );
                (HazardKind::KnifeHolder, h as f32, Some(interval))
            }
            _ => {
                if self.just_spawned_pan_and_stove {
                    // Skip, not re-roll: the slot stays empty.
                    self.just_spawned_pan_and_stove = false;
                    return None;
                }
                self.just_spawned_pan_and_stove = true;
                (HazardKind::PanAndStove, config.pan_rest_height, None)
            }
        };

        Some(Decoration {
            kind: DecorationKind::Hazard(kind),
            slot,
            position: (x, y + height),
            interval_s,
        })
    }

    /// Resolves one obstacle slot. No anti-repeat rule applies here.
    fn roll_obstacle<R: RandomSource>(
        x: f32,
        y: f32,
        slot: LateralSlot,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Decoration {
        let (kind, height) = match rng.uniform(0, 3) {
            0 => (ObstacleKind::Bowl, config.obstacle_half_height),
            1 => (ObstacleKind::CookieJar, config.obstacle_half_height),
            _ => (ObstacleKind::CookieJarLid, Self::COOKIE_JAR_LID_HEIGHT),
        };
        Decoration {
            kind: DecorationKind::Obstacle(kind),
            slot,
            position: (x, y + height),
            interval_s: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;

    fn config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    #[test]
    fn decorated_chunk_fills_both_slots() {
        let mut composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        // Pattern 0 {kill, obstacle}; kill draw 0 (rotating knife),
        // obstacle draw 0 (bowl).
        let mut rng = SequenceSource::new(vec![0, 0, 0]);
        let chunk = composer.compose(
            ChunkId(0),
            ChunkVariant::Normal,
            &mut cursor,
            &config(),
            &mut rng,
        );

        assert_eq!(chunk.decorations.len(), 2);
        let left = &chunk.decorations[0];
        let right = &chunk.decorations[1];
        assert_eq!(left.slot, LateralSlot::Left);
        assert_eq!(
            left.kind,
            DecorationKind::Hazard(HazardKind::RotatingKnife)
        );
        assert!((left.position.0 - -2.0).abs() < f32::EPSILON);
        assert!((left.position.1 - 2.5).abs() < f32::EPSILON);
        assert_eq!(right.slot, LateralSlot::Right);
        assert_eq!(right.kind, DecorationKind::Obstacle(ObstacleKind::Bowl));
        assert!((right.position.0 - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn special_variants_stay_bare() {
        let mut composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        let mut rng = SequenceSource::new(vec![4, 3, 3]);
        for variant in [
            ChunkVariant::Water,
            ChunkVariant::MovingSpoon,
            ChunkVariant::Trapdoor,
            ChunkVariant::DownNormal,
            ChunkVariant::Coin,
        ] {
            let chunk =
                composer.compose(ChunkId(0), variant, &mut cursor, &config(), &mut rng);
            assert!(chunk.decorations.is_empty(), "{variant:?} grew decorations");
        }
    }

    #[test]
    fn consecutive_composes_staircase() {
        let mut composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        let cfg = config();
        let mut rng = SequenceSource::new(vec![5, 0, 0]);

        let first = composer.compose(
            ChunkId(0),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );
        let second = composer.compose(
            ChunkId(1),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );

        assert_eq!(first.origin, (0.0, 0.0));
        // Footprint advance plus the staircase nudge.
        let expected_x = cfg.floor_segment_width + cfg.staircase_dx;
        assert!((second.origin.0 - expected_x).abs() < 1e-5);
        assert!((second.origin.1 - cfg.staircase_dy).abs() < 1e-5);
    }

    #[test]
    fn special_breaks_the_staircase_streak() {
        let mut composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        let cfg = config();
        let mut rng = SequenceSource::new(vec![5, 0, 0]);

        let _ = composer.compose(
            ChunkId(0),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );
        // What the engine does before every special variant.
        composer.clear_chunk_streak();
        let special = composer.compose(
            ChunkId(1),
            ChunkVariant::Water,
            &mut cursor,
            &cfg,
            &mut rng,
        );
        let after = composer.compose(
            ChunkId(2),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );

        // No nudge on the special or on the normal right after it.
        assert_eq!(special.origin, (cfg.floor_segment_width, 0.0));
        assert_eq!(after.origin, (cfg.floor_segment_width * 2.0, 0.0));
    }

    #[test]
    fn pan_repeat_is_suppressed_within_a_chunk() {
        let mut composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        // Pattern 4 {kill, kill}; both kill draws land pan-and-stove.
        let mut rng = SequenceSource::new(vec![4, 3, 3]);
        let chunk = composer.compose(
            ChunkId(0),
            ChunkVariant::Normal,
            &mut cursor,
            &config(),
            &mut rng,
        );

        // The second slot is dropped, not re-rolled.
        assert_eq!(chunk.decorations.len(), 1);
        assert_eq!(
            chunk.decorations[0].kind,
            DecorationKind::Hazard(HazardKind::PanAndStove)
        );
        assert_eq!(chunk.decorations[0].slot, LateralSlot::Left);
    }

    #[test]
    fn pan_repeat_is_suppressed_across_chunks() {
        let mut composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        let cfg = config();
        // Chunk 1: pattern 0 {kill, obstacle}, pan placed, bowl placed.
        // Chunk 2: pattern 2 {obstacle, kill}, bowl placed, pan repeat.
        let mut rng = SequenceSource::new(vec![0, 3, 0, 2, 0, 3]);

        let first = composer.compose(
            ChunkId(0),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );
        let second = composer.compose(
            ChunkId(1),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );

        assert_eq!(first.decorations.len(), 2);
        assert_eq!(
            first.decorations[0].kind,
            DecorationKind::Hazard(HazardKind::PanAndStove)
        );
        // Second chunk kept its obstacle but lost the repeated pan.
        assert_eq!(second.decorations.len(), 1);
        assert_eq!(
            second.decorations[0].kind,
            DecorationKind::Obstacle(ObstacleKind::Bowl)
        );
    }

    #[test]
    fn other_hazards_clear_the_pan_streak() {
        let mut composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        let cfg = config();
        // Chunk 1: {kill, kill} -> pan, then rotating knife (clears streak).
        // Chunk 2: {kill, obstacle} -> pan again, allowed.
        let mut rng = SequenceSource::new(vec![4, 3, 0, 0, 3, 0]);

        let first = composer.compose(
            ChunkId(0),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );
        let second = composer.compose(
            ChunkId(1),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );

        assert_eq!(first.decorations.len(), 2);
        assert_eq!(second.decorations.len(), 2);
        assert_eq!(
            second.decorations[0].kind,
            DecorationKind::Hazard(HazardKind::PanAndStove)
        );
    }

    #[test]
    fn suppression_clears_the_streak_for_the_next_roll() {
        let mut composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        let cfg = config();
        // Chunk 1: {kill, kill} pan + pan -> second suppressed, flag clears.
        // Chunk 2: {kill, obstacle} pan -> placed again.
        let mut rng = SequenceSource::new(vec![4, 3, 3, 0, 3, 0]);

        let first = composer.compose(
            ChunkId(0),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );
        let second = composer.compose(
            ChunkId(1),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );

        assert_eq!(first.decorations.len(), 1);
        assert_eq!(second.decorations.len(), 2);
        assert_eq!(
            second.decorations[0].kind,
            DecorationKind::Hazard(HazardKind::PanAndStove)
        );
    }

    #[test]
    fn knife_holder_carries_a_firing_interval() {
        let mut composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        // Pattern 0 {kill, obstacle}; kill draw 2 (knife holder), mount
        // height raw 1 -> 8, interval raw 2 -> 5, obstacle draw 2 (lid).
        let mut rng = SequenceSource::new(vec![0, 2, 1, 2, 2]);
        let chunk = composer.compose(
            ChunkId(0),
            ChunkVariant::Normal,
            &mut cursor,
            &config(),
            &mut rng,
        );

        let holder = &chunk.decorations[0];
        assert_eq!(holder.kind, DecorationKind::Hazard(HazardKind::KnifeHolder));
        assert!((holder.position.1 - 8.0).abs() < f32::EPSILON);
        assert_eq!(holder.interval_s, Some(5));

        let lid = &chunk.decorations[1];
        assert_eq!(
            lid.kind,
            DecorationKind::Obstacle(ObstacleKind::CookieJarLid)
        );
        assert!((lid.position.1 - 0.7).abs() < f32::EPSILON);
        assert_eq!(lid.interval_s, None);
    }

    #[test]
    fn tutorial_is_double_width_and_bare() {
        let composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        let cfg = config();
        let chunk = composer.compose_tutorial(ChunkId(0), &mut cursor, &cfg);

        assert_eq!(chunk.variant, ChunkVariant::Tutorial);
        assert!(chunk.decorations.is_empty());
        assert!((cursor.x - cfg.floor_segment_width * 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tutorial_does_not_start_a_staircase() {
        let mut composer = ChunkComposer::new();
        let mut cursor = SpawnCursor::new(0.0, 0.0);
        let cfg = config();
        let _ = composer.compose_tutorial(ChunkId(0), &mut cursor, &cfg);
        let mut rng = SequenceSource::new(vec![5, 0, 0]);
        let chunk = composer.compose(
            ChunkId(1),
            ChunkVariant::Normal,
            &mut cursor,
            &cfg,
            &mut rng,
        );
        // Default footprint spacing, no nudge.
        assert_eq!(chunk.origin, (cfg.floor_segment_width * 2.0, 0.0));
    }
}
