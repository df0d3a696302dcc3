//! # Streaming Engine
//!
//! Orchestrates the catalog, composer, cursor and generation window into an
//! effectively endless level: chunks are appended ahead of the player and
//! retired once they fall far enough behind.
//!
//! ## Tick model
//!
//! Single-threaded and cooperative. The host ticks the engine once per
//! frame; a tick consumes at most one edge-triggered advance request and
//! then runs the eviction pass. All counters have exactly one writer (the
//! engine), so no locking discipline exists anywhere in this crate.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::catalog::ChunkCatalog;
use crate::chunk::Chunk;
use crate::composer::ChunkComposer;
use crate::config::GeneratorConfig;
use crate::cursor::SpawnCursor;
use crate::error::GenResult;
use crate::host::{SceneHandle, SceneHost, SettingsStore, TUTORIAL_FLAG_KEY, TUTORIAL_OFF};
use crate::rng::RandomSource;
use crate::window::GenerationWindow;

/// Score width of one background theme bucket.
const THEME_BUCKET: u32 = 100;
/// Index of the final, clamped theme bucket.
const THEME_LAST: usize = 5;

/// Maps a score to a background theme bucket.
///
/// One bucket per 100 points, clamped to the last bucket for any score of
/// 500 or more. Pure: a free function so hosts can restyle without an
/// engine (or its RNG type) in hand.
#[inline]
#[must_use]
pub const fn theme_index(score: u32) -> usize {
    let bucket = (score / THEME_BUCKET) as usize;
    if bucket > THEME_LAST {
        THEME_LAST
    } else {
        bucket
    }
}

/// Run counters exposed to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Chunks produced since `start`, tutorial included.
    pub generated_this_run: u64,
    /// Chunks retired since `start`.
    pub evicted_this_run: u64,
    /// Chunks currently alive in the scene.
    pub active_count: usize,
}

/// A materialized chunk and the scene handle it came back with.
#[derive(Debug)]
struct ActiveChunk {
    chunk: Chunk,
    handle: SceneHandle,
}

/// The chunk generation and streaming orchestrator.
///
/// Owns every piece of mutable generation state: cursor, window, composer
/// flags, RNG and the active chunk list. Hosts hold exactly one instance
/// per run — there is no ambient state to leak between runs.
pub struct StreamingEngine<R: RandomSource> {
    config: GeneratorConfig,
    rng: R,
    cursor: SpawnCursor,
    catalog: ChunkCatalog,
    composer: ChunkComposer,
    window: GenerationWindow,
    active: VecDeque<ActiveChunk>,
    advance_requested: bool,
    started: bool,
    score: u32,
    evicted_this_run: u64,
}

impl<R: RandomSource> StreamingEngine<R> {
    /// Creates an engine from a validated config and a random source.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenError::InvalidConfig`] if the config fails
    /// validation.
    pub fn new(config: GeneratorConfig, rng: R) -> GenResult<Self> {
        config.validate()?;
        let window = GenerationWindow::new(config.retention);
        let cursor = SpawnCursor::new(config.start_x, config.start_y);
        Ok(Self {
            config,
            rng,
            cursor,
            catalog: ChunkCatalog::new(),
            composer: ChunkComposer::new(),
            window,
            active: VecDeque::new(),
            advance_requested: false,
            started: false,
            score: 0,
            evicted_this_run: 0,
        })
    }

    /// Starts (or restarts) a run.
    ///
    /// Resets every counter and flag, logically discards any chunks from a
    /// previous run (tearing their visuals down on scene unload is host
    /// policy, so no `remove` calls fire here), emits the one-shot tutorial
    /// chunk if the settings flag is armed, then composes `initial_chunks`
    /// catalog-driven chunks.
    pub fn start<H, S>(&mut self, initial_chunks: u32, host: &mut H, settings: &mut S)
    where
        H: SceneHost,
        S: SettingsStore,
    {
        let discarded = self.active.len();
        self.active.clear();
        self.window.reset();
        self.cursor.reset(self.config.start_x, self.config.start_y);
        self.composer.reset();
        self.advance_requested = false;
        self.score = 0;
        self.evicted_this_run = 0;
        self.started = true;

        info!(initial_chunks, discarded, "starting run");

        // The tutorial runs until the store says it was shown; a fresh
        // install with no flag at all counts as a first run.
        if settings.get_string(TUTORIAL_FLAG_KEY) != Some(TUTORIAL_OFF) {
            let id = self.window.record_spawn();
            let chunk = self
                .composer
                .compose_tutorial(id, &mut self.cursor, &self.config);
            self.materialize(chunk, host);
            settings.set_string(TUTORIAL_FLAG_KEY, TUTORIAL_OFF);
            info!("tutorial chunk emitted, flag cleared");
        }

        for _ in 0..initial_chunks {
            self.generate_next(host);
        }
    }

    /// Composes exactly one further chunk.
    ///
    /// The engine does not debounce — the host raises this at most once per
    /// desired chunk. Before `start` it is a no-op: a precondition
    /// violation must not corrupt the counters.
    pub fn on_advance_triggered<H: SceneHost>(&mut self, host: &mut H) {
        if !self.started {
            warn!("advance triggered before start, ignoring");
            return;
        }
        self.generate_next(host);
    }

    /// Raises the edge-triggered advance flag; the next tick consumes it.
    pub fn set_advance_trigger(&mut self) {
        self.advance_requested = true;
    }

    /// One cooperative tick: consume a pending advance request, then run
    /// the eviction pass over every active chunk.
    pub fn tick<H: SceneHost>(&mut self, host: &mut H) {
        if !self.started {
            return;
        }
        if self.advance_requested {
            self.advance_requested = false;
            self.generate_next(host);
        }
        self.evict_stale(host);
    }

    /// Selects a variant, composes it at the cursor and materializes it.
    fn generate_next<H: SceneHost>(&mut self, host: &mut H) {
        let variant = self.catalog.select_variant(&mut self.rng);
        if !variant.is_decorated() {
            // Specials interrupt the staircase; the next chunk anchors at
            // the default footprint spacing.
            self.composer.clear_chunk_streak();
        }
        let id = self.window.record_spawn();
        let chunk = self.composer.compose(
            id,
            variant,
            &mut self.cursor,
            &self.config,
            &mut self.rng,
        );
        debug!(
            id = id.value(),
            ?variant,
            x = chunk.origin.0,
            decorations = chunk.decorations.len(),
            "chunk generated"
        );
        self.materialize(chunk, host);
    }

    /// Hands a fresh chunk to the scene host and tracks its handle.
    fn materialize<H: SceneHost>(&mut self, chunk: Chunk, host: &mut H) {
        let handle = host.materialize(&chunk);
        self.active.push_back(ActiveChunk { chunk, handle });
    }

    /// Retires every active chunk that fell out of the trailing window.
    ///
    /// The predicate is re-evaluated per chunk per tick; a missed tick
    /// evicts late, never early, and `remove` fires exactly once per
    /// handle. Ids are front-ordered, so eviction only ever pops the front.
    fn evict_stale<H: SceneHost>(&mut self, host: &mut H) {
        while let Some(front) = self.active.front() {
            if !self.window.should_evict(front.chunk.id) {
                break;
            }
            // Front is guaranteed present here.
            if let Some(mut stale) = self.active.pop_front() {
                stale.chunk.evict();
                host.remove(stale.handle);
                self.evicted_this_run += 1;
                debug!(id = stale.chunk.id.value(), "chunk evicted");
            }
        }
    }

    /// Adds points to the run score.
    pub fn record_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// The current run score.
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// True once `start` has run.
    #[inline]
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// The config this engine was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Iterates the chunks currently alive, oldest first.
    pub fn active_chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.active.iter().map(|entry| &entry.chunk)
    }

    /// Snapshot of the run counters.
    #[must_use]
    pub fn stats(&self) -> RunStats {
        RunStats {
            generated_this_run: self.window.total_generated(),
            evicted_this_run: self.evicted_this_run,
            active_count: self.active.len(),
        }
    }
}
