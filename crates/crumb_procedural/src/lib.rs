//! # CRUMB Procedural Generation
//!
//! Endless horizontal level streaming for the CRUMB kitchen runner.
//!
//! ## Design Principles
//!
//! 1. **Total**: Composing a chunk can never fail — all draws are bounded
//!    and the catalog falls back to Normal
//! 2. **Windowed**: The newest `retention` chunks live, the rest evict
//! 3. **Single-writer**: One engine instance owns every counter and flag
//! 4. **Swappable randomness**: Every draw flows through `RandomSource`
//!
//! ## Core Components
//!
//! - `ChunkCatalog`: Weighted variant selection (2-in-7 toward Normal)
//! - `ChunkComposer`: Hazard/obstacle layout with the pan anti-repeat rule
//! - `GenerationWindow`: Trailing-window eviction accounting
//! - `StreamingEngine`: Tick-driven orchestration against a scene host
//!
//! ## Example
//!
//! ```rust,ignore
//! use crumb_procedural::{GeneratorConfig, StreamingEngine, ThreadSource};
//!
//! let config = GeneratorConfig::production();
//! let mut engine = StreamingEngine::new(config, ThreadSource::new())?;
//!
//! // Host-owned collaborators.
//! engine.start(6, &mut scene, &mut settings);
//!
//! // Once per frame:
//! if player_crossed_threshold {
//!     engine.set_advance_trigger();
//! }
//! engine.tick(&mut scene);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod chunk;
pub mod composer;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod host;
pub mod rng;
pub mod scatter;
pub mod window;

pub use catalog::{ChunkCatalog, VARIANT_DIE_FACES};
pub use chunk::{
    Chunk, ChunkId, ChunkVariant, Decoration, DecorationKind, HazardKind, LateralSlot,
    Lifecycle, ObstacleKind,
};
pub use composer::ChunkComposer;
pub use config::GeneratorConfig;
pub use cursor::SpawnCursor;
pub use engine::{theme_index, RunStats, StreamingEngine};
pub use error::{GenError, GenResult};
pub use host::{
    MemorySettings, SceneHandle, SceneHost, SettingsStore, TomlSettings, TUTORIAL_FLAG_KEY,
    TUTORIAL_OFF, TUTORIAL_ON,
};
pub use rng::{RandomSource, SeededSource, SequenceSource, ThreadSource};
pub use scatter::scatter;
pub use window::GenerationWindow;
