//! # Generator Configuration
//!
//! Tuning constants for the streaming engine, loaded once at startup.
//!
//! Configurable via external TOML files so the kitchen layout can be tuned
//! without a rebuild; `Default` carries the shipped constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// Tuning constants for chunk generation and streaming.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Horizontal start position of the spawn cursor.
    pub start_x: f32,
    /// Floor height at the start of a run.
    pub start_y: f32,
    /// Catalog-driven chunks composed by `start` (the initial fill).
    pub initial_chunks: u32,
    /// Trailing window size: the newest `retention` chunks stay alive.
    pub retention: u64,
    /// Width of one floor segment; chunks advance the cursor by this much.
    pub floor_segment_width: f32,
    /// Horizontal staircase nudge between consecutive composed chunks.
    pub staircase_dx: f32,
    /// Vertical staircase nudge between consecutive composed chunks.
    pub staircase_dy: f32,
    /// Height at which a pan rests on its stove.
    pub pan_rest_height: f32,
    /// Half-height used to seat bowls and jars on the floor.
    pub obstacle_half_height: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            start_y: 0.0,
            initial_chunks: 6,
            retention: 12,
            floor_segment_width: 8.0,
            staircase_dx: 0.3,
            staircase_dy: 0.4,
            pan_rest_height: 2.4,
            obstacle_half_height: 0.5,
        }
    }
}

impl GeneratorConfig {
    /// Production preset: the shipped constants.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }

    /// Test preset: small retention so eviction kicks in quickly.
    #[must_use]
    pub fn test() -> Self {
        Self {
            initial_chunks: 3,
            retention: 4,
            ..Self::default()
        }
    }

    /// Parses a config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::ConfigParse`] on malformed TOML and
    /// [`GenError::InvalidConfig`] if a value fails validation.
    pub fn from_toml_str(text: &str) -> GenResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] if the file cannot be read, plus everything
    /// [`Self::from_toml_str`] can return.
    pub fn load(path: &Path) -> GenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks the config for values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> GenResult<()> {
        let floats = [
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("floor_segment_width", self.floor_segment_width),
            ("staircase_dx", self.staircase_dx),
            ("staircase_dy", self.staircase_dy),
            ("pan_rest_height", self.pan_rest_height),
            ("obstacle_half_height", self.obstacle_half_height),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(GenError::InvalidConfig {
                    field,
                    reason: "must be finite",
                });
            }
        }
        if self.retention == 0 {
            return Err(GenError::InvalidConfig {
                field: "retention",
                reason: "must keep at least one chunk alive",
            });
        }
        if self.floor_segment_width <= 0.0 {
            return Err(GenError::InvalidConfig {
                field: "floor_segment_width",
                reason: "must be positive",
            });
        }
        if self.staircase_dx < 0.0 {
            return Err(GenError::InvalidConfig {
                field: "staircase_dx",
                reason: "cursor x must never move left",
            });
        }
        if self.obstacle_half_height < 0.0 {
            return Err(GenError::InvalidConfig {
                field: "obstacle_half_height",
                reason: "must be non-negative",
            });
        }
        Ok(())
    }
}
