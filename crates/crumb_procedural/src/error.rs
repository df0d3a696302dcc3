//! # Generation Error Types
//!
//! Errors that can occur at the edges of the generation system.
//!
//! The chunk path itself is total: every random draw is bounded and every
//! catalog lookup has a fallback, so composing a chunk can never fail.
//! Errors exist only where the crate touches the outside world — loading a
//! config file or persisting the settings store.

use thiserror::Error;

/// Errors that can occur in the generation system.
#[derive(Error, Debug)]
pub enum GenError {
    /// Reading or writing a config/settings file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A config or settings file was not valid TOML.
    #[error("invalid toml: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The settings store could not be encoded for persistence.
    #[error("toml encode failed: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    /// A config field holds a value the engine cannot run with.
    #[error("invalid config: {field}: {reason}")]
    InvalidConfig {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Result type for generation-edge operations.
pub type GenResult<T> = Result<T, GenError>;
