//! # Host Interfaces
//!
//! The two seams between the engine and the outside world.
//!
//! The engine computes *what* to spawn and *where*; realizing and tearing
//! down visual objects is the scene host's job, reached only through
//! [`SceneHost`]. The sole persisted state the engine touches is the
//! first-run tutorial flag, behind [`SettingsStore`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::GenResult;

/// Opaque handle to a materialized chunk's scene representation.
///
/// Minted by the host, handed back verbatim on removal. The engine never
/// looks inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneHandle(pub u64);

/// Realizes and destroys chunk visuals on the engine's behalf.
pub trait SceneHost {
    /// Materializes a chunk and returns its scene handle.
    fn materialize(&mut self, chunk: &crate::chunk::Chunk) -> SceneHandle;

    /// Removes a previously materialized chunk. Called exactly once per
    /// handle, when the chunk is evicted or discarded.
    fn remove(&mut self, handle: SceneHandle);
}

/// Key/value settings persistence.
///
/// The engine reads and writes exactly one key: the tutorial flag.
pub trait SettingsStore {
    /// Reads a value, `None` if the key was never written.
    fn get_string(&self, key: &str) -> Option<&str>;

    /// Writes a value, replacing any previous one.
    fn set_string(&mut self, key: &str, value: &str);
}

/// Settings key for the first-run tutorial flag.
///
/// An absent key means the tutorial has never been shown: a fresh install
/// with an empty store still gets its tutorial.
pub const TUTORIAL_FLAG_KEY: &str = "tutorial";

/// Tutorial flag value meaning "show the tutorial on the next run".
pub const TUTORIAL_ON: &str = "on";

/// Tutorial flag value meaning "already shown".
pub const TUTORIAL_OFF: &str = "off";

/// In-memory settings store for tests and hosts without persistence.
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    values: BTreeMap<String, String>,
}

impl MemorySettings {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with the tutorial flag armed, as on a first run.
    #[must_use]
    pub fn first_run() -> Self {
        let mut store = Self::new();
        store.set_string(TUTORIAL_FLAG_KEY, TUTORIAL_ON);
        store
    }

    /// Creates a store recording that the tutorial was already shown.
    #[must_use]
    pub fn tutorial_seen() -> Self {
        let mut store = Self::new();
        store.set_string(TUTORIAL_FLAG_KEY, TUTORIAL_OFF);
        store
    }
}

impl SettingsStore for MemorySettings {
    fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// TOML-file-backed settings store.
///
/// Loads the whole file into memory; writes go back through [`Self::save`].
/// A missing file is an empty store, not an error.
#[derive(Clone, Debug)]
pub struct TomlSettings {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlSettings {
    /// Opens the store at `path`, reading existing values if the file is
    /// there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> GenResult<Self> {
        let values = match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path: path.to_owned(),
            values,
        })
    }

    /// Persists the current values back to the file.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub fn save(&self) -> GenResult<()> {
        let text = toml::to_string(&self.values)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

impl SettingsStore for TomlSettings {
    fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}
