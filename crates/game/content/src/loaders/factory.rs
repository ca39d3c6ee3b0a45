//! Content factory for loading everything a session needs.

use std::path::{Path, PathBuf};

use rogue_core::{GameConfig, SpawnTables};

use crate::loaders::{ConfigLoader, LoadResult, TablesLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── tables.ron
/// ```
///
/// A missing file falls back to the built-in defaults; a present but broken
/// one is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load spawn tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<SpawnTables> {
        let path = self.data_dir.join("tables.ron");
        if !path.exists() {
            return Ok(SpawnTables::default());
        }
        TablesLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
