//! Runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use rogue_content::{ConfigLoader, TablesLoader};
use rogue_core::{GameConfig, SpawnTables};

use crate::error::{Result, RuntimeError};

/// Settings that shape a session but are not part of the game rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Seed for a new game. `None` lets the caller pick one.
    pub seed: Option<u64>,
    pub save_dir: PathBuf,
    /// TOML file overriding [`GameConfig`] defaults.
    pub config_path: Option<PathBuf>,
    /// RON file overriding [`SpawnTables`] defaults.
    pub tables_path: Option<PathBuf>,
    /// Stop after this many turns. `None` plays until the game ends.
    pub max_turns: Option<u64>,
    pub slot: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            save_dir: default_save_dir(),
            config_path: None,
            tables_path: None,
            max_turns: None,
            slot: Self::DEFAULT_SLOT.to_owned(),
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_SLOT: &'static str = "savegame";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROGUE_SEED` - Seed for a new game (default: caller decides)
    /// - `ROGUE_SAVE_DIR` - Directory for save files (default: platform-specific)
    /// - `ROGUE_CONFIG` - Game configuration file (default: built-in balance)
    /// - `ROGUE_TABLES` - Spawn tables file (default: built-in tables)
    /// - `ROGUE_MAX_TURNS` - Turn limit for a run (default: unlimited)
    /// - `ROGUE_SLOT` - Save slot name (default: `savegame`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("ROGUE_SEED");
        if let Some(dir) = read_env::<PathBuf>("ROGUE_SAVE_DIR") {
            config.save_dir = dir;
        }
        config.config_path = read_env::<PathBuf>("ROGUE_CONFIG");
        config.tables_path = read_env::<PathBuf>("ROGUE_TABLES");
        config.max_turns = read_env::<u64>("ROGUE_MAX_TURNS");
        if let Some(slot) = env::var("ROGUE_SLOT").ok().filter(|s| !s.is_empty()) {
            config.slot = slot;
        }

        config
    }

    /// Loads the game configuration, falling back to the defaults when no
    /// file is configured.
    pub fn game_config(&self) -> Result<GameConfig> {
        match &self.config_path {
            Some(path) => ConfigLoader::load(path).map_err(content_error),
            None => Ok(GameConfig::default()),
        }
    }

    /// Loads the spawn tables, falling back to the defaults when no file is
    /// configured.
    pub fn spawn_tables(&self) -> Result<SpawnTables> {
        match &self.tables_path {
            Some(path) => TablesLoader::load(path).map_err(content_error),
            None => Ok(SpawnTables::default()),
        }
    }
}

/// Platform data directory, or `./save_data` when none can be determined.
fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "rogue")
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn content_error(err: anyhow::Error) -> RuntimeError {
    RuntimeError::Content(format!("{err:#}"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
