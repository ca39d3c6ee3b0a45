//! Spawn table loader.

use std::path::Path;

use rogue_core::SpawnTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for level-keyed spawn tables from RON files.
///
/// ```ron
/// (
///     max_monsters: [(2, 1), (3, 4), (5, 6)],
///     monsters: [
///         (kind: orc, chance: [(80, 1)]),
///         (kind: troll, chance: [(15, 3), (30, 5), (60, 7)]),
///     ],
/// )
/// ```
///
/// Each table is a list of `(value, from_level)` steps. Omitted fields keep
/// the built-in tables.
pub struct TablesLoader;

impl TablesLoader {
    /// Load spawn tables from a RON file.
    pub fn load(path: &Path) -> LoadResult<SpawnTables> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.context(format!("in {}", path.display())))
    }

    /// Parse spawn tables from RON text.
    pub fn parse(content: &str) -> LoadResult<SpawnTables> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse tables RON: {}", e))
    }
}
