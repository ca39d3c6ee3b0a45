//! The shipped data files describe exactly the built-in balance.

use std::path::PathBuf;

use rogue_content::ContentFactory;
use rogue_core::{GameConfig, SpawnTables};

fn shipped() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn shipped_config_matches_defaults() {
    let config = shipped().load_config().expect("config.toml should parse");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn shipped_tables_match_defaults() {
    let tables = shipped().load_tables().expect("tables.ron should parse");
    assert_eq!(tables, SpawnTables::default());
}
