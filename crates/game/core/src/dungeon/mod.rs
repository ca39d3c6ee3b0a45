//! Procedural levels: layout, population tables and entity templates.
pub mod generator;
pub mod tables;
pub mod templates;

pub use generator::{Level, generate};
pub use tables::{
    ItemKind, LevelTable, MonsterKind, SpawnChance, SpawnTables, random_choice_index,
};
