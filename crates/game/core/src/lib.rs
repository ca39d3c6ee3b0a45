//! Deterministic dungeon-crawler rules.
//!
//! `rogue-core` holds the canonical simulation: level generation, combat,
//! monster perception, inventories, timers and progression. It performs no
//! I/O; randomness, line of sight and mid-turn player decisions come in
//! through the services in [`env`]. Whole turns are sequenced by
//! [`engine::GameEngine`], and the runtime and content crates depend on the
//! types re-exported here.
pub mod ai;
pub mod combat;
pub mod config;
pub mod dungeon;
pub mod engine;
pub mod env;
pub mod error;
pub mod inventory;
pub mod progression;
pub mod state;
pub mod stats;
pub mod timers;

#[cfg(test)]
mod testing;

pub use combat::{AttackOutcome, Death, attack};
pub use config::GameConfig;
pub use dungeon::{ItemKind, Level, LevelTable, MonsterKind, SpawnChance, SpawnTables};
pub use engine::{
    Command, EngineError, GameEngine, PlayerAction, TurnPhase, TurnReport, descend, new_game,
    refresh_fov,
};
pub use env::{Env, LevelUpChoice, PcgRng, PlayerPrompt, RngOracle, VisibilityOracle, VisibleSet};
pub use error::{ErrorSeverity, GameError, InvariantViolation};
pub use inventory::UseOutcome;
pub use progression::CharacterSheet;
pub use state::{
    Ai, AiMode, Color, Direction, Entity, EntityId, Fighter, GameStatus, Hunger, Item, Map,
    Message, MessageLog, Position, Rect, Role, Slot, Tile, UseEffect, World,
};
pub use stats::EffectiveStats;
