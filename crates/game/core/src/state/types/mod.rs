pub mod ai;
pub mod common;
pub mod entity;
pub mod item;
pub mod map;
pub mod message;
pub mod timer;

// Re-export common types
pub use common::{Direction, EntityId, Position};

// Re-export entity and capability types
pub use ai::{Ai, AiMode};
pub use entity::{CORPSE_GLYPH, DeathKind, Entity, Fighter, Role};
pub use item::{Equipment, Inventory, Item, Slot, StatBonuses, UseEffect};

// Re-export level geometry
pub use map::{Map, Rect, Tile};

// Re-export message sink
pub use message::{Color, Message, MessageLog, capitalize};

// Re-export timer bookkeeping
pub use timer::{Timer, TimerEffect, TimerId, TimerRegistry};
