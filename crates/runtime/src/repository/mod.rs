//! Save game persistence.
//!
//! A save is the complete world snapshot plus the generator state, so a
//! loaded game continues exactly where it left off. The field of view is not
//! part of a save and is recomputed by the session after loading.

mod error;
mod file;
mod memory;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;

use rogue_core::{PcgRng, World};

/// Everything needed to resume a game.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SaveGame {
    pub world: World,
    pub rng: PcgRng,
    /// Turns taken so far.
    pub turns: u64,
}

/// Repository for save games, one per named slot.
pub trait SaveRepository: Send + Sync {
    /// Save a game into `slot`, replacing what was there.
    fn save(&self, slot: &str, game: &SaveGame) -> Result<()>;

    /// Load the game in `slot`, or `None` if the slot is empty.
    fn load(&self, slot: &str) -> Result<Option<SaveGame>>;

    /// Check if a slot holds a save
    fn exists(&self, slot: &str) -> bool;

    /// Delete a save; deleting an empty slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;
}
