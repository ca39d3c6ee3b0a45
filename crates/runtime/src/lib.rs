//! Runtime orchestration around the deterministic rules.
//!
//! This crate owns everything `rogue-core` deliberately leaves out: the
//! random generator instance, the line-of-sight service, save files and
//! process configuration. Consumers embed a [`Session`] to start or resume a
//! game and feed it commands.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the game loop state and save/load glue
//! - [`repository`] persists save games
//! - [`visibility`] computes the player's field of view
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod error;
pub mod repository;
pub mod session;
pub mod visibility;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveGame, SaveRepository,
};
pub use session::Session;
pub use visibility::RayCastVisibility;
