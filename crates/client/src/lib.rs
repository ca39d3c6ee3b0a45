//! Headless client that plays a session to the end or to a turn limit.
//!
//! # Architecture
//!
//! ```text
//! Client
//!   ├─→ Session     (world, generator, visibility; from rogue-runtime)
//!   ├─→ Autopilot   (chooses commands, answers prompts)
//!   └─→ Repository  (where the game is saved on exit)
//! ```
//!
//! The binary wires these together from the environment; tests assemble
//! them directly through [`ClientBuilder`].

pub mod autopilot;
mod builder;
pub mod logging;

pub use builder::ClientBuilder;

use anyhow::{Context, Result};
use rogue_core::{GameStatus, PlayerAction};
use rogue_runtime::{SaveRepository, Session};
use tracing::{info, warn};

use autopilot::{Autopilot, AutopilotPrompt};

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Turns taken over the whole game, including earlier runs.
    pub turns: u64,
    pub dungeon_level: u32,
    pub player_level: u32,
    pub died: bool,
    /// Last lines of the message log, oldest first.
    pub messages: Vec<String>,
}

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. [`Client::builder`] collects the session and the save repository
/// 2. [`Client::run`] plays until death, an exit command or the turn limit
/// 3. A living player is saved to the slot; a dead one has the slot cleared
pub struct Client {
    session: Session,
    repository: Box<dyn SaveRepository>,
    slot: String,
    max_turns: u64,
    pilot: Autopilot,
    prompt: AutopilotPrompt,
}

impl Client {
    pub const DEFAULT_MAX_TURNS: u64 = 5_000;

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run(mut self) -> Result<RunSummary> {
        let start = self.session.turns();
        info!(target: "rogue::client", start, max_turns = self.max_turns, "autopilot engaged");

        while self.session.turns() - start < self.max_turns {
            let command = self
                .pilot
                .next_command(self.session.world(), self.session.config())
                .context("autopilot could not read the world")?;
            let report = self.session.step(command, &mut self.prompt)?;
            self.pilot.observe(&report);

            if let Some(sheet) = &report.character {
                for line in sheet.lines() {
                    info!(target: "rogue::client", "{line}");
                }
            }
            if report.action == PlayerAction::Exit {
                break;
            }
        }

        let died = self.session.world().status == GameStatus::Dead;
        if died {
            warn!(target: "rogue::client", turns = self.session.turns(), "the player died");
            self.repository
                .delete(&self.slot)
                .context("failed to clear the save slot")?;
        } else {
            self.session
                .save(self.repository.as_ref(), &self.slot)
                .context("failed to save the game")?;
        }

        let world = self.session.world();
        Ok(RunSummary {
            turns: self.session.turns(),
            dungeon_level: world.dungeon_level,
            player_level: world.player_level,
            died,
            messages: world.messages.iter().map(|m| m.text.clone()).collect(),
        })
    }
}
