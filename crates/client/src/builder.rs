//! Client builder.

use anyhow::{Context, Result};
use rogue_runtime::{SaveRepository, Session};

use crate::Client;
use crate::autopilot::{Autopilot, AutopilotPrompt};

/// Builder for constructing a [`Client`].
///
/// Session and repository are required; the slot defaults to `savegame` and
/// the turn limit to [`Client::DEFAULT_MAX_TURNS`].
#[derive(Default)]
pub struct ClientBuilder {
    session: Option<Session>,
    repository: Option<Box<dyn SaveRepository>>,
    slot: Option<String>,
    max_turns: Option<u64>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn repository(mut self, repository: impl SaveRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    pub fn slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    /// Turns to play in this run before saving and stopping.
    pub fn max_turns(mut self, max_turns: Option<u64>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// # Errors
    ///
    /// Returns an error if the session or the repository is missing.
    pub fn build(self) -> Result<Client> {
        let session = self
            .session
            .context("Session is required. Use .session() to set it.")?;
        let repository = self
            .repository
            .context("Repository is required. Use .repository() to set it.")?;

        Ok(Client {
            session,
            repository,
            slot: self
                .slot
                .unwrap_or_else(|| rogue_runtime::RuntimeConfig::DEFAULT_SLOT.to_owned()),
            max_turns: self.max_turns.unwrap_or(Client::DEFAULT_MAX_TURNS),
            pilot: Autopilot::new(),
            prompt: AutopilotPrompt,
        })
    }
}
