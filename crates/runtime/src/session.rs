//! A running game: the world plus everything needed to advance it.
use tracing::{debug, info};

use rogue_core::{
    Command, Env, GameConfig, GameEngine, PcgRng, PlayerAction, PlayerPrompt, SpawnTables,
    TurnReport, World, new_game, refresh_fov,
};

use crate::error::Result;
use crate::repository::{RepositoryError, SaveGame, SaveRepository};
use crate::visibility::RayCastVisibility;

/// Owns the world, the generator and the content a game was started with.
///
/// Player decisions that arise mid-turn (targets, level-up stats) are asked
/// of the [`PlayerPrompt`] handed to [`Session::step`].
pub struct Session {
    world: World,
    rng: PcgRng,
    config: GameConfig,
    tables: SpawnTables,
    visibility: RayCastVisibility,
    turns: u64,
}

impl Session {
    /// Starts a new game on dungeon level 1.
    pub fn new(config: GameConfig, tables: SpawnTables, seed: u64) -> Self {
        let mut rng = PcgRng::new(seed);
        let visibility = RayCastVisibility;
        let world = new_game(&config, &tables, &mut rng, &visibility);
        info!(target: "rogue::runtime", seed, "session started");

        Self {
            world,
            rng,
            config,
            tables,
            visibility,
            turns: 0,
        }
    }

    /// Resumes the game stored in `slot`.
    ///
    /// The field of view is recomputed before any turn is played.
    pub fn load(
        repository: &dyn SaveRepository,
        slot: &str,
        config: GameConfig,
        tables: SpawnTables,
    ) -> Result<Self> {
        let save = repository
            .load(slot)?
            .ok_or_else(|| RepositoryError::EmptySlot(slot.into()))?;

        let mut session = Self {
            world: save.world,
            rng: save.rng,
            config,
            tables,
            visibility: RayCastVisibility,
            turns: save.turns,
        };
        refresh_fov(&mut session.world, &session.config, &session.visibility);
        info!(
            target: "rogue::runtime",
            slot,
            turns = session.turns,
            level = session.world.dungeon_level,
            "session resumed"
        );
        Ok(session)
    }

    /// Writes the complete game into `slot`.
    pub fn save(&self, repository: &dyn SaveRepository, slot: &str) -> Result<()> {
        let save = SaveGame {
            world: self.world.clone(),
            rng: self.rng.clone(),
            turns: self.turns,
        };
        repository.save(slot, &save)?;
        info!(target: "rogue::runtime", slot, turns = self.turns, "session saved");
        Ok(())
    }

    /// Plays one command through the engine.
    pub fn step(&mut self, command: Command, prompt: &mut dyn PlayerPrompt) -> Result<TurnReport> {
        let mut env = Env::new(&mut self.rng, &self.visibility, prompt);
        let report =
            GameEngine::new(&mut self.world, &self.config, &self.tables).play_turn(command, &mut env)?;

        if report.action == PlayerAction::TookTurn {
            self.turns += 1;
        }
        debug!(
            target: "rogue::runtime",
            ?command,
            action = ?report.action,
            turn = self.turns,
            "step"
        );
        Ok(report)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Turns taken so far, including those before the game was saved.
    pub fn turns(&self) -> u64 {
        self.turns
    }
}
