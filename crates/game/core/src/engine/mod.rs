//! Turn pipeline.
//!
//! The [`GameEngine`] is the only place where a whole turn is sequenced:
//!
//! 1. the player's command resolves completely,
//! 2. the field of view is refreshed if the player moved,
//! 3. every timer ticks once,
//! 4. every monster acts, in entity-list order,
//! 5. the player levels up if enough experience was gathered.
//!
//! Steps 3 and 4 only run when the command took a turn and the player is
//! still alive.

mod command;
mod errors;
mod level;

pub use command::{Command, PlayerAction, TurnReport};
pub use errors::{EngineError, TurnPhase};
pub use level::{descend, new_game, refresh_fov};

use tracing::{debug, trace};

use crate::ai::{self, movement};
use crate::combat;
use crate::config::GameConfig;
use crate::dungeon::SpawnTables;
use crate::env::Env;
use crate::error::InvariantViolation;
use crate::inventory;
use crate::progression::{self, CharacterSheet};
use crate::state::{Color, EntityId, GameStatus, World};
use crate::timers;

/// Drives one world through player commands.
pub struct GameEngine<'a> {
    world: &'a mut World,
    config: &'a GameConfig,
    tables: &'a SpawnTables,
}

impl<'a> GameEngine<'a> {
    pub fn new(world: &'a mut World, config: &'a GameConfig, tables: &'a SpawnTables) -> Self {
        Self {
            world,
            config,
            tables,
        }
    }

    pub fn world(&self) -> &World {
        self.world
    }

    /// Resolves `command` and, if it took a turn, everything that follows it.
    ///
    /// Once the player is dead only [`Command::Quit`] and
    /// [`Command::ShowCharacter`] do anything.
    pub fn play_turn(
        &mut self,
        command: Command,
        env: &mut Env<'_>,
    ) -> Result<TurnReport, EngineError> {
        if self.world.status == GameStatus::Dead
            && !matches!(command, Command::Quit | Command::ShowCharacter)
        {
            return Ok(TurnReport::new(PlayerAction::DidntTakeTurn));
        }

        let mut report = self
            .player_action(command, env)
            .map_err(EngineError::in_phase(TurnPhase::PlayerAction))?;
        if report.action == PlayerAction::Exit {
            return Ok(report);
        }

        if self.world.needs_fov() {
            refresh_fov(self.world, self.config, env.visibility);
        }

        if report.action == PlayerAction::TookTurn && self.world.status == GameStatus::Playing {
            let fired = timers::tick(self.world, self.config)
                .map_err(EngineError::in_phase(TurnPhase::Timers))?;
            report.timers_fired = fired.len();

            self.monsters_act(env)
                .map_err(EngineError::in_phase(TurnPhase::Monsters))?;
        }

        if self.world.is_player_alive() {
            report.levels_gained =
                progression::check_level_up(self.world, self.config, &mut *env.rng, &mut *env.prompt)
                    .map_err(EngineError::in_phase(TurnPhase::Progression))?;
        }

        trace!(target: "rogue::engine", ?command, action = ?report.action, "turn resolved");
        Ok(report)
    }

    fn player_action(
        &mut self,
        command: Command,
        env: &mut Env<'_>,
    ) -> Result<TurnReport, InvariantViolation> {
        let action = match command {
            Command::Move(direction) => {
                let (dx, dy) = direction.delta();
                self.move_or_attack(dx, dy, env)?;
                PlayerAction::TookTurn
            }
            Command::Wait => PlayerAction::TookTurn,
            Command::PickUp => PlayerAction::from_took_turn(self.pick_up()?),
            Command::Use(index) => {
                let outcome = inventory::use_item(
                    self.world,
                    self.config,
                    &mut *env.prompt,
                    EntityId::PLAYER,
                    index,
                )?;
                PlayerAction::from_took_turn(outcome.took_turn())
            }
            Command::Drop(index) => {
                inventory::drop_item(self.world, EntityId::PLAYER, index)?;
                PlayerAction::TookTurn
            }
            Command::Descend => PlayerAction::from_took_turn(self.descend(env)?),
            Command::ShowCharacter => {
                let mut report = TurnReport::new(PlayerAction::DidntTakeTurn);
                report.character = Some(CharacterSheet::of(self.world, self.config)?);
                return Ok(report);
            }
            Command::Quit => PlayerAction::Exit,
        };
        Ok(TurnReport::new(action))
    }

    /// Bumping into a fighter attacks it; anything else is a step.
    fn move_or_attack(&mut self, dx: i32, dy: i32, env: &mut Env<'_>) -> Result<(), InvariantViolation> {
        let target = self.world.player().position.offset(dx, dy);
        match self.world.fighter_at(target) {
            Some(defender) if !defender.is_player() => {
                combat::attack(self.world, self.config, &mut *env.rng, EntityId::PLAYER, defender)?;
            }
            _ => {
                if movement::step(self.world, EntityId::PLAYER, dx, dy) {
                    self.world.invalidate_fov();
                }
            }
        }
        Ok(())
    }

    fn pick_up(&mut self) -> Result<bool, InvariantViolation> {
        let position = self.world.player().position;
        match self.world.items_at(position).first() {
            Some(&item) => inventory::pick_up(self.world, EntityId::PLAYER, item),
            None => {
                self.world.message("There is nothing here to pick up.", Color::Yellow);
                Ok(false)
            }
        }
    }

    fn descend(&mut self, env: &mut Env<'_>) -> Result<bool, InvariantViolation> {
        let stairs = self.world.require(self.world.stairs)?.position;
        if stairs != self.world.player().position {
            self.world.message("There are no stairs here.", Color::Yellow);
            return Ok(false);
        }
        descend(
            self.world,
            self.config,
            self.tables,
            &mut *env.rng,
            env.visibility,
        )?;
        Ok(true)
    }

    fn monsters_act(&mut self, env: &mut Env<'_>) -> Result<(), InvariantViolation> {
        for id in self.world.entity_ids() {
            let acts = self.world.entity(id).is_some_and(|e| e.ai.is_some());
            if acts {
                ai::take_turn(self.world, self.config, &mut *env.rng, id)?;
            }
        }
        debug!(target: "rogue::engine", hp = ?self.world.player().fighter.as_ref().map(|f| f.hp), "monsters done");
        Ok(())
    }
}
