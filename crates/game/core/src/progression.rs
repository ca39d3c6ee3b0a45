//! Experience and character levels.

use strum::IntoEnumIterator;
use tracing::info;

use crate::config::GameConfig;
use crate::env::{LevelUpChoice, PlayerPrompt, RngOracle};
use crate::error::InvariantViolation;
use crate::state::{Color, EntityId, World};
use crate::stats::{self, EffectiveStats};

/// Levels the player up as long as accrued xp covers the threshold.
///
/// Each level subtracts the threshold, heals a random part of the missing hit
/// points and asks the player which stat to raise. Returns the number of
/// levels gained.
pub fn check_level_up(
    world: &mut World,
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
    prompt: &mut (impl PlayerPrompt + ?Sized),
) -> Result<u32, InvariantViolation> {
    let mut gained = 0;
    loop {
        let threshold = config.level_up_threshold(world.player_level);
        let fighter = world.fighter_mut(EntityId::PLAYER)?;
        if fighter.xp < threshold {
            return Ok(gained);
        }
        fighter.xp -= threshold;
        world.player_level += 1;
        gained += 1;

        let missing = stats::missing_hp(world, EntityId::PLAYER)?;
        let restored = rng.range(0, missing);
        stats::heal(world, EntityId::PLAYER, restored)?;

        let level = world.player_level;
        world.message(
            format!("Your battle skills grow stronger! You reached level {level}!"),
            Color::Yellow,
        );
        info!(target: "rogue::progression", level, restored, "player levelled up");

        let options: Vec<_> = LevelUpChoice::iter().collect();
        let choice = prompt.choose_level_up(world, &options);
        apply_choice(world, choice)?;
    }
}

/// Raises the stat behind `choice`.
pub fn apply_choice(world: &mut World, choice: LevelUpChoice) -> Result<(), InvariantViolation> {
    let fighter = world.fighter_mut(EntityId::PLAYER)?;
    match choice {
        LevelUpChoice::Constitution => fighter.base_max_hp += 20,
        LevelUpChoice::Strength => fighter.base_power += 1,
        LevelUpChoice::Toughness => fighter.base_defense += 1,
        LevelUpChoice::Agility => fighter.base_critical += 1,
    }
    Ok(())
}

/// Everything shown on the character screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSheet {
    pub level: u32,
    pub xp: i32,
    pub xp_to_level: i32,
    pub hp: i32,
    pub stats: EffectiveStats,
    pub dungeon_level: u32,
}

impl CharacterSheet {
    pub fn of(world: &World, config: &GameConfig) -> Result<Self, InvariantViolation> {
        let fighter = world.fighter(EntityId::PLAYER)?;
        Ok(Self {
            level: world.player_level,
            xp: fighter.xp,
            xp_to_level: config.level_up_threshold(world.player_level),
            hp: fighter.hp,
            stats: stats::effective_stats(world, EntityId::PLAYER)?,
            dungeon_level: world.dungeon_level,
        })
    }

    /// Lines of the character screen.
    pub fn lines(&self) -> Vec<String> {
        vec![
            "Character Information".to_string(),
            format!("Level: {}", self.level),
            format!("Experience: {}", self.xp),
            format!("Experience to level up: {}", self.xp_to_level),
            format!("Maximum HP: {}", self.stats.max_hp),
            format!("Attack: {}", self.stats.power),
            format!("Defense: {}", self.stats.defense),
            format!("Critical: {}", self.stats.critical),
            format!("Hit chance: {}", self.stats.hit_chance),
        ]
    }
}
