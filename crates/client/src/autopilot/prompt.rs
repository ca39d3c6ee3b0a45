//! Answers to the engine's mid-turn questions.

use rogue_core::stats;
use rogue_core::{EntityId, LevelUpChoice, PlayerPrompt, Position, World};

use super::policy::visible_monsters;

/// Max hit points the pilot builds up before it trains other stats.
const HEALTHY_MAX_HP: i32 = 200;

/// Targets the nearest monster in view and grows hit points first.
#[derive(Debug, Default)]
pub struct AutopilotPrompt;

impl PlayerPrompt for AutopilotPrompt {
    fn select_tile(&mut self, world: &World, max_range: Option<f64>) -> Option<Position> {
        let here = world.player().position;
        visible_monsters(world, here)
            .into_iter()
            .map(|(_, at)| at)
            .find(|at| max_range.is_none_or(|range| here.distance(*at) <= range))
    }

    fn choose_level_up(&mut self, world: &World, options: &[LevelUpChoice]) -> LevelUpChoice {
        let max_hp = stats::effective_stats(world, EntityId::PLAYER)
            .map(|stats| stats.max_hp)
            .unwrap_or(0);
        let preferred = if max_hp < HEALTHY_MAX_HP {
            LevelUpChoice::Constitution
        } else if world.player_level % 2 == 0 {
            LevelUpChoice::Strength
        } else {
            LevelUpChoice::Toughness
        };

        if options.contains(&preferred) {
            preferred
        } else {
            options.first().copied().unwrap_or(preferred)
        }
    }
}
