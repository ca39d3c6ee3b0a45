//! Shared fixtures for unit tests.

use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::env::{LevelUpChoice, PlayerPrompt, RngOracle, VisibilityOracle, VisibleSet};
use crate::state::{
    Ai, AiMode, Color, DeathKind, Entity, EntityId, Fighter, Hunger, Map, MessageLog, Position,
    Rect, World,
};

/// Replays a fixed list of rolls, clamped into the requested range.
/// Once the script runs out every roll returns `min`.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    rolls: VecDeque<i32>,
}

impl ScriptedRng {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RngOracle for ScriptedRng {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        match self.rolls.pop_front() {
            Some(value) if max > min => value.clamp(min, max),
            _ => min,
        }
    }
}

/// Sees every tile within the radius, walls included.
pub struct OpenSight;

impl VisibilityOracle for OpenSight {
    fn compute_visible(&self, map: &Map, origin: Position, radius: u32) -> VisibleSet {
        let r = radius as i32;
        map.iter()
            .map(|(pos, _)| pos)
            .filter(|pos| radius == 0 || origin.chebyshev(*pos) <= r)
            .collect()
    }
}

/// Answers prompts from a script; aborts once the script is exhausted.
#[derive(Default)]
pub struct ScriptedPrompt {
    pub tiles: VecDeque<Position>,
    pub level_ups: VecDeque<LevelUpChoice>,
}

impl ScriptedPrompt {
    pub fn tiles(tiles: impl IntoIterator<Item = Position>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
            level_ups: VecDeque::new(),
        }
    }
}

impl PlayerPrompt for ScriptedPrompt {
    fn select_tile(&mut self, _world: &World, _max_range: Option<f64>) -> Option<Position> {
        self.tiles.pop_front()
    }

    fn choose_level_up(&mut self, _world: &World, _options: &[LevelUpChoice]) -> LevelUpChoice {
        self.level_ups
            .pop_front()
            .unwrap_or(LevelUpChoice::Constitution)
    }
}

/// A single open 20x20 room with the player at (5, 5) and no gear.
pub fn arena() -> World {
    let config = GameConfig::default();
    let player = Entity::new(EntityId::PLAYER, Position::ORIGIN, '@', "player", Color::White)
        .blocking()
        .with_fighter(
            Fighter::new(100, 0, 2, 0, DeathKind::Player).with_hit_chance(config.player.hit_chance),
        );
    let mut world = World::new(player, MessageLog::default(), Hunger::new(100));
    let mut map = Map::filled(20, 20);
    map.carve_room(&Rect::new(0, 0, 19, 19));
    world.install_level(map, Position::new(5, 5), EntityId::PLAYER, Vec::new());
    world
}

/// Spawns an orc with the classic stats at `position`.
pub fn spawn_orc(world: &mut World, position: Position) -> EntityId {
    let id = world.allocate_entity_id();
    world.spawn(
        Entity::new(id, position, 'o', "orc", Color::DesaturatedGreen)
            .blocking()
            .with_fighter(Fighter::new(20, 0, 4, 36, DeathKind::Monster))
            .with_ai(Ai::new(AiMode::Dormant)),
    )
}
