#![allow(dead_code)]

use std::collections::VecDeque;

use rogue_core::dungeon::templates;
use rogue_core::{
    Command, EntityId, Env, GameConfig, GameEngine, Hunger, LevelUpChoice, Map, MessageLog,
    MonsterKind, PlayerPrompt, Position, Rect, RngOracle, SpawnTables, TurnReport,
    VisibilityOracle, VisibleSet, World,
};

/// Replays scripted rolls clamped into range; `min` once exhausted.
#[derive(Default)]
pub struct Rolls(VecDeque<i32>);

impl Rolls {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self(rolls.into_iter().collect())
    }
}

impl RngOracle for Rolls {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        match self.0.pop_front() {
            Some(value) if max > min => value.clamp(min, max),
            _ => min,
        }
    }
}

/// Square torch: everything within Chebyshev `radius`, walls included.
pub struct Torch;

impl VisibilityOracle for Torch {
    fn compute_visible(&self, map: &Map, origin: Position, radius: u32) -> VisibleSet {
        map.iter()
            .map(|(pos, _)| pos)
            .filter(|pos| radius == 0 || origin.chebyshev(*pos) <= radius as i32)
            .collect()
    }
}

/// Answers target prompts from a list, aborting when it runs dry.
#[derive(Default)]
pub struct Answers(pub VecDeque<Position>);

impl PlayerPrompt for Answers {
    fn select_tile(&mut self, _world: &World, _max_range: Option<f64>) -> Option<Position> {
        self.0.pop_front()
    }

    fn choose_level_up(&mut self, _world: &World, _options: &[LevelUpChoice]) -> LevelUpChoice {
        LevelUpChoice::Strength
    }
}

/// Config with combat noise switched off and a short torch.
pub fn config() -> GameConfig {
    let mut config = GameConfig::default();
    config.combat.sound_chance = 0;
    config.torch_radius = 4;
    config
}

/// One open 30x12 room, the player at (2, 5) with no gear.
pub fn open_room(config: &GameConfig) -> World {
    let player = templates::player(config, Position::ORIGIN);
    let mut world = World::new(player, MessageLog::new(32), Hunger::new(100));
    let mut map = Map::filled(30, 12);
    map.carve_room(&Rect::new(0, 0, 29, 11));
    world.install_level(map, Position::new(2, 5), EntityId::PLAYER, Vec::new());
    world
}

pub fn spawn(world: &mut World, kind: MonsterKind, position: Position) -> EntityId {
    let id = world.allocate_entity_id();
    world.spawn(templates::monster(kind, id, position))
}

/// Plays one command with the given rolls and prompt answers.
pub fn play(
    world: &mut World,
    config: &GameConfig,
    command: Command,
    rng: &mut Rolls,
    prompt: &mut Answers,
) -> TurnReport {
    let tables = SpawnTables::default();
    let mut env = Env::new(rng, &Torch, prompt);
    GameEngine::new(world, config, &tables)
        .play_turn(command, &mut env)
        .expect("turn should resolve")
}
