//! Game creation and level transitions.

use tracing::info;

use crate::config::GameConfig;
use crate::dungeon::{self, SpawnTables, templates};
use crate::env::{RngOracle, VisibilityOracle};
use crate::error::InvariantViolation;
use crate::state::{Color, EntityId, Hunger, MessageLog, Position, World};
use crate::stats;
use crate::timers;

/// Builds a fresh game on dungeon level 1.
///
/// The player starts with the dagger and dirty rags equipped and the hunger
/// clock running.
pub fn new_game(
    config: &GameConfig,
    tables: &SpawnTables,
    rng: &mut (impl RngOracle + ?Sized),
    visibility: &(impl VisibilityOracle + ?Sized),
) -> World {
    let player = templates::player(config, Position::ORIGIN);
    let mut world = World::new(
        player,
        MessageLog::new(config.message_capacity),
        Hunger::new(config.hunger.max_satiety),
    );
    dungeon::generate(&mut world, config, tables, rng);

    let dagger = world.allocate_entity_id();
    let rags = world.allocate_entity_id();
    let inventory = world.inventory_entry(EntityId::PLAYER);
    for piece in templates::starting_gear(dagger, rags) {
        inventory
            .push(piece)
            .expect("starting gear must fit in an empty inventory");
    }

    timers::arm_hunger(&mut world, config);
    world.message(
        "You awake to find yourself alone in a pit. Good luck, stranger.",
        Color::Blue,
    );
    refresh_fov(&mut world, config, visibility);

    info!(target: "rogue::engine", entities = world.entities().count(), "new game started");
    world
}

/// Rests the player and moves them one level deeper.
pub fn descend(
    world: &mut World,
    config: &GameConfig,
    tables: &SpawnTables,
    rng: &mut (impl RngOracle + ?Sized),
    visibility: &(impl VisibilityOracle + ?Sized),
) -> Result<(), InvariantViolation> {
    world.message(
        "You take a moment to rest, and recover your strength.",
        Color::LightViolet,
    );
    let max_hp = stats::effective_stats(world, EntityId::PLAYER)?.max_hp;
    stats::heal(world, EntityId::PLAYER, max_hp / 2)?;

    world.message(
        "After a rare moment of peace, you descend deeper into the heart of the dungeon...",
        Color::Red,
    );
    world.dungeon_level += 1;
    dungeon::generate(world, config, tables, rng);
    refresh_fov(world, config, visibility);

    info!(target: "rogue::engine", level = world.dungeon_level, "descended");
    Ok(())
}

/// Asks the visibility service for the player's field of view.
pub fn refresh_fov(
    world: &mut World,
    config: &GameConfig,
    visibility: &(impl VisibilityOracle + ?Sized),
) {
    let visible = visibility.compute_visible(&world.map, world.player().position, config.torch_radius);
    world.set_visible(visible);
}
