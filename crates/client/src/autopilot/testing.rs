//! Small hand-built worlds for autopilot tests.

use rogue_core::dungeon::templates;
use rogue_core::{
    EntityId, GameConfig, Hunger, ItemKind, Map, MessageLog, MonsterKind, Position, Rect, World,
    refresh_fov,
};
use rogue_runtime::RayCastVisibility;

/// Lit 20x12 room with the player at (5, 5) and nothing else.
pub fn arena() -> (World, GameConfig) {
    let config = GameConfig::default();
    let player = templates::player(&config, Position::ORIGIN);
    let mut world = World::new(player, MessageLog::new(16), Hunger::new(100));
    let mut map = Map::filled(20, 12);
    map.carve_room(&Rect::new(0, 0, 19, 11));
    world.install_level(map, Position::new(5, 5), EntityId::PLAYER, Vec::new());
    refresh_fov(&mut world, &config, &RayCastVisibility);
    (world, config)
}

pub fn put_monster(world: &mut World, kind: MonsterKind, position: Position) -> EntityId {
    let id = world.allocate_entity_id();
    world.spawn(templates::monster(kind, id, position))
}

/// Adds an item to the player's pack and returns its index.
pub fn put_item(world: &mut World, kind: ItemKind) -> usize {
    let id = world.allocate_entity_id();
    let inventory = world.inventory_entry(EntityId::PLAYER);
    inventory
        .push(templates::item(kind, id, Position::ORIGIN))
        .expect("arena pack has room");
    inventory.len() - 1
}
