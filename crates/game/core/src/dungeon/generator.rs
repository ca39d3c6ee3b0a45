//! Room-and-corridor level generation.
//!
//! Rooms are placed by rejection sampling. Every rejected candidate counts
//! against a single overlap budget for the whole level; once the budget is
//! spent no further rooms are tried. Each accepted room is carved, filled
//! from the spawn tables and joined to the previous room by an L-shaped
//! corridor.

use tracing::{debug, trace};

use super::tables::SpawnTables;
use super::templates;
use crate::config::{GameConfig, MapConfig};
use crate::env::RngOracle;
use crate::state::{EntityId, Map, Position, Rect, World};

/// Summary of a freshly generated level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub spawn: Position,
    pub stairs: Position,
    pub room_centers: Vec<Position>,
    /// Accepted rooms in placement order.
    pub rooms: Vec<Rect>,
    /// Every tile carved by a corridor, possibly with repeats.
    pub corridors: Vec<Position>,
    /// Candidates drawn, accepted or not.
    pub attempts: u32,
    /// Candidates rejected for overlapping an accepted room.
    pub intersections: u32,
}

/// Replaces the current level of `world` with a new one for
/// `world.dungeon_level`.
///
/// The player keeps its inventory and is moved to the center of the first
/// room; the stairs go to the center of the last. Everything else on the old
/// level is dropped.
pub fn generate(
    world: &mut World,
    config: &GameConfig,
    tables: &SpawnTables,
    rng: &mut (impl RngOracle + ?Sized),
) -> Level {
    let map_config = &config.map;
    world.install_level(
        Map::filled(map_config.width, map_config.height),
        Position::ORIGIN,
        EntityId::PLAYER,
        Vec::new(),
    );

    let mut rooms: Vec<Rect> = Vec::new();
    let mut corridors = Vec::new();
    let mut attempts = 0;
    let mut intersections = 0;

    // At least one candidate is always drawn so the level is never empty.
    while attempts < map_config.max_rooms.max(1) && intersections < map_config.max_room_intersects
    {
        attempts += 1;
        let room = random_room(map_config, rng);

        if rooms.iter().any(|other| room.intersects(other)) {
            intersections += 1;
            trace!(target: "rogue::dungeon", ?room, intersections, "room rejected");
            continue;
        }

        world.map.carve_room(&room);
        let center = room.center();
        if rooms.is_empty() {
            world.player_mut().position = center;
        }
        populate(world, tables, &room, rng);

        if let Some(previous) = rooms.last() {
            corridors.extend(connect(&mut world.map, previous.center(), center, rng));
        }
        rooms.push(room);
    }

    let room_centers: Vec<Position> = rooms.iter().map(Rect::center).collect();
    let spawn = world.player().position;
    let stairs = room_centers.last().copied().unwrap_or(spawn);

    let stairs_id = world.allocate_entity_id();
    world.spawn(templates::stairs(stairs_id, stairs));
    world.stairs = stairs_id;

    debug!(
        target: "rogue::dungeon",
        level = world.dungeon_level,
        rooms = rooms.len(),
        attempts,
        intersections,
        entities = world.entities().count(),
        "level generated"
    );

    Level {
        spawn,
        stairs,
        room_centers,
        rooms,
        corridors,
        attempts,
        intersections,
    }
}

fn random_room(config: &MapConfig, rng: &mut (impl RngOracle + ?Sized)) -> Rect {
    let w = rng.range(config.room_min_size, config.room_max_size);
    let h = rng.range(config.room_min_size, config.room_max_size);
    let x = rng.range(0, config.width - w - 1);
    let y = rng.range(0, config.height - h - 1);
    Rect::new(x, y, w, h)
}

/// Carves an L-shaped corridor and returns the tiles it opened. Which leg
/// comes first is a coin flip.
fn connect(
    map: &mut Map,
    from: Position,
    to: Position,
    rng: &mut (impl RngOracle + ?Sized),
) -> Vec<Position> {
    let corner = if rng.coin_flip() {
        map.carve_h_tunnel(from.x, to.x, from.y);
        map.carve_v_tunnel(from.y, to.y, to.x);
        Position::new(to.x, from.y)
    } else {
        map.carve_v_tunnel(from.y, to.y, from.x);
        map.carve_h_tunnel(from.x, to.x, to.y);
        Position::new(from.x, to.y)
    };
    straight(from, corner).chain(straight(corner, to)).collect()
}

/// Tiles of an axis-aligned segment, both ends included.
fn straight(a: Position, b: Position) -> impl Iterator<Item = Position> {
    let (x1, x2) = (a.x.min(b.x), a.x.max(b.x));
    let (y1, y2) = (a.y.min(b.y), a.y.max(b.y));
    (x1..=x2).flat_map(move |x| (y1..=y2).map(move |y| Position::new(x, y)))
}

/// Drops monsters and items on random interior tiles of `room`.
///
/// A slot whose tile is already blocked is skipped without drawing a kind.
fn populate(
    world: &mut World,
    tables: &SpawnTables,
    room: &Rect,
    rng: &mut (impl RngOracle + ?Sized),
) {
    let level = world.dungeon_level;

    for _ in 0..tables.max_monsters.from_dungeon_level(level) {
        let spot = random_interior(room, rng);
        if world.is_blocked(spot) {
            continue;
        }
        if let Some(kind) = tables.pick_monster(level, rng) {
            let id = world.allocate_entity_id();
            world.spawn(templates::monster(kind, id, spot));
        }
    }

    for _ in 0..tables.max_items.from_dungeon_level(level) {
        let spot = random_interior(room, rng);
        if world.is_blocked(spot) {
            continue;
        }
        if let Some(kind) = tables.pick_item(level, rng) {
            let id = world.allocate_entity_id();
            world.spawn(templates::item(kind, id, spot));
        }
    }
}

fn random_interior(room: &Rect, rng: &mut (impl RngOracle + ?Sized)) -> Position {
    Position::new(
        rng.range(room.x1 + 1, room.x2 - 1),
        rng.range(room.y1 + 1, room.y2 - 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::Role;
    use crate::testing::arena;

    fn small_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.map.width = 40;
        config.map.height = 30;
        config
    }

    #[test]
    fn interiors_are_open_and_outside_is_wall() {
        let config = small_config();
        let mut world = arena();
        let level = generate(&mut world, &config, &SpawnTables::default(), &mut PcgRng::new(7));

        assert!(!level.room_centers.is_empty());
        assert_eq!(world.map.width(), 40);
        for center in &level.room_centers {
            assert!(!world.map.is_blocked(*center));
        }
        // The map border can never be carved: rooms end at least one tile inside.
        for x in 0..40 {
            assert!(world.map.is_blocked(Position::new(x, 0)));
        }
    }

    #[test]
    fn player_spawns_in_first_room_and_stairs_in_last() {
        let config = small_config();
        let mut world = arena();
        let level = generate(&mut world, &config, &SpawnTables::default(), &mut PcgRng::new(11));

        assert_eq!(world.player().position, level.room_centers[0]);
        assert_eq!(level.spawn, level.room_centers[0]);
        let stairs = world.entity(world.stairs).unwrap();
        assert_eq!(stairs.position, *level.room_centers.last().unwrap());
        assert_eq!(stairs.role(), Role::Scenery);
    }

    #[test]
    fn overlap_budget_bounds_attempts() {
        let mut config = small_config();
        config.map.max_room_intersects = 1;
        let mut world = arena();
        let level = generate(&mut world, &config, &SpawnTables::default(), &mut PcgRng::new(3));

        assert!(level.attempts <= config.map.max_rooms);
        assert!(level.intersections <= 1);
        assert_eq!(
            level.room_centers.len() as u32 + level.intersections,
            level.attempts
        );
    }

    #[test]
    fn same_seed_same_level() {
        let config = small_config();
        let tables = SpawnTables::default();
        let mut a = arena();
        let mut b = arena();
        generate(&mut a, &config, &tables, &mut PcgRng::new(42));
        generate(&mut b, &config, &tables, &mut PcgRng::new(42));
        assert_eq!(a.map, b.map);
        assert_eq!(a.entity_ids(), b.entity_ids());
    }

    #[test]
    fn monsters_never_share_a_tile() {
        let config = small_config();
        let mut world = arena();
        generate(&mut world, &config, &SpawnTables::default(), &mut PcgRng::new(5));

        let blockers: Vec<Position> = world
            .entities()
            .filter(|e| e.blocks)
            .map(|e| e.position)
            .collect();
        let mut unique = blockers.clone();
        unique.sort_by_key(|p| (p.x, p.y));
        unique.dedup();
        assert_eq!(unique.len(), blockers.len());
    }

    #[test]
    fn corridor_cells_cover_both_legs() {
        let mut map = Map::filled(12, 12);
        // first flip says horizontal leg first
        let mut rng = crate::testing::ScriptedRng::new([1]);
        let cells = connect(&mut map, Position::new(2, 2), Position::new(5, 4), &mut rng);

        let mut expected = vec![
            Position::new(2, 2),
            Position::new(3, 2),
            Position::new(4, 2),
            Position::new(5, 2),
            Position::new(5, 3),
            Position::new(5, 4),
        ];
        let mut got = cells.clone();
        got.sort_by_key(|p| (p.x, p.y));
        got.dedup();
        expected.sort_by_key(|p| (p.x, p.y));
        assert_eq!(got, expected);
        let open = map.iter().filter(|(_, tile)| !tile.blocked).count();
        assert_eq!(open, expected.len());
    }
}
