//! Single-step movement primitives shared by monsters and the player.

use crate::env::RngOracle;
use crate::state::{EntityId, Position, World};

/// Moves `id` by `(dx, dy)` if the destination is free. Returns whether it moved.
pub fn step(world: &mut World, id: EntityId, dx: i32, dy: i32) -> bool {
    if dx == 0 && dy == 0 {
        return false;
    }
    let Some(from) = world.entity(id).map(|e| e.position) else {
        return false;
    };
    let to = from.offset(dx, dy);
    if world.is_blocked(to) {
        return false;
    }
    if let Some(entity) = world.entity_mut(id) {
        entity.position = to;
    }
    true
}

/// One step toward `target`.
///
/// Each axis moves by the sign of its delta. If that diagonal is blocked the
/// monster sidesteps along either axis alone.
pub fn step_towards(world: &mut World, id: EntityId, target: Position) -> bool {
    let Some(from) = world.entity(id).map(|e| e.position) else {
        return false;
    };
    let dx = (target.x - from.x).signum();
    let dy = (target.y - from.y).signum();

    step(world, id, dx, dy)
        || (dx != 0 && dy != 0 && (step(world, id, dx, 0) || step(world, id, 0, dy)))
}

/// Aimless wandering: one of the four cardinal directions, or a random
/// nudge on both axes.
pub fn wander(world: &mut World, rng: &mut (impl RngOracle + ?Sized), id: EntityId) -> bool {
    let (dx, dy) = match rng.range(0, 4) {
        0 => (0, -1),
        1 => (0, 1),
        2 => (-1, 0),
        3 => (1, 0),
        _ => (rng.range(-1, 1), rng.range(-1, 1)),
    };
    step(world, id, dx, dy)
}

/// Random offset in `[-1, 1]` on each axis, used while confused.
pub fn stumble(world: &mut World, rng: &mut (impl RngOracle + ?Sized), id: EntityId) -> bool {
    let dx = rng.range(-1, 1);
    let dy = rng.range(-1, 1);
    step(world, id, dx, dy)
}
