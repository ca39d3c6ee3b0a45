//! Breadth-first path finding over the tile grid.

use std::collections::{HashMap, VecDeque};

use rogue_core::{Direction, Map, Position};
use strum::IntoEnumIterator;

/// First step of a shortest 8-way path from `from` to the nearest tile
/// accepted by `is_goal`.
///
/// Only tiles accepted by `passable` are entered, except that a goal tile is
/// always enterable so blocked targets (monsters, walls next to unexplored
/// rock) can still be approached. Returns `None` when no goal is reachable or
/// `from` is itself a goal.
pub fn first_step(
    map: &Map,
    from: Position,
    passable: impl Fn(Position) -> bool,
    is_goal: impl Fn(Position) -> bool,
) -> Option<Direction> {
    if is_goal(from) {
        return None;
    }

    let mut came_from: HashMap<Position, (Position, Direction)> = HashMap::new();
    let mut queue = VecDeque::from([from]);

    while let Some(current) = queue.pop_front() {
        for direction in Direction::iter() {
            let (dx, dy) = direction.delta();
            let next = current.offset(dx, dy);
            if next == from || came_from.contains_key(&next) || !map.contains(next) {
                continue;
            }
            let goal = is_goal(next);
            if !goal && !passable(next) {
                continue;
            }
            came_from.insert(next, (current, direction));
            if goal {
                return walk_back(&came_from, from, next);
            }
            queue.push_back(next);
        }
    }
    None
}

fn walk_back(
    came_from: &HashMap<Position, (Position, Direction)>,
    from: Position,
    mut at: Position,
) -> Option<Direction> {
    loop {
        let &(previous, direction) = came_from.get(&at)?;
        if previous == from {
            return Some(direction);
        }
        at = previous;
    }
}

/// Direction of a single step between two adjacent tiles.
pub fn direction_between(from: Position, to: Position) -> Option<Direction> {
    let delta = ((to.x - from.x).signum(), (to.y - from.y).signum());
    Direction::iter().find(|direction| direction.delta() == delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rogue_core::Rect;

    #[test]
    fn steps_around_a_pillar() {
        let mut map = Map::filled(10, 10);
        map.carve_room(&Rect::new(0, 0, 9, 9));
        let pillar = Position::new(4, 4);
        if let Some(tile) = map.tile_mut(pillar) {
            *tile = rogue_core::Tile::wall();
        }

        let from = Position::new(3, 4);
        let goal = Position::new(5, 4);
        let step = first_step(&map, from, |p| !map.is_blocked(p), |p| p == goal).unwrap();
        assert!(matches!(step, Direction::NorthEast | Direction::SouthEast));
    }

    #[test]
    fn unreachable_goal_gives_nothing() {
        let mut map = Map::filled(10, 10);
        map.carve_room(&Rect::new(0, 0, 4, 4));
        let step = first_step(
            &map,
            Position::new(2, 2),
            |p| !map.is_blocked(p),
            |p| p == Position::new(8, 8),
        );
        assert_eq!(step, None);
    }

    #[test]
    fn direction_between_neighbours() {
        let from = Position::new(5, 5);
        assert_eq!(direction_between(from, Position::new(6, 4)), Some(Direction::NorthEast));
        assert_eq!(direction_between(from, from), None);
    }
}
