//! Ray-casting field of view.
//!
//! Rays are traced with Bresenham lines from the viewer to every tile on the
//! border of the torch square. A ray lights each tile it crosses and stops
//! after the first tile that blocks sight, so walls facing the viewer are
//! visible while whatever lies behind them is not.

use rogue_core::{Map, Position, VisibilityOracle, VisibleSet};

/// Field of view by brute-force ray casting.
#[derive(Clone, Copy, Debug, Default)]
pub struct RayCastVisibility;

impl VisibilityOracle for RayCastVisibility {
    fn compute_visible(&self, map: &Map, origin: Position, radius: u32) -> VisibleSet {
        let mut visible = VisibleSet::new();
        if !map.contains(origin) {
            return visible;
        }
        visible.insert(origin);

        for target in perimeter(map, origin, radius) {
            cast(map, origin, target, radius, &mut visible);
        }
        visible
    }
}

/// Border tiles of the square a ray has to reach. Radius 0 casts to the map
/// edges instead.
fn perimeter(map: &Map, origin: Position, radius: u32) -> Vec<Position> {
    let (x1, y1, x2, y2) = if radius == 0 {
        (0, 0, map.width() - 1, map.height() - 1)
    } else {
        let r = radius as i32;
        (origin.x - r, origin.y - r, origin.x + r, origin.y + r)
    };

    let mut border = Vec::new();
    for x in x1..=x2 {
        border.push(Position::new(x, y1));
        border.push(Position::new(x, y2));
    }
    for y in (y1 + 1)..y2 {
        border.push(Position::new(x1, y));
        border.push(Position::new(x2, y));
    }
    border
}

fn cast(map: &Map, origin: Position, target: Position, radius: u32, visible: &mut VisibleSet) {
    for position in line(origin, target).skip(1) {
        if !map.contains(position) {
            break;
        }
        if radius > 0 && origin.distance(position) > f64::from(radius) {
            break;
        }
        visible.insert(position);
        if map.blocks_sight(position) {
            break;
        }
    }
}

/// Bresenham line from `from` to `to`, both ends included.
fn line(from: Position, to: Position) -> impl Iterator<Item = Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut current = Some(from);
    let mut err = dx + dy;
    std::iter::from_fn(move || {
        let point = current?;
        current = if point == to {
            None
        } else {
            let mut next = point;
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                next.x += sx;
            }
            if e2 <= dx {
                err += dx;
                next.y += sy;
            }
            Some(next)
        };
        Some(point)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rogue_core::Rect;

    fn open_map() -> Map {
        let mut map = Map::filled(21, 21);
        map.carve_room(&Rect::new(0, 0, 20, 20));
        map
    }

    #[test]
    fn line_visits_both_ends() {
        let points: Vec<_> = line(Position::new(0, 0), Position::new(3, 1)).collect();
        assert_eq!(points.first(), Some(&Position::new(0, 0)));
        assert_eq!(points.last(), Some(&Position::new(3, 1)));
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn radius_limits_sight_in_the_open() {
        let map = open_map();
        let origin = Position::new(10, 10);
        let visible = RayCastVisibility.compute_visible(&map, origin, 3);

        assert!(visible.contains(origin));
        assert!(visible.contains(Position::new(13, 10)));
        assert!(visible.contains(Position::new(12, 12)));
        assert!(!visible.contains(Position::new(14, 10)));
        // (13, 13) is 4.24 tiles away.
        assert!(!visible.contains(Position::new(13, 13)));
    }

    #[test]
    fn walls_are_seen_but_not_through() {
        let mut map = Map::filled(21, 21);
        map.carve_room(&Rect::new(0, 0, 20, 20));
        // Full-height wall two tiles east of the viewer.
        for y in 0..21 {
            if let Some(tile) = map.tile_mut(Position::new(12, y)) {
                tile.blocked = true;
                tile.blocks_sight = true;
            }
        }
        let origin = Position::new(10, 10);
        let visible = RayCastVisibility.compute_visible(&map, origin, 0);

        assert!(visible.contains(Position::new(11, 10)));
        assert!(visible.contains(Position::new(12, 10)));
        assert!(!visible.contains(Position::new(13, 10)));
        assert!(visible.contains(Position::new(3, 10)));
    }

    #[test]
    fn unlimited_radius_reaches_the_map_edge() {
        let map = open_map();
        let visible = RayCastVisibility.compute_visible(&map, Position::new(10, 10), 0);
        assert!(visible.contains(Position::new(1, 1)));
        assert!(visible.contains(Position::new(0, 10)));
    }
}
