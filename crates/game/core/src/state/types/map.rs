//! Tile grid owned by the current dungeon level.

use super::Position;

/// A single map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub blocked: bool,
    pub blocks_sight: bool,
    /// Set once the tile has been inside the player's field of view.
    pub explored: bool,
}

impl Tile {
    pub const fn wall() -> Self {
        Self {
            blocked: true,
            blocks_sight: true,
            explored: false,
        }
    }

    pub const fn floor() -> Self {
        Self {
            blocked: false,
            blocks_sight: false,
            explored: false,
        }
    }
}

/// Fixed-size grid of tiles, stored row-major.
///
/// A map is produced whole by the generator and replaced on every level
/// transition; only carving and the explored flag ever touch single tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Map {
    /// Creates a map where every tile is solid rock.
    pub fn filled(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            tiles: vec![Tile::wall(); len],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| (position.y * self.width + position.x) as usize)
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.index(position).map(move |i| &mut self.tiles[i])
    }

    /// Terrain-only blocking check. Tiles outside the map count as blocked.
    pub fn is_blocked(&self, position: Position) -> bool {
        self.tile(position).is_none_or(|tile| tile.blocked)
    }

    pub fn blocks_sight(&self, position: Position) -> bool {
        self.tile(position).is_none_or(|tile| tile.blocks_sight)
    }

    /// Opens a single tile for movement and sight.
    pub fn carve(&mut self, position: Position) {
        if let Some(tile) = self.tile_mut(position) {
            tile.blocked = false;
            tile.blocks_sight = false;
        }
    }

    /// Carves the interior of a room, leaving its outline as wall.
    pub fn carve_room(&mut self, room: &Rect) {
        for x in (room.x1 + 1)..room.x2 {
            for y in (room.y1 + 1)..room.y2 {
                self.carve(Position::new(x, y));
            }
        }
    }

    /// Carves a horizontal corridor between `x1` and `x2` (inclusive) on row `y`.
    pub fn carve_h_tunnel(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.carve(Position::new(x, y));
        }
    }

    /// Carves a vertical corridor between `y1` and `y2` (inclusive) on column `x`.
    pub fn carve_v_tunnel(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.carve(Position::new(x, y));
        }
    }

    pub fn mark_explored(&mut self, position: Position) {
        if let Some(tile) = self.tile_mut(position) {
            tile.explored = true;
        }
    }

    /// Iterates over every position together with its tile.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            let i = i as i32;
            (Position::new(i % width, i / width), tile)
        })
    }
}

/// Axis-aligned rectangle describing a room candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + w,
            y2: y + h,
        }
    }

    pub const fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Edge-inclusive overlap test: rooms sharing a wall also intersect.
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Whether `position` lies in the carved interior of this room.
    pub const fn interior_contains(&self, position: Position) -> bool {
        position.x > self.x1 && position.x < self.x2 && position.y > self.y1 && position.y < self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carve_room_leaves_outline_solid() {
        let mut map = Map::filled(20, 20);
        let room = Rect::new(2, 2, 6, 6);
        map.carve_room(&room);

        assert!(!map.is_blocked(Position::new(3, 3)));
        assert!(!map.is_blocked(Position::new(7, 7)));
        assert!(map.is_blocked(Position::new(2, 3)));
        assert!(map.is_blocked(Position::new(8, 5)));
    }

    #[test]
    fn out_of_bounds_is_blocked() {
        let map = Map::filled(5, 5);
        assert!(map.is_blocked(Position::new(-1, 0)));
        assert!(map.is_blocked(Position::new(5, 0)));
        assert!(map.tile(Position::new(0, 5)).is_none());
    }

    #[test]
    fn touching_rooms_intersect() {
        let a = Rect::new(0, 0, 6, 6);
        let b = Rect::new(6, 0, 6, 6);
        let c = Rect::new(7, 0, 6, 6);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn tunnels_are_inclusive_in_either_order() {
        let mut map = Map::filled(10, 10);
        map.carve_h_tunnel(7, 2, 4);
        for x in 2..=7 {
            assert!(!map.is_blocked(Position::new(x, 4)));
        }
        assert!(map.is_blocked(Position::new(1, 4)));
        assert!(map.is_blocked(Position::new(8, 4)));
    }
}
