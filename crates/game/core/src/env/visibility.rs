//! Field-of-view boundary.
//!
//! The core never computes line of sight itself. A [`VisibilityOracle`]
//! supplied by the host returns the set of tiles the player can see; the core
//! stores it on the world, marks those tiles explored and lets monster AI
//! query membership.

use std::collections::BTreeSet;

use crate::state::{Map, Position};

/// Tiles currently inside the player's field of view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSet {
    tiles: BTreeSet<Position>,
}

impl VisibleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, position: Position) -> bool {
        self.tiles.insert(position)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.tiles.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles.iter().copied()
    }
}

impl FromIterator<Position> for VisibleSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

/// Line-of-sight service consumed by the engine.
pub trait VisibilityOracle {
    /// Tiles visible from `origin` within `radius` (0 means unlimited).
    fn compute_visible(&self, map: &Map, origin: Position, radius: u32) -> VisibleSet;
}

impl<V: VisibilityOracle + ?Sized> VisibilityOracle for &V {
    fn compute_visible(&self, map: &Map, origin: Position, radius: u32) -> VisibleSet {
        (**self).compute_visible(map, origin, radius)
    }
}
