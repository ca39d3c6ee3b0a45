//! Authoritative game state representation.
//!
//! [`World`] owns the map, every entity on the level, the inventories, the
//! message log and the timers. Subsystems receive it by `&mut` and never keep
//! copies of anything inside it across calls.
pub mod types;

use std::collections::BTreeMap;

pub use types::{
    Ai, AiMode, CORPSE_GLYPH, Color, DeathKind, Direction, Entity, EntityId, Equipment, Fighter,
    Inventory, Item, Map, Message, MessageLog, Position, Rect, Role, Slot, StatBonuses, Tile,
    Timer, TimerEffect, TimerId, TimerRegistry, UseEffect, capitalize,
};

use crate::env::VisibleSet;
use crate::error::InvariantViolation;

/// Whether the player can still act.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Playing,
    Dead,
}

/// How full the player is. Lowered by the hunger timer, raised by food.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hunger {
    pub satiety: u32,
    pub max: u32,
}

impl Hunger {
    pub fn new(max: u32) -> Self {
        Self { satiety: max, max }
    }

    pub fn is_full(&self) -> bool {
        self.satiety >= self.max
    }

    pub fn is_starving(&self) -> bool {
        self.satiety == 0
    }
}

/// Canonical snapshot of one running game.
///
/// Entities are kept in a single ordered list with the player first. Lookups
/// by position are linear scans over that list, O(n) in the entity count of
/// the level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    /// Monotonic dungeon depth, starting at 1.
    pub dungeon_level: u32,
    /// Character level of the player, starting at 1.
    pub player_level: u32,
    pub map: Map,
    entities: Vec<Entity>,
    /// The stairs entity of the current level.
    pub stairs: EntityId,
    inventories: BTreeMap<EntityId, Inventory>,
    pub messages: MessageLog,
    pub status: GameStatus,
    pub timers: TimerRegistry,
    pub hunger: Hunger,
    next_entity_id: u32,

    /// Player's field of view. Not persisted; recomputed after load.
    #[cfg_attr(feature = "serde", serde(skip))]
    visible: VisibleSet,
    #[cfg_attr(feature = "serde", serde(skip, default = "dirty"))]
    fov_dirty: bool,
}

#[cfg(feature = "serde")]
fn dirty() -> bool {
    true
}

impl World {
    /// Creates a world holding only the player, on an empty placeholder map.
    ///
    /// The caller is expected to install a generated level right after.
    pub fn new(mut player: Entity, messages: MessageLog, hunger: Hunger) -> Self {
        player.id = EntityId::PLAYER;
        Self {
            dungeon_level: 1,
            player_level: 1,
            map: Map::filled(0, 0),
            entities: vec![player],
            stairs: EntityId::PLAYER,
            inventories: BTreeMap::new(),
            messages,
            status: GameStatus::Playing,
            timers: TimerRegistry::new(),
            hunger,
            next_entity_id: EntityId::PLAYER.0 + 1,
            visible: VisibleSet::new(),
            fov_dirty: true,
        }
    }

    /// Allocates a new unique EntityId.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    // ===== entity access =====

    pub fn player(&self) -> &Entity {
        &self.entities[0]
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.entities[0]
    }

    pub fn is_player_alive(&self) -> bool {
        self.status == GameStatus::Playing
            && self.player().fighter.as_ref().is_some_and(Fighter::is_alive)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Ids of every entity in list order.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|e| e.id).collect()
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Like [`World::entity`], but a missing entity is a contract failure.
    pub fn require(&self, id: EntityId) -> Result<&Entity, InvariantViolation> {
        self.entity(id).ok_or(InvariantViolation::MissingEntity(id))
    }

    pub fn require_mut(&mut self, id: EntityId) -> Result<&mut Entity, InvariantViolation> {
        self.entity_mut(id)
            .ok_or(InvariantViolation::MissingEntity(id))
    }

    pub fn fighter(&self, id: EntityId) -> Result<&Fighter, InvariantViolation> {
        self.require(id)?
            .fighter
            .as_ref()
            .ok_or(InvariantViolation::MissingCapability {
                entity: id,
                capability: "fighter",
            })
    }

    pub fn fighter_mut(&mut self, id: EntityId) -> Result<&mut Fighter, InvariantViolation> {
        self.require_mut(id)?
            .fighter
            .as_mut()
            .ok_or(InvariantViolation::MissingCapability {
                entity: id,
                capability: "fighter",
            })
    }

    /// Appends an entity to the level. Its id must come from
    /// [`World::allocate_entity_id`].
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// Removes an entity from the level. The player cannot be removed.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        if id.is_player() {
            return None;
        }
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    // ===== spatial queries (linear scans) =====

    /// Terrain or a blocking entity occupies `position`.
    pub fn is_blocked(&self, position: Position) -> bool {
        self.map.is_blocked(position)
            || self
                .entities
                .iter()
                .any(|e| e.blocks && e.position == position)
    }

    /// First entity with a fighter capability standing on `position`.
    pub fn fighter_at(&self, position: Position) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|e| e.fighter.is_some() && e.position == position)
            .map(|e| e.id)
    }

    /// Items lying on `position`, in list order.
    pub fn items_at(&self, position: Position) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.item.is_some() && e.position == position)
            .map(|e| e.id)
            .collect()
    }

    // ===== inventories =====

    pub fn inventory(&self, owner: EntityId) -> Option<&Inventory> {
        self.inventories.get(&owner)
    }

    pub fn inventory_mut(&mut self, owner: EntityId) -> Option<&mut Inventory> {
        self.inventories.get_mut(&owner)
    }

    /// Inventory of `owner`, created empty on first access.
    pub fn inventory_entry(&mut self, owner: EntityId) -> &mut Inventory {
        self.inventories.entry(owner).or_default()
    }

    /// Equipment bonuses of everything `owner` currently wears.
    pub fn equipment_bonuses(&self, owner: EntityId) -> StatBonuses {
        self.inventory(owner)
            .map(Inventory::bonuses)
            .unwrap_or_default()
    }

    // ===== messages =====

    pub fn message(&mut self, text: impl Into<String>, color: Color) {
        self.messages.push(text, color);
    }

    // ===== visibility =====

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.visible.contains(position)
    }

    /// Installs a freshly computed field of view and marks it explored.
    pub fn set_visible(&mut self, visible: VisibleSet) {
        for position in visible.iter() {
            self.map.mark_explored(position);
        }
        self.visible = visible;
        self.fov_dirty = false;
    }

    /// Field of view must be recomputed before monsters act.
    pub fn needs_fov(&self) -> bool {
        self.fov_dirty
    }

    pub fn invalidate_fov(&mut self) {
        self.fov_dirty = true;
    }

    // ===== level transitions =====

    /// Replaces the level wholesale, keeping the player and its inventory.
    ///
    /// Entities of the old level are dropped along with their inventories and
    /// timers, and the field of view is invalidated.
    pub fn install_level(&mut self, map: Map, spawn: Position, stairs: EntityId, rest: Vec<Entity>) {
        self.entities.truncate(1);
        self.player_mut().position = spawn;
        self.entities.extend(rest);
        self.map = map;
        self.stairs = stairs;
        self.inventories.retain(|owner, _| owner.is_player());
        self.timers.retain_entities(|entity| entity.is_player());
        self.visible = VisibleSet::new();
        self.fov_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        let player = Entity::new(EntityId::PLAYER, Position::new(1, 1), '@', "player", Color::White)
            .blocking()
            .with_fighter(Fighter::new(100, 0, 2, 0, DeathKind::Player));
        let mut world = World::new(player, MessageLog::new(8), Hunger::new(100));
        let mut map = Map::filled(10, 10);
        map.carve_room(&Rect::new(0, 0, 8, 8));
        world.install_level(map, Position::new(2, 2), EntityId::PLAYER, Vec::new());
        world
    }

    #[test]
    fn ids_are_never_reused() {
        let mut world = world();
        let a = world.allocate_entity_id();
        let b = world.allocate_entity_id();
        assert_ne!(a, b);
        assert!(!a.is_player());
    }

    #[test]
    fn blocking_entities_block_tiles() {
        let mut world = world();
        let spot = Position::new(3, 3);
        assert!(!world.is_blocked(spot));

        let id = world.allocate_entity_id();
        world.spawn(Entity::new(id, spot, 'o', "orc", Color::Green).blocking());
        assert!(world.is_blocked(spot));

        world.despawn(id);
        assert!(!world.is_blocked(spot));
    }

    #[test]
    fn player_cannot_be_despawned() {
        let mut world = world();
        assert!(world.despawn(EntityId::PLAYER).is_none());
        assert_eq!(world.player().name, "player");
    }

    #[test]
    fn missing_entities_are_invariant_violations() {
        let world = world();
        assert_eq!(
            world.require(EntityId(99)).err(),
            Some(InvariantViolation::MissingEntity(EntityId(99)))
        );
    }

    #[test]
    fn visibility_marks_tiles_explored() {
        let mut world = world();
        assert!(world.needs_fov());
        world.set_visible([Position::new(2, 2), Position::new(3, 2)].into_iter().collect());
        assert!(!world.needs_fov());
        assert!(world.map.tile(Position::new(3, 2)).is_some_and(|t| t.explored));
        assert!(world.is_visible(Position::new(2, 2)));
    }
}
