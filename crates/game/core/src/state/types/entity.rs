//! The universal game object and its fighter capability.

use super::{Ai, Color, EntityId, Equipment, Item, Position};

/// Which death routine runs when a fighter drops to zero hit points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeathKind {
    /// Ends the game and turns the player into a corpse.
    Player,
    /// Turns the monster into non-blocking remains and pays out experience.
    Monster,
}

/// Combat capability.
///
/// The `base_*` fields are the entity's own stats; equipped items are added
/// on top by the stat aggregator in [`crate::stats`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub base_max_hp: i32,
    pub hp: i32,
    pub base_defense: i32,
    pub base_power: i32,
    pub base_critical: i32,
    pub base_hit_chance: i32,
    /// Experience held. Monsters award this on death; the player accrues it.
    pub xp: i32,
    pub death: DeathKind,
}

impl Fighter {
    pub fn new(hp: i32, defense: i32, power: i32, xp: i32, death: DeathKind) -> Self {
        Self {
            base_max_hp: hp,
            hp,
            base_defense: defense,
            base_power: power,
            base_critical: 0,
            base_hit_chance: 100,
            xp,
            death,
        }
    }

    pub fn with_critical(mut self, critical: i32) -> Self {
        self.base_critical = critical;
        self
    }

    pub fn with_hit_chance(mut self, hit_chance: i32) -> Self {
        self.base_hit_chance = hit_chance;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Role implied by an entity's capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Player,
    Monster,
    Corpse,
    Item,
    /// Anything else, e.g. the stairs.
    Scenery,
}

/// Any drawable, interactive game object.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub position: Position,
    pub glyph: char,
    pub name: String,
    pub color: Color,
    /// Occupies its tile for movement.
    pub blocks: bool,
    /// Remains drawn on explored tiles outside the field of view.
    pub always_visible: bool,
    pub fighter: Option<Fighter>,
    pub ai: Option<Ai>,
    pub item: Option<Item>,
}

impl Entity {
    pub fn new(
        id: EntityId,
        position: Position,
        glyph: char,
        name: impl Into<String>,
        color: Color,
    ) -> Self {
        Self {
            id,
            position,
            glyph,
            name: name.into(),
            color,
            blocks: false,
            always_visible: false,
            fighter: None,
            ai: None,
            item: None,
        }
    }

    pub fn blocking(mut self) -> Self {
        self.blocks = true;
        self
    }

    pub fn always_visible(mut self) -> Self {
        self.always_visible = true;
        self
    }

    pub fn with_fighter(mut self, fighter: Fighter) -> Self {
        self.fighter = Some(fighter);
        self
    }

    pub fn with_ai(mut self, ai: Ai) -> Self {
        self.ai = Some(ai);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    pub fn is_player(&self) -> bool {
        self.id.is_player()
    }

    pub fn equipment(&self) -> Option<&Equipment> {
        self.item.as_ref().and_then(|item| item.equipment.as_ref())
    }

    pub fn equipment_mut(&mut self) -> Option<&mut Equipment> {
        self.item.as_mut().and_then(|item| item.equipment.as_mut())
    }

    /// A monster that still has both fighter and AI capabilities.
    pub fn is_live_monster(&self) -> bool {
        !self.is_player() && self.fighter.is_some() && self.ai.is_some()
    }

    pub fn role(&self) -> Role {
        match (&self.fighter, &self.ai, &self.item) {
            _ if self.is_player() => Role::Player,
            (Some(_), _, _) => Role::Monster,
            (None, None, Some(_)) => Role::Item,
            // Death strips the glyph of its capabilities but leaves the corpse
            // glyph behind.
            (None, None, None) if self.glyph == CORPSE_GLYPH => Role::Corpse,
            _ => Role::Scenery,
        }
    }

    /// Cosmetic death transform shared by the player and monsters.
    pub fn become_corpse(&mut self) {
        self.glyph = CORPSE_GLYPH;
        self.color = Color::DarkRed;
    }
}

/// Glyph drawn for anything that died.
pub const CORPSE_GLYPH: char = '%';

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AiMode, UseEffect};

    fn orc() -> Entity {
        Entity::new(EntityId(3), Position::new(1, 1), 'o', "orc", Color::DesaturatedGreen)
            .blocking()
            .with_fighter(Fighter::new(20, 0, 4, 36, DeathKind::Monster))
            .with_ai(Ai::new(AiMode::Dormant))
    }

    #[test]
    fn roles_follow_capabilities() {
        let mut monster = orc();
        assert_eq!(monster.role(), Role::Monster);
        assert!(monster.is_live_monster());

        monster.fighter = None;
        monster.ai = None;
        monster.become_corpse();
        assert_eq!(monster.role(), Role::Corpse);

        let potion = Entity::new(EntityId(4), Position::ORIGIN, '!', "healing potion", Color::Violet)
            .with_item(Item::consumable(UseEffect::Heal));
        assert_eq!(potion.role(), Role::Item);
    }
}
