//! Item, equipment and inventory capabilities.

use arrayvec::ArrayVec;

use super::{Entity, EntityId};
use crate::config::GameConfig;

/// Named effect run when an item is used from the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseEffect {
    /// Restores hit points; cancelled at full health.
    Heal,
    /// Strikes the closest visible monster.
    Lightning,
    /// Confuses a monster picked by the player.
    Confuse,
    /// Burns every fighter around a tile picked by the player.
    Fireball,
    /// Restores satiety; cancelled when not hungry.
    Eat,
}

/// Body slot an equipment piece occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    #[strum(serialize = "right hand")]
    RightHand,
    #[strum(serialize = "left hand")]
    LeftHand,
    #[strum(serialize = "body")]
    Body,
}

/// Flat stat bonuses granted while equipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBonuses {
    pub power: i32,
    pub defense: i32,
    pub max_hp: i32,
    pub critical: i32,
    pub hit_chance: i32,
}

impl StatBonuses {
    pub const NONE: Self = Self {
        power: 0,
        defense: 0,
        max_hp: 0,
        critical: 0,
        hit_chance: 0,
    };

    pub fn power(mut self, value: i32) -> Self {
        self.power = value;
        self
    }

    pub fn defense(mut self, value: i32) -> Self {
        self.defense = value;
        self
    }

    pub fn max_hp(mut self, value: i32) -> Self {
        self.max_hp = value;
        self
    }

    pub fn critical(mut self, value: i32) -> Self {
        self.critical = value;
        self
    }

    pub fn hit_chance(mut self, value: i32) -> Self {
        self.hit_chance = value;
        self
    }
}

impl std::ops::Add for StatBonuses {
    type Output = StatBonuses;

    fn add(self, rhs: StatBonuses) -> StatBonuses {
        StatBonuses {
            power: self.power + rhs.power,
            defense: self.defense + rhs.defense,
            max_hp: self.max_hp + rhs.max_hp,
            critical: self.critical + rhs.critical,
            hit_chance: self.hit_chance + rhs.hit_chance,
        }
    }
}

impl std::iter::Sum for StatBonuses {
    fn sum<I: Iterator<Item = StatBonuses>>(iter: I) -> Self {
        iter.fold(StatBonuses::NONE, |acc, b| acc + b)
    }
}

/// Equipment capability. Only ever found inside an [`Item`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub slot: Slot,
    pub bonuses: StatBonuses,
    pub is_equipped: bool,
}

impl Equipment {
    pub fn new(slot: Slot, bonuses: StatBonuses) -> Self {
        Self {
            slot,
            bonuses,
            is_equipped: false,
        }
    }
}

/// Item capability: something that can be picked up and used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub effect: Option<UseEffect>,
    /// Equipping is a specialization of using, so equipment lives here.
    pub equipment: Option<Equipment>,
}

impl Item {
    pub fn consumable(effect: UseEffect) -> Self {
        Self {
            effect: Some(effect),
            equipment: None,
        }
    }

    pub fn equipment(equipment: Equipment) -> Self {
        Self {
            effect: None,
            equipment: Some(equipment),
        }
    }
}

type ItemSlots = ArrayVec<Entity, { GameConfig::MAX_INVENTORY_SLOTS }>;

/// Ordered list of items held by one entity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ItemSlots,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Appends an item, handing it back when the inventory is full.
    pub fn push(&mut self, item: Entity) -> Result<(), Entity> {
        self.items.try_push(item).map_err(|err| err.element())
    }

    pub fn remove(&mut self, index: usize) -> Option<Entity> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.items.get_mut(index)
    }

    pub fn position_of(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.items.iter()
    }

    /// Equipment pieces currently worn.
    pub fn equipped(&self) -> impl Iterator<Item = &Equipment> {
        self.items
            .iter()
            .filter_map(|item| item.equipment())
            .filter(|eq| eq.is_equipped)
    }

    /// Index of the item currently equipped in `slot`, if any.
    pub fn equipped_in_slot(&self, slot: Slot) -> Option<usize> {
        self.items.iter().position(|item| {
            item.equipment()
                .is_some_and(|eq| eq.is_equipped && eq.slot == slot)
        })
    }

    /// Sum of bonuses over every equipped piece.
    pub fn bonuses(&self) -> StatBonuses {
        self.equipped().map(|eq| eq.bonuses).sum()
    }
}
