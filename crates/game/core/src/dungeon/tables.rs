//! Level-keyed spawn tables.
//!
//! A [`LevelTable`] is a list of `(value, from_level)` steps: the value in
//! effect at a dungeon level is the one of the last step whose level has been
//! reached, or 0 before the first step.

use crate::env::RngOracle;

/// Step function of the dungeon level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LevelTable {
    steps: Vec<(u32, u32)>,
}

impl LevelTable {
    /// Builds a table from `(value, from_level)` steps in ascending level order.
    pub fn new(steps: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// A value that applies from level 1 on.
    pub fn constant(value: u32) -> Self {
        Self::new([(value, 1)])
    }

    pub fn from_dungeon_level(&self, level: u32) -> u32 {
        self.steps
            .iter()
            .rev()
            .find(|(_, from)| level >= *from)
            .map_or(0, |(value, _)| *value)
    }
}

/// Monster kinds the generator can place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MonsterKind {
    Orc,
    Troll,
}

/// Item kinds the generator can place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    HealingPotion,
    Sword,
    Shield,
    LightningScroll,
    FireballScroll,
    ConfusionScroll,
    Ration,
}

/// Weight of one kind, as a function of the dungeon level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnChance<K> {
    pub kind: K,
    pub chance: LevelTable,
}

impl<K> SpawnChance<K> {
    pub fn new(kind: K, chance: LevelTable) -> Self {
        Self { kind, chance }
    }
}

/// Everything the generator needs to decide what goes into a room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnTables {
    pub max_monsters: LevelTable,
    pub max_items: LevelTable,
    pub monsters: Vec<SpawnChance<MonsterKind>>,
    pub items: Vec<SpawnChance<ItemKind>>,
}

impl SpawnTables {
    /// Picks a monster kind for `level`, or `None` if every weight is 0.
    pub fn pick_monster(
        &self,
        level: u32,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Option<MonsterKind> {
        pick(&self.monsters, level, rng)
    }

    pub fn pick_item(&self, level: u32, rng: &mut (impl RngOracle + ?Sized)) -> Option<ItemKind> {
        pick(&self.items, level, rng)
    }
}

impl Default for SpawnTables {
    fn default() -> Self {
        Self {
            max_monsters: LevelTable::new([(2, 1), (3, 4), (5, 6)]),
            max_items: LevelTable::new([(1, 1), (2, 4)]),
            monsters: vec![
                SpawnChance::new(MonsterKind::Orc, LevelTable::constant(80)),
                SpawnChance::new(MonsterKind::Troll, LevelTable::new([(15, 3), (30, 5), (60, 7)])),
            ],
            items: vec![
                SpawnChance::new(ItemKind::HealingPotion, LevelTable::constant(35)),
                SpawnChance::new(ItemKind::Sword, LevelTable::new([(5, 4)])),
                SpawnChance::new(ItemKind::Shield, LevelTable::new([(15, 8)])),
                SpawnChance::new(ItemKind::LightningScroll, LevelTable::new([(25, 4)])),
                SpawnChance::new(ItemKind::FireballScroll, LevelTable::new([(25, 6)])),
                SpawnChance::new(ItemKind::ConfusionScroll, LevelTable::new([(10, 2)])),
                SpawnChance::new(ItemKind::Ration, LevelTable::constant(10)),
            ],
        }
    }
}

fn pick<K: Copy>(
    chances: &[SpawnChance<K>],
    level: u32,
    rng: &mut (impl RngOracle + ?Sized),
) -> Option<K> {
    let weights: Vec<u32> = chances
        .iter()
        .map(|c| c.chance.from_dungeon_level(level))
        .collect();
    random_choice_index(&weights, rng).map(|i| chances[i].kind)
}

/// Weighted choice: rolls a die in `[1, Σ weights]` and returns the index
/// whose running sum first reaches it.
pub fn random_choice_index(weights: &[u32], rng: &mut (impl RngOracle + ?Sized)) -> Option<usize> {
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return None;
    }
    let dice = rng.range(1, total as i32) as u32;
    let mut running = 0;
    weights.iter().position(|w| {
        running += w;
        dice <= running
    })
}
