/// Game configuration constants and tunable parameters.
///
/// Every field defaults to the classic balance of the game; loaders may
/// override any subset of them (missing fields fall back to the defaults).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub map: MapConfig,
    pub player: PlayerConfig,
    pub combat: CombatConfig,
    pub spells: SpellConfig,
    pub hunger: HungerConfig,
    pub alert: AlertConfig,
    /// Radius passed to the visibility service for the player's torch.
    pub torch_radius: u32,
    /// Number of messages retained by the message log.
    pub message_capacity: usize,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of items an inventory can hold (one per menu letter).
    pub const MAX_INVENTORY_SLOTS: usize = 26;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TORCH_RADIUS: u32 = 10;
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self {
            map: MapConfig::default(),
            player: PlayerConfig::default(),
            combat: CombatConfig::default(),
            spells: SpellConfig::default(),
            hunger: HungerConfig::default(),
            alert: AlertConfig::default(),
            torch_radius: Self::DEFAULT_TORCH_RADIUS,
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
        }
    }

    /// Experience required to advance from `level` to `level + 1`.
    pub fn level_up_threshold(&self, level: u32) -> i32 {
        self.player.level_up_base + level as i32 * self.player.level_up_factor
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Map dimensions and room placement parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    pub width: i32,
    pub height: i32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub max_rooms: u32,
    /// Global overlap budget; placement stops once this many overlaps occurred.
    pub max_room_intersects: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            room_min_size: 6,
            room_max_size: 10,
            max_rooms: 30,
            max_room_intersects: 4,
        }
    }
}

/// Base stats of a fresh player and the level-up curve.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
    pub critical: i32,
    pub hit_chance: i32,
    pub level_up_base: i32,
    pub level_up_factor: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            hp: 100,
            defense: 0,
            power: 2,
            critical: 0,
            hit_chance: 85,
            level_up_base: 200,
            level_up_factor: 150,
        }
    }
}

/// Combat formula and sound propagation parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Base probability that a rolled power modifier counts as a critical hit.
    pub crit_chance: f64,
    /// Percent chance that a melee attack makes enough noise to be heard.
    pub sound_chance: i32,
    /// Intensity of combat noise; the heard radius is rolled from it.
    pub sound_intensity: i32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            crit_chance: 0.1,
            sound_chance: 30,
            sound_intensity: 4,
        }
    }
}

/// Parameters of the consumable spells and potions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellConfig {
    pub heal_amount: i32,
    pub lightning_damage: i32,
    pub lightning_range: f64,
    pub confuse_turns: u32,
    pub confuse_range: f64,
    pub fireball_radius: f64,
    pub fireball_damage: i32,
}

impl Default for SpellConfig {
    fn default() -> Self {
        Self {
            heal_amount: 40,
            lightning_damage: 40,
            lightning_range: 5.0,
            confuse_turns: 10,
            confuse_range: 8.0,
            fireball_radius: 3.0,
            fireball_damage: 25,
        }
    }
}

/// Hunger clock driven by a repeating timer on the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HungerConfig {
    /// Turns between two hunger pangs.
    pub interval: u32,
    pub max_satiety: u32,
    /// Satiety at or below which the player is warned.
    pub hungry_threshold: u32,
    /// Damage dealt on every pang once satiety is exhausted.
    pub starvation_damage: i32,
    /// Satiety restored by one ration.
    pub ration_value: u32,
}

impl Default for HungerConfig {
    fn default() -> Self {
        Self {
            interval: 10,
            max_satiety: 100,
            hungry_threshold: 20,
            starvation_damage: 5,
            ration_value: 60,
        }
    }
}

/// Duration of the alert a monster keeps after hearing or losing the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertConfig {
    pub min_turns: u32,
    pub max_turns: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            min_turns: 5,
            max_turns: 15,
        }
    }
}
