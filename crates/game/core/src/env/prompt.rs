//! Decisions the engine needs from the player in the middle of a turn.

use crate::state::{Position, World};

/// Stat raised when the player gains a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelUpChoice {
    /// +20 max hit points.
    #[strum(serialize = "Constitution (+20 HP)")]
    Constitution,
    /// +1 power.
    #[strum(serialize = "Strength (+1 attack)")]
    Strength,
    /// +1 defense.
    #[strum(serialize = "Toughness (+1 defense)")]
    Toughness,
    /// +1 critical.
    #[strum(serialize = "Agility (+1 critical)")]
    Agility,
}

/// Interactive input consumed while a turn is being resolved.
///
/// Targeting spells ask for a tile; the player may abort, which cancels the
/// spell without spending the item or the turn.
pub trait PlayerPrompt {
    /// Asks for a target tile. `None` means the player aborted.
    ///
    /// The engine re-validates the answer (in view, within `max_range`), so
    /// implementations may return any tile.
    fn select_tile(&mut self, world: &World, max_range: Option<f64>) -> Option<Position>;

    /// Asks which stat to raise on level-up. A choice is mandatory.
    fn choose_level_up(&mut self, world: &World, options: &[LevelUpChoice]) -> LevelUpChoice;
}
