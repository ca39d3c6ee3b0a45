//! Player commands and their turn accounting.

use crate::progression::CharacterSheet;
use crate::state::Direction;

/// Everything the player can ask for in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Step in a direction, attacking whatever fighter stands there.
    Move(Direction),
    Wait,
    PickUp,
    /// Use the inventory item at this index.
    Use(usize),
    /// Drop the inventory item at this index.
    Drop(usize),
    Descend,
    ShowCharacter,
    Quit,
}

/// How the player's command affected the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Monsters and timers get to act.
    TookTurn,
    /// Nothing happened that costs time.
    DidntTakeTurn,
    /// The player asked to leave; the caller is expected to save.
    Exit,
}

impl PlayerAction {
    pub fn from_took_turn(took_turn: bool) -> Self {
        if took_turn {
            Self::TookTurn
        } else {
            Self::DidntTakeTurn
        }
    }
}

/// Result of one call to [`super::GameEngine::play_turn`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub action: PlayerAction,
    /// Number of timers that expired this turn.
    pub timers_fired: usize,
    pub levels_gained: u32,
    /// Filled in for [`Command::ShowCharacter`].
    pub character: Option<CharacterSheet>,
}

impl TurnReport {
    pub(crate) fn new(action: PlayerAction) -> Self {
        Self {
            action,
            timers_fired: 0,
            levels_gained: 0,
            character: None,
        }
    }
}
