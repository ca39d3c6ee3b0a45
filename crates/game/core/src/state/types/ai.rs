use super::Position;

/// Behaviour state of a monster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiMode {
    /// No known target; wanders at random.
    Dormant,
    /// Standing inside the player's field of view; hunts the player.
    Engaged,
    /// Heading for the remembered location after losing the player.
    Alerted,
    /// Stumbles around until `turns_left` runs out, then resumes `restore`.
    Confused {
        restore: Box<AiMode>,
        turns_left: u32,
    },
}

impl AiMode {
    pub fn is_confused(&self) -> bool {
        matches!(self, AiMode::Confused { .. })
    }

    /// Name used in trace output.
    pub fn label(&self) -> &'static str {
        match self {
            AiMode::Dormant => "dormant",
            AiMode::Engaged => "engaged",
            AiMode::Alerted => "alerted",
            AiMode::Confused { .. } => "confused",
        }
    }
}

/// AI capability: the current mode plus the last location the monster
/// believes the player to be at.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ai {
    pub mode: AiMode,
    pub remembered: Option<Position>,
}

impl Ai {
    pub fn new(mode: AiMode) -> Self {
        Self {
            mode,
            remembered: None,
        }
    }

    /// Puts the monster into confusion, keeping the mode to return to.
    ///
    /// Confusing an already confused monster only resets the counter.
    pub fn confuse(&mut self, turns: u32) {
        let restore = match std::mem::replace(&mut self.mode, AiMode::Dormant) {
            AiMode::Confused { restore, .. } => restore,
            other => Box::new(other),
        };
        self.mode = AiMode::Confused {
            restore,
            turns_left: turns,
        };
    }
}

impl Default for Ai {
    fn default() -> Self {
        Self::new(AiMode::Dormant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconfusing_keeps_the_original_mode() {
        let mut ai = Ai::new(AiMode::Engaged);
        ai.confuse(10);
        ai.confuse(4);
        assert_eq!(
            ai.mode,
            AiMode::Confused {
                restore: Box::new(AiMode::Engaged),
                turns_left: 4
            }
        );
    }
}
