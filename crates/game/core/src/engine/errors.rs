//! Error types for the turn pipeline.

use crate::error::{ErrorSeverity, GameError, InvariantViolation};

/// Identifies which stage of a turn produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    PlayerAction,
    Timers,
    Monsters,
    Progression,
    LevelTransition,
}

/// Errors surfaced while resolving a turn.
///
/// Everything the player can trigger is reported through the message log;
/// an `EngineError` always means the caller and the world disagree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{phase} phase failed: {source}")]
    Phase {
        phase: TurnPhase,
        #[source]
        source: InvariantViolation,
    },
}

impl EngineError {
    pub fn in_phase(phase: TurnPhase) -> impl FnOnce(InvariantViolation) -> Self {
        move |source| Self::Phase { phase, source }
    }

    pub fn phase(&self) -> TurnPhase {
        match self {
            Self::Phase { phase, .. } => *phase,
        }
    }
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Phase { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Phase { source, .. } => source.error_code(),
        }
    }
}
