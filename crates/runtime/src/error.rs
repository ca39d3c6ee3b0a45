//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine, repositories and content loading so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use rogue_core::{EngineError, ErrorSeverity, GameError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("turn failed")]
    Engine(#[from] EngineError),

    #[error("failed to load content: {0}")]
    Content(String),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Repository(err) if err.is_corruption() => ErrorSeverity::Fatal,
            Self::Repository(_) | Self::Content(_) => ErrorSeverity::Recoverable,
            Self::Engine(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(_) => "REPOSITORY",
            Self::Engine(err) => err.error_code(),
            Self::Content(_) => "CONTENT",
        }
    }
}
