//! Failures of the save slot store.

use thiserror::Error;

/// Errors surfaced by [`SaveRepository`](super::SaveRepository) implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A thread panicked while holding the in-memory store.
    #[error("save store lock was poisoned")]
    LockPoisoned,

    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The game could not be turned into bytes, or the bytes back into a game.
    #[error("save payload encoding failed: {0}")]
    Encoding(String),

    #[error("save file is {len} bytes, shorter than its {header} byte header")]
    Truncated { len: usize, header: usize },

    #[error("not a save file")]
    BadMagic,

    #[error("save format version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u8, expected: u8 },

    #[error("save payload does not match its checksum")]
    ChecksumMismatch,

    #[error("no saved game in slot `{0}`")]
    EmptySlot(String),
}

impl RepositoryError {
    /// Whether the stored bytes exist but cannot be trusted.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::Truncated { .. }
                | Self::BadMagic
                | Self::UnsupportedVersion { .. }
                | Self::ChecksumMismatch
        )
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
