//! Common error infrastructure for rogue-core.
//!
//! Only programming-contract failures are surfaced as `Err`. Conditions the
//! player can cause (full inventory, nothing to strike, an aborted target
//! selection) are reported through the message log and never become errors.

use crate::state::{EntityId, Position};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can report it and carry on.
    ///
    /// Examples: missing save data
    Recoverable,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: an entity referenced by a command is gone
    Internal,

    /// Fatal error - game state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A broken sequencing contract between the caller and the core.
///
/// These never happen when commands are built from the current world state.
/// The offending operation is aborted before it mutates anything.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("cannot build a menu with {count} options (max {max})")]
    MenuOverflow { count: usize, max: usize },

    #[error("entity {0} is not present in the level")]
    MissingEntity(EntityId),

    #[error("entity {entity} has no {capability} capability")]
    MissingCapability {
        entity: EntityId,
        capability: &'static str,
    },

    #[error("inventory slot {index} is empty (inventory holds {len} items)")]
    NoSuchInventorySlot { index: usize, len: usize },

    #[error("position {0:?} lies outside the map")]
    OutOfBounds(Position),
}

impl GameError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MenuOverflow { .. } => "MENU_OVERFLOW",
            Self::MissingEntity(_) => "MISSING_ENTITY",
            Self::MissingCapability { .. } => "MISSING_CAPABILITY",
            Self::NoSuchInventorySlot { .. } => "NO_SUCH_INVENTORY_SLOT",
            Self::OutOfBounds(_) => "OUT_OF_BOUNDS",
        }
    }
}
