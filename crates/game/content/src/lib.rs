//! Data-driven content and its loaders.
//!
//! Balance lives in two files that override the built-in defaults:
//! - game configuration (`config.toml`, TOML)
//! - spawn tables (`tables.ron`, RON)
//!
//! Content is consumed when a session starts and never appears in saved
//! game state. All loaders deserialize rogue-core types directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, TablesLoader};
