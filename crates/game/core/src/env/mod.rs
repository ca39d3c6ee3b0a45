//! Services the simulation consumes from its host.
//!
//! Randomness, line of sight and mid-turn player decisions are injected as
//! traits so the rules stay deterministic and free of I/O. The [`Env`]
//! aggregate bundles them for a single turn.
mod prompt;
mod rng;
mod visibility;

pub use prompt::{LevelUpChoice, PlayerPrompt};
pub use rng::{PcgRng, RngOracle};
pub use visibility::{VisibilityOracle, VisibleSet};

/// Borrowed services required to resolve one turn.
pub struct Env<'a> {
    pub rng: &'a mut dyn RngOracle,
    pub visibility: &'a dyn VisibilityOracle,
    pub prompt: &'a mut dyn PlayerPrompt,
}

impl<'a> Env<'a> {
    pub fn new(
        rng: &'a mut dyn RngOracle,
        visibility: &'a dyn VisibilityOracle,
        prompt: &'a mut dyn PlayerPrompt,
    ) -> Self {
        Self {
            rng,
            visibility,
            prompt,
        }
    }
}
