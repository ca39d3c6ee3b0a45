//! Headless player that drives a session without a human at the keyboard.
//!
//! [`Autopilot`] picks the next command from the visible state of the world;
//! [`AutopilotPrompt`] answers the targeting and level-up questions the
//! engine asks while a command resolves.

mod path;
mod policy;
mod prompt;

#[cfg(test)]
mod testing;

pub use policy::Autopilot;
pub use prompt::AutopilotPrompt;
