//! `rogue` binary: plays a game with the autopilot and saves it.
//!
//! Configuration comes from the environment (a `.env` file is honoured):
//!
//! ```bash
//! ROGUE_SEED=42 ROGUE_MAX_TURNS=500 RUST_LOG=rogue=debug cargo run -p rogue-client
//! ```
//!
//! An existing save in the configured slot is resumed instead of starting
//! over.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use rogue_client::{Client, logging};
use rogue_runtime::{FileSaveRepository, RuntimeConfig, SaveRepository, Session};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = RuntimeConfig::from_env();
    let seed = config.seed.unwrap_or_else(clock_seed);
    let _guard = logging::setup_logging(&format!("session_{seed}"))?;

    let game_config = config.game_config()?;
    let tables = config.spawn_tables()?;

    let repository = FileSaveRepository::new(&config.save_dir).with_context(|| {
        format!("Failed to open save directory {}", config.save_dir.display())
    })?;
    let session = if repository.exists(&config.slot) {
        tracing::info!("Resuming slot {}", config.slot);
        Session::load(&repository, &config.slot, game_config, tables)?
    } else {
        tracing::info!("Starting a new game with seed {}", seed);
        Session::new(game_config, tables, seed)
    };

    let summary = Client::builder()
        .session(session)
        .repository(repository)
        .slot(config.slot.clone())
        .max_turns(config.max_turns)
        .build()?
        .run()?;

    for line in &summary.messages {
        println!("{line}");
    }
    println!();
    println!(
        "{} after {} turns: dungeon level {}, character level {}.",
        if summary.died { "Died" } else { "Saved" },
        summary.turns,
        summary.dungeon_level,
        summary.player_level
    );
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
