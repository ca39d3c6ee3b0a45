//! File logging for headless runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a subscriber writing to `<log dir>/<session>/client.log`.
///
/// The filter comes from `RUST_LOG`, with `info` as the floor. Keep the
/// returned guard alive until exit or buffered lines are lost.
pub fn setup_logging(session_id: &str) -> Result<WorkerGuard> {
    let session_log_dir = log_dir().join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file(&session_log_dir).display());

    Ok(guard)
}

/// Platform cache directory for logs.
///
/// - Linux: `~/.cache/rogue/logs` (or `$XDG_CACHE_HOME/rogue/logs`)
/// - macOS: `~/Library/Caches/rogue/logs`
/// - Windows: `%LOCALAPPDATA%\rogue\logs`
/// - Fallback: `/tmp/rogue/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "rogue")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/rogue"))
        .join("logs")
}

fn log_file(session_log_dir: &Path) -> PathBuf {
    session_log_dir.join("client.log")
}
