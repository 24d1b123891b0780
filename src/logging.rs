//! File logging setup.
//!
//! The terminal belongs to the game, so logs only ever go to a file. Without a
//! log directory nothing is initialised and every `log` macro is a no-op.
//! The level comes from `RUST_LOG`, defaulting to `info`.

use anyhow::{Context, Result};
use flexi_logger::{detailed_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use crate::config::GameConfig;

/// Start file logging if the configuration names a directory.
///
/// The returned handle must be kept alive for the duration of the program.
pub fn init(config: &GameConfig) -> Result<Option<LoggerHandle>> {
    let Some(dir) = config.log_path.as_deref() else {
        return Ok(None);
    };

    let handle = Logger::try_with_env_or_str("info")
        .context("invalid RUST_LOG specification")?
        .log_to_file(FileSpec::default().directory(dir).basename("tui-2048"))
        .format(detailed_format)
        .rotate(
            Criterion::Size(4 * 1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
        .with_context(|| format!("failed to start logging into {dir}"))?;

    for warning in &config.warnings {
        log::warn!("{warning}");
    }

    Ok(Some(handle))
}
