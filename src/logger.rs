//! File logging through the `log` facade.
//!
//! The terminal belongs to the UI, so records go to a log file dispatched by
//! `fern`. With logging disabled nothing is installed and the `log` macros
//! compile down to no-ops.

use crate::config::LoggingConfig;
use crate::constants::LOG_LEVEL_ENV;
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

/// Install the global logger described by `config`.
///
/// Returns `true` when a logger was installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let level = effective_level(config)?;
    let path = config.resolve_log_path()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    dispatch(level).chain(file).apply().context("Failed to install logger")?;

    log::info!("Logging to {} at level {}", path.display(), level);
    Ok(true)
}

/// Level from `TASKLIST_LOG` if set, else from the config file
pub fn effective_level(config: &LoggingConfig) -> Result<LevelFilter> {
    match std::env::var(LOG_LEVEL_ENV) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid {} value '{}'", LOG_LEVEL_ENV, value)),
        _ => config.level_filter(),
    }
}

/// Base dispatcher: timestamped lines, database chatter kept to warnings.
pub fn dispatch(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn)
}
