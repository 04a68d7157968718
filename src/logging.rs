// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! File logging.
//!
//! The terminal belongs to the TUI, so log records only ever go to a file in
//! the platform data directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

use crate::config::{CONFIG_NAME, LoggingConfig};

/// Directory holding the log file.
pub(crate) fn log_directory() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_NAME)
        .join("logs")
}

/// Starts the file logger, if enabled.
///
/// The returned handle must be kept alive for as long as records should be
/// written.
///
/// # Errors
///
/// Returns an error if the log level is invalid or the log file cannot be
/// created.
pub(crate) fn init_logger(config: &LoggingConfig) -> Result<Option<LoggerHandle>> {
    if !config.enabled {
        return Ok(None);
    }

    let directory = log_directory();
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let handle = Logger::try_with_str(config.level.to_lowercase())
        .context("Invalid log level")?
        .log_to_file(
            FileSpec::default()
                .directory(&directory)
                .basename(CONFIG_NAME)
                .suppress_timestamp(),
        )
        .format_for_files(flexi_logger::detailed_format)
        .append()
        .start()
        .context("Failed to start logger")?;

    log::info!("{} {} starting", CONFIG_NAME, env!("CARGO_PKG_VERSION"));

    Ok(Some(handle))
}
