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

//! Diagnostic logging.
//!
//! The terminal belongs to the TUI while it runs, so log records are written
//! to a daily rolling file in the user's local data directory instead of
//! stdout. The filter defaults to `info` and can be overridden with
//! `RUST_LOG`.

use std::{fs, path::PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "calcui.log";

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("calcui").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Installs the global tracing subscriber.
///
/// The returned guard flushes buffered records when dropped, so it must be
/// held until the application exits. Returns `None` if the log directory
/// cannot be created, in which case the application runs without logging.
pub(crate) fn init() -> Option<WorkerGuard> {
    let log_dir = log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {}: {}", log_dir.display(), e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init();
    if installed.is_err() {
        return None;
    }

    tracing::info!(dir = %log_dir.display(), "logging initialised");

    Some(guard)
}
