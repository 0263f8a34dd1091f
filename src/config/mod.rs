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

//! Application configuration.
//!
//! This module manages the application configuration file. Missing fields
//! fall back to their defaults so that older files keep loading.

use serde::{Deserialize, Serialize};
use tracing::warn;

const CONFIG_NAME: &str = "calcui";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub dark_mode: bool,
    /// How long notices stay on screen, in milliseconds.
    pub notice_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            dark_mode: false,
            notice_ms: 2000,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!(error = %e, "failed to load configuration, using defaults");
        AppConfig::default()
    })
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}
