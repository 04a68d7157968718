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
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "songdeck";

const DEFAULT_CATALOG: &str = "songs.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub version: u32,
    /// Path or `http(s)` URL of the catalog document.
    pub catalog: String,
    pub logging: LoggingConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog: DEFAULT_CATALOG.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_songs_json() {
        let config = AppConfig::default();

        assert_eq!(config.catalog, "songs.json");
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn config_file_round_trips_through_confy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songdeck.toml");
        let config = AppConfig {
            version: 1,
            catalog: "https://example.com/songs.json".into(),
            logging: LoggingConfig {
                enabled: false,
                level: "debug".into(),
            },
        };

        confy::store_path(&path, &config).unwrap();
        let loaded: AppConfig = confy::load_path(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let loaded: AppConfig = confy::load_path(dir.path().join("songdeck.toml")).unwrap();

        assert_eq!(loaded, AppConfig::default());
    }
}
