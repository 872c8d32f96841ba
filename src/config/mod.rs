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

use crate::model::photos::MAX_PHOTOS;

const CONFIG_NAME: &str = "gallui";

pub(crate) const DEFAULT_ALBUMS_URL: &str = "https://jsonplaceholder.typicode.com/albums";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) photo_count: usize,
    pub(crate) image_dir: String,
    pub(crate) albums_url: String,
    pub(crate) log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            photo_count: MAX_PHOTOS,
            image_dir: "images".to_string(),
            albums_url: DEFAULT_ALBUMS_URL.to_string(),
            log_file: "gallui.log".to_string(),
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_the_whole_local_set() {
        let config = AppConfig::default();
        assert_eq!(config.photo_count, 10);
        assert_eq!(config.albums_url, DEFAULT_ALBUMS_URL);
    }
}
