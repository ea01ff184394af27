// Copyright 2026 The organizei Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::path::Path;

use log::debug;
use organizei_core::error::Fallible;
use organizei_core::error::fail;
use serde::Deserialize;

/// Name of the optional configuration file in the collection directory.
pub const CONFIG_FILE: &str = "organizei.toml";

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File name of the SQLite database, relative to the collection directory.
    pub database: String,
    /// Maximum number of flashcards in a review session.
    pub session_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: "organizei.db".to_string(),
            session_limit: None,
        }
    }
}

impl Config {
    /// Load the configuration of a collection. A missing file means defaults.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        debug!("Reading configuration from {}", path.display());
        let text: String = read_to_string(&path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Fallible<Self> {
        let config: Config = toml::from_str(text)?;
        if config.database.trim().is_empty() {
            return fail("configuration: `database` must not be empty.");
        }
        if config.session_limit == Some(0) {
            return fail("configuration: `session_limit` must be at least 1.");
        }
        Ok(config)
    }
}
