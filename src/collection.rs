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

use std::env::current_dir;
use std::path::PathBuf;

use organizei_core::error::Fallible;
use organizei_core::error::fail;

use crate::config::Config;
use crate::db::Database;

/// A directory holding a flashcard database and its configuration.
pub struct Collection {
    pub config: Config,
    pub db: Database,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        if !directory.exists() {
            return fail("directory does not exist.");
        }
        let directory = directory.canonicalize()?;
        let config: Config = Config::load(&directory)?;
        let db: Database = Database::new(&directory.join(&config.database))?;
        Ok(Self { config, db })
    }
}
