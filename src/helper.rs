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

use organizei_core::Flashcard;
use organizei_core::Timestamp;
use organizei_core::error::Fallible;
use tempfile::TempDir;
use tempfile::tempdir;

use crate::collection::Collection;
use crate::db::FlashcardId;

/// Create an empty collection in a temporary directory. The directory is
/// removed when the returned guard is dropped.
pub fn create_tmp_collection() -> Fallible<(TempDir, String)> {
    let dir: TempDir = tempdir()?;
    let path: String = dir.path().canonicalize()?.display().to_string();
    Ok((dir, path))
}

/// Insert a flashcard straight into a collection's database.
pub fn insert(
    directory: &str,
    card_id: &str,
    front: &str,
    created_at: Timestamp,
) -> Fallible<FlashcardId> {
    let mut coll = Collection::new(Some(directory.to_string()))?;
    let flashcard = Flashcard::new(card_id, front, "answer", &[], created_at)?;
    coll.db.insert_flashcard(&flashcard)
}

pub fn ts(s: &str) -> Timestamp {
    Timestamp::try_from(s.to_string()).unwrap()
}
