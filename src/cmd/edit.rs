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

use std::io::Write;

use log::info;
use organizei_core::Flashcard;
use organizei_core::error::Fallible;
use organizei_core::error::fail;

use crate::collection::Collection;
use crate::db::FlashcardId;
use crate::db::StoredFlashcard;

/// New content for a flashcard. `None` keeps the current value.
#[derive(Default)]
pub struct FlashcardEdit {
    pub front: Option<String>,
    pub back: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl FlashcardEdit {
    fn is_empty(&self) -> bool {
        self.front.is_none() && self.back.is_none() && self.tags.is_none()
    }
}

/// Change the front, back or tags of a flashcard, keeping its schedule.
pub fn edit_flashcard(
    directory: Option<String>,
    id: FlashcardId,
    edit: FlashcardEdit,
    out: &mut impl Write,
) -> Fallible<StoredFlashcard> {
    if edit.is_empty() {
        return fail("nothing to edit: pass --front, --back, --tag or --clear-tags.");
    }
    let mut coll = Collection::new(directory)?;
    let stored: StoredFlashcard = match coll.db.get_flashcard(id)? {
        Some(stored) => stored,
        None => return fail(format!("no flashcard with id {id}.")),
    };
    let flashcard: Flashcard = stored.flashcard.edited(
        edit.front.as_deref(),
        edit.back.as_deref(),
        edit.tags.as_deref(),
    )?;
    if !coll.db.update_content(id, &flashcard)? {
        return fail(format!("no flashcard with id {id}."));
    }
    info!("Edited flashcard {id}");
    writeln!(out, "Updated flashcard {id}.")?;
    Ok(StoredFlashcard {
        flashcard,
        ..stored
    })
}
