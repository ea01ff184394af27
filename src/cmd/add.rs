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
use organizei_core::Timestamp;
use organizei_core::error::Fallible;

use crate::collection::Collection;
use crate::db::FlashcardId;

pub struct NewFlashcard {
    pub card_id: String,
    pub front: String,
    pub back: String,
    pub tags: Vec<String>,
}

pub fn add_flashcard(
    directory: Option<String>,
    new: NewFlashcard,
    now: Timestamp,
    out: &mut impl Write,
) -> Fallible<FlashcardId> {
    let mut coll = Collection::new(directory)?;
    let flashcard = Flashcard::new(new.card_id, &new.front, &new.back, &new.tags, now)?;
    let id: FlashcardId = coll.db.insert_flashcard(&flashcard)?;
    info!("Created flashcard {id} in card '{}'", flashcard.card_id);
    writeln!(out, "Created flashcard {id}.")?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_collection;
    use crate::helper::ts;

    #[test]
    fn test_add_flashcard() -> Fallible<()> {
        let (_guard, directory) = create_tmp_collection()?;
        let mut out = Vec::new();
        let new = NewFlashcard {
            card_id: "bio".to_string(),
            front: "Powerhouse of the cell?".to_string(),
            back: "Mitochondria".to_string(),
            tags: vec!["Cells".to_string()],
        };
        let now = ts("2024-01-01T10:00:00.000000");
        let id = add_flashcard(Some(directory.clone()), new, now, &mut out)?;
        assert_eq!(String::from_utf8(out).unwrap(), format!("Created flashcard {id}.\n"));

        let coll = Collection::new(Some(directory))?;
        let stored = coll.db.get_flashcard(id)?.unwrap();
        assert_eq!(stored.flashcard.tags, vec!["cells".to_string()]);
        assert_eq!(stored.flashcard.scheduling.next_review, now);
        Ok(())
    }

    #[test]
    fn test_add_flashcard_without_front() -> Fallible<()> {
        let (_guard, directory) = create_tmp_collection()?;
        let new = NewFlashcard {
            card_id: "bio".to_string(),
            front: "   ".to_string(),
            back: "Mitochondria".to_string(),
            tags: vec![],
        };
        let result = add_flashcard(
            Some(directory),
            new,
            ts("2024-01-01T10:00:00.000000"),
            &mut Vec::new(),
        );
        assert!(result.is_err());
        Ok(())
    }
}
