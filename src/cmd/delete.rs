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
use organizei_core::error::Fallible;
use organizei_core::error::fail;

use crate::collection::Collection;
use crate::db::FlashcardId;

pub fn delete_flashcard(
    directory: Option<String>,
    id: FlashcardId,
    out: &mut impl Write,
) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    if !coll.db.delete_flashcard(id)? {
        return fail(format!("no flashcard with id {id}."));
    }
    info!("Deleted flashcard {id}");
    writeln!(out, "Deleted flashcard {id}.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_collection;
    use crate::helper::insert;
    use crate::helper::ts;

    #[test]
    fn test_delete_flashcard() -> Fallible<()> {
        let (_guard, directory) = create_tmp_collection()?;
        let id = insert(&directory, "c1", "front", ts("2024-01-01T10:00:00.000000"))?;
        delete_flashcard(Some(directory.clone()), id, &mut Vec::new())?;
        let result = delete_flashcard(Some(directory), id, &mut Vec::new());
        assert!(result.is_err());
        Ok(())
    }
}
