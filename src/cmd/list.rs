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

use organizei_core::error::Fallible;

use crate::collection::Collection;

pub fn list_flashcards(
    directory: Option<String>,
    card_id: Option<String>,
    out: &mut impl Write,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    for stored in coll.db.list_flashcards(card_id.as_deref())? {
        let card = &stored.flashcard;
        let tags = if card.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", card.tags.join(", "))
        };
        writeln!(
            out,
            "{}\t{}\t{}\t{}{tags}",
            stored.id,
            card.card_id,
            card.scheduling.next_review.date(),
            card.front,
        )?;
    }
    Ok(())
}
