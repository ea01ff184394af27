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

use log::debug;
use organizei_core::DueQuery;
use organizei_core::Timestamp;
use organizei_core::error::Fallible;

use crate::cmd::OutputFormat;
use crate::collection::Collection;
use crate::db::StoredFlashcard;

/// Print the flashcards of a card that are due by the end of today, earliest
/// first.
pub fn list_due(
    directory: Option<String>,
    card_id: String,
    now: Timestamp,
    format: OutputFormat,
    out: &mut impl Write,
) -> Fallible<Vec<StoredFlashcard>> {
    let coll = Collection::new(directory)?;
    let query = DueQuery::for_session(card_id, now);
    let mut due: Vec<StoredFlashcard> = coll.db.due_flashcards(&query)?;
    debug!(
        "{} flashcards in '{}' due before {}",
        due.len(),
        query.card_id,
        query.cutoff
    );
    if let Some(limit) = coll.config.session_limit {
        due.truncate(limit);
    }
    match format {
        OutputFormat::Text => {
            for stored in &due {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    stored.id, stored.flashcard.scheduling.next_review, stored.flashcard.front
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &due)?;
            writeln!(out)?;
        }
    }
    Ok(due)
}
