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
use organizei_core::error::fail;

use crate::cmd::OutputFormat;
use crate::collection::Collection;
use crate::db::FlashcardId;
use crate::db::StoredFlashcard;

pub fn show_flashcard(
    directory: Option<String>,
    id: FlashcardId,
    format: OutputFormat,
    out: &mut impl Write,
) -> Fallible<StoredFlashcard> {
    let coll = Collection::new(directory)?;
    let stored: StoredFlashcard = match coll.db.get_flashcard(id)? {
        Some(stored) => stored,
        None => return fail(format!("no flashcard with id {id}.")),
    };
    match format {
        OutputFormat::Text => {
            let card = &stored.flashcard;
            let s = &card.scheduling;
            let last_review = match s.last_review {
                Some(ts) => ts.to_string(),
                None => "never".to_string(),
            };
            writeln!(out, "id: {}", stored.id)?;
            writeln!(out, "card: {}", card.card_id)?;
            writeln!(out, "front: {}", card.front)?;
            writeln!(out, "back: {}", card.back)?;
            writeln!(out, "tags: {}", card.tags.join(", "))?;
            writeln!(out, "next review: {}", s.next_review)?;
            writeln!(out, "last review: {last_review}")?;
            writeln!(out, "repetitions: {}", s.repetitions)?;
            writeln!(out, "interval: {} days", s.interval_days)?;
            writeln!(out, "ease: {:.2}", s.ease_factor)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &stored)?;
            writeln!(out)?;
        }
    }
    Ok(stored)
}
