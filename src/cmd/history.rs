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

use organizei_core::ReviewLogEntry;
use organizei_core::error::Fallible;
use organizei_core::error::fail;

use crate::cmd::OutputFormat;
use crate::collection::Collection;
use crate::db::FlashcardId;

pub fn print_history(
    directory: Option<String>,
    id: FlashcardId,
    format: OutputFormat,
    out: &mut impl Write,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let entries: Vec<ReviewLogEntry> = match coll.db.get_flashcard(id)? {
        Some(stored) => stored.flashcard.review_logs,
        None => return fail(format!("no flashcard with id {id}.")),
    };
    match format {
        OutputFormat::Text => {
            for entry in &entries {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    entry.review_date, entry.grade, entry.response_time_seconds
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
