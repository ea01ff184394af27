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

use std::path::Path;

use log::debug;
use organizei_core::DueQuery;
use organizei_core::Flashcard;
use organizei_core::ReviewLogEntry;
use organizei_core::ReviewOutcome;
use organizei_core::Scheduling;
use organizei_core::error::Fallible;
use organizei_core::sort_by_next_review;
use organizei_core::error::fail;
use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Row;
use rusqlite::params;
use rusqlite::types::Type;
use serde::Serialize;

pub type FlashcardId = i64;

/// A flashcard as persisted, with its row identity and write version.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoredFlashcard {
    pub id: FlashcardId,
    /// Bumped on every recorded review. A review must present the version
    /// it was computed from.
    pub version: i64,
    #[serde(flatten)]
    pub flashcard: Flashcard,
}

impl AsRef<Flashcard> for StoredFlashcard {
    fn as_ref(&self) -> &Flashcard {
        &self.flashcard
    }
}

const FLASHCARD_COLUMNS: &str = "id, version, card_id, front, back, tags, next_review, \
                                 last_review, repetitions, interval_days, ease_factor";

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(path: &Path) -> Fallible<Self> {
        debug!("Opening database at {}", path.display());
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub fn in_memory() -> Fallible<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    pub fn insert_flashcard(&mut self, flashcard: &Flashcard) -> Fallible<FlashcardId> {
        let tags: String = serde_json::to_string(&flashcard.tags)?;
        let Scheduling {
            next_review,
            last_review,
            repetitions,
            interval_days,
            ease_factor,
        } = flashcard.scheduling;
        let tx = self.conn.transaction()?;
        tx.execute(
            "insert into flashcards (card_id, front, back, tags, next_review, last_review, \
             repetitions, interval_days, ease_factor) \
             values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                flashcard.card_id,
                flashcard.front,
                flashcard.back,
                tags,
                next_review,
                last_review,
                repetitions,
                interval_days,
                ease_factor,
            ],
        )?;
        let id: FlashcardId = tx.last_insert_rowid();
        for entry in &flashcard.review_logs {
            insert_log_entry(&tx, id, entry)?;
        }
        tx.commit()?;
        debug!("Inserted flashcard {id} into card '{}'", flashcard.card_id);
        Ok(id)
    }

    pub fn get_flashcard(&self, id: FlashcardId) -> Fallible<Option<StoredFlashcard>> {
        let sql = format!("select {FLASHCARD_COLUMNS} from flashcards where id = ?1");
        let row: Option<FlashcardRow> = self
            .conn
            .query_row(&sql, [id], FlashcardRow::read)
            .optional()?;
        match row {
            Some(row) => Ok(Some(self.load(row)?)),
            None => Ok(None),
        }
    }

    /// All flashcards, optionally restricted to one card, in insertion order.
    pub fn list_flashcards(&self, card_id: Option<&str>) -> Fallible<Vec<StoredFlashcard>> {
        let sql = format!(
            "select {FLASHCARD_COLUMNS} from flashcards \
             where ?1 is null or card_id = ?1 order by id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows: Vec<FlashcardRow> = stmt
            .query_map([card_id], FlashcardRow::read)?
            .collect::<Result<_, _>>()?;
        rows.into_iter().map(|row| self.load(row)).collect()
    }

    /// The flashcards matching a due query, earliest due first. Ties are
    /// broken by id.
    ///
    /// The index narrows the scan; `DueQuery::matches` has the final word.
    pub fn due_flashcards(&self, query: &DueQuery) -> Fallible<Vec<StoredFlashcard>> {
        let sql = format!(
            "select {FLASHCARD_COLUMNS} from flashcards \
             where card_id = ?1 and next_review < ?2 order by id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows: Vec<FlashcardRow> = stmt
            .query_map(params![query.card_id, query.cutoff], FlashcardRow::read)?
            .collect::<Result<_, _>>()?;
        let mut due: Vec<StoredFlashcard> = Vec::with_capacity(rows.len());
        for row in rows {
            let stored = self.load(row)?;
            if query.matches(&stored.flashcard) {
                due.push(stored);
            }
        }
        sort_by_next_review(&mut due);
        Ok(due)
    }

    /// Replace the front, back and tags of a flashcard. The schedule and the
    /// version are left alone, so an in-flight review still applies. Returns
    /// whether the flashcard exists.
    pub fn update_content(&mut self, id: FlashcardId, flashcard: &Flashcard) -> Fallible<bool> {
        let tags: String = serde_json::to_string(&flashcard.tags)?;
        let updated: usize = self.conn.execute(
            "update flashcards set front = ?1, back = ?2, tags = ?3 where id = ?4",
            params![flashcard.front, flashcard.back, tags, id],
        )?;
        debug!("Updated content of flashcard {id}");
        Ok(updated > 0)
    }

    /// Persist a review: replace the schedule and append the log entry, in one
    /// transaction. Fails without writing anything if the flashcard has been
    /// reviewed since `expected_version` was read.
    pub fn record_review(
        &mut self,
        id: FlashcardId,
        expected_version: i64,
        outcome: &ReviewOutcome,
    ) -> Fallible<()> {
        let Scheduling {
            next_review,
            last_review,
            repetitions,
            interval_days,
            ease_factor,
        } = outcome.scheduling;
        let tx = self.conn.transaction()?;
        let updated: usize = tx.execute(
            "update flashcards set next_review = ?1, last_review = ?2, repetitions = ?3, \
             interval_days = ?4, ease_factor = ?5, version = version + 1 \
             where id = ?6 and version = ?7",
            params![
                next_review,
                last_review,
                repetitions,
                interval_days,
                ease_factor,
                id,
                expected_version,
            ],
        )?;
        if updated == 0 {
            let exists: bool = tx.query_row(
                "select exists (select 1 from flashcards where id = ?1)",
                [id],
                |row| row.get(0),
            )?;
            return if exists {
                fail(format!(
                    "flashcard {id} was reviewed concurrently; reload it and try again."
                ))
            } else {
                fail(format!("no flashcard with id {id}."))
            };
        }
        insert_log_entry(&tx, id, &outcome.log_entry)?;
        tx.commit()?;
        debug!("Recorded review of flashcard {id} (version {expected_version})");
        Ok(())
    }

    /// Delete a flashcard and its review history. Returns whether it existed.
    pub fn delete_flashcard(&mut self, id: FlashcardId) -> Fallible<bool> {
        let tx = self.conn.transaction()?;
        tx.execute("delete from review_logs where flashcard_id = ?1", [id])?;
        let deleted: usize = tx.execute("delete from flashcards where id = ?1", [id])?;
        tx.commit()?;
        Ok(deleted > 0)
    }

    pub fn review_logs(&self, id: FlashcardId) -> Fallible<Vec<ReviewLogEntry>> {
        let mut stmt = self.conn.prepare(
            "select review_date, grade, response_time_seconds from review_logs \
             where flashcard_id = ?1 order by id",
        )?;
        let entries = stmt
            .query_map([id], |row| {
                Ok(ReviewLogEntry {
                    review_date: row.get(0)?,
                    grade: row.get(1)?,
                    response_time_seconds: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    fn load(&self, row: FlashcardRow) -> Fallible<StoredFlashcard> {
        let review_logs = self.review_logs(row.id)?;
        Ok(StoredFlashcard {
            id: row.id,
            version: row.version,
            flashcard: Flashcard {
                card_id: row.card_id,
                front: row.front,
                back: row.back,
                tags: row.tags,
                scheduling: row.scheduling,
                review_logs,
            },
        })
    }
}

fn insert_log_entry(conn: &Connection, id: FlashcardId, entry: &ReviewLogEntry) -> Fallible<()> {
    conn.execute(
        "insert into review_logs (flashcard_id, review_date, grade, response_time_seconds) \
         values (?1, ?2, ?3, ?4)",
        params![
            id,
            entry.review_date,
            entry.grade,
            entry.response_time_seconds
        ],
    )?;
    Ok(())
}

/// A `flashcards` row, before its review history is attached.
struct FlashcardRow {
    id: FlashcardId,
    version: i64,
    card_id: String,
    front: String,
    back: String,
    tags: Vec<String>,
    scheduling: Scheduling,
}

impl FlashcardRow {
    fn read(row: &Row) -> rusqlite::Result<Self> {
        let tags: String = row.get(5)?;
        let tags: Vec<String> = serde_json::from_str(&tags)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;
        Ok(Self {
            id: row.get(0)?,
            version: row.get(1)?,
            card_id: row.get(2)?,
            front: row.get(3)?,
            back: row.get(4)?,
            tags,
            scheduling: Scheduling {
                next_review: row.get(6)?,
                last_review: row.get(7)?,
                repetitions: row.get(8)?,
                interval_days: row.get(9)?,
                ease_factor: row.get(10)?,
            },
        })
    }
}
