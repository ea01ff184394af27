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
use organizei_core::Grade;
use organizei_core::ReviewOutcome;
use organizei_core::Scheduling;
use organizei_core::Timestamp;
use organizei_core::error::Fallible;
use organizei_core::error::fail;
use organizei_core::review;

use crate::collection::Collection;
use crate::db::FlashcardId;
use crate::db::StoredFlashcard;

/// Grade a flashcard and persist the new schedule.
///
/// The grade is validated here, before the scheduler runs. The write is
/// rejected if the flashcard was reviewed by someone else in the meantime.
pub fn review_flashcard(
    directory: Option<String>,
    id: FlashcardId,
    grade: String,
    now: Timestamp,
    out: &mut impl Write,
) -> Fallible<Scheduling> {
    let grade: Grade = Grade::try_from(grade)?;
    let mut coll = Collection::new(directory)?;
    let stored: StoredFlashcard = match coll.db.get_flashcard(id)? {
        Some(stored) => stored,
        None => return fail(format!("no flashcard with id {id}.")),
    };
    let outcome: ReviewOutcome = review(stored.flashcard.scheduling, grade, now)?;
    coll.db.record_review(id, stored.version, &outcome)?;
    let Scheduling {
        next_review,
        interval_days,
        ease_factor,
        repetitions,
        ..
    } = outcome.scheduling;
    info!("Reviewed flashcard {id} with grade {grade}; next review at {next_review}");
    writeln!(
        out,
        "Next review: {} (in {interval_days} days, streak {repetitions}, ease {ease_factor:.2}).",
        next_review.date()
    )?;
    Ok(outcome.scheduling)
}
