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

//! Selecting the flashcards of a card that are due for review.
//!
//! Storage engines may pre-filter natively with a range query on
//! `next_review`, but `DueQuery::matches` decides.

use crate::flashcard::CardId;
use crate::flashcard::Flashcard;
use crate::scheduling::Scheduling;
use crate::types::timestamp::Timestamp;

/// A flashcard is due if its next review falls strictly before the cutoff.
pub fn is_due(scheduling: &Scheduling, cutoff: Timestamp) -> bool {
    scheduling.next_review < cutoff
}

/// The cutoff for a review session started at `now`: the end of that day.
pub fn review_cutoff(now: Timestamp) -> Timestamp {
    now.date().end_of_day()
}

#[derive(Clone, Debug, PartialEq)]
pub struct DueQuery {
    pub card_id: CardId,
    pub cutoff: Timestamp,
}

impl DueQuery {
    pub fn new(card_id: impl Into<CardId>, cutoff: Timestamp) -> Self {
        Self {
            card_id: card_id.into(),
            cutoff,
        }
    }

    /// A query for everything due by the end of the day containing `now`.
    pub fn for_session(card_id: impl Into<CardId>, now: Timestamp) -> Self {
        Self::new(card_id, review_cutoff(now))
    }

    pub fn matches(&self, flashcard: &Flashcard) -> bool {
        flashcard.card_id == self.card_id && is_due(&flashcard.scheduling, self.cutoff)
    }

    /// Filter a snapshot of flashcards, preserving their order.
    pub fn select<'a>(&self, flashcards: &'a [Flashcard]) -> Vec<&'a Flashcard> {
        flashcards.iter().filter(|f| self.matches(f)).collect()
    }
}

/// Study order: earliest due first. Ties keep their relative order.
pub fn sort_by_next_review<F: AsRef<Flashcard>>(flashcards: &mut [F]) {
    flashcards.sort_by_key(|f| f.as_ref().scheduling.next_review);
}
