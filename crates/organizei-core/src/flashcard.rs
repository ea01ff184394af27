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

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::review::ReviewOutcome;
use crate::review::review;
use crate::review_log::ReviewLogEntry;
use crate::scheduling::Scheduling;
use crate::scheduling::SchedulingError;
use crate::types::grade::Grade;
use crate::types::timestamp::Timestamp;

/// Identifier of the card (study topic) a flashcard belongs to.
pub type CardId = String;

/// A question/answer pair with its review schedule and history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub card_id: CardId,
    pub front: String,
    pub back: String,
    pub tags: Vec<String>,
    pub scheduling: Scheduling,
    /// Oldest first.
    pub review_logs: Vec<ReviewLogEntry>,
}

impl Flashcard {
    pub fn new(
        card_id: impl Into<CardId>,
        front: &str,
        back: &str,
        tags: &[String],
        created_at: Timestamp,
    ) -> Fallible<Self> {
        let card_id: CardId = card_id.into().trim().to_string();
        if card_id.is_empty() {
            return fail("flashcard must belong to a card.");
        }
        Ok(Self {
            card_id,
            front: required(front, "front")?,
            back: required(back, "back")?,
            tags: normalize_tags(tags),
            scheduling: Scheduling::new(created_at),
            review_logs: Vec::new(),
        })
    }

    /// The flashcard with its content replaced. Fields given as `None` keep
    /// their value. The schedule and review history are not touched.
    pub fn edited(
        &self,
        front: Option<&str>,
        back: Option<&str>,
        tags: Option<&[String]>,
    ) -> Fallible<Self> {
        let front = match front {
            Some(front) => required(front, "front")?,
            None => self.front.clone(),
        };
        let back = match back {
            Some(back) => required(back, "back")?,
            None => self.back.clone(),
        };
        let tags = match tags {
            Some(tags) => normalize_tags(tags),
            None => self.tags.clone(),
        };
        Ok(Self {
            front,
            back,
            tags,
            ..self.clone()
        })
    }

    /// The flashcard as it stands after a review. `self` is left untouched.
    pub fn reviewed(&self, grade: Grade, now: Timestamp) -> Result<Self, SchedulingError> {
        let ReviewOutcome {
            scheduling,
            log_entry,
        } = review(self.scheduling, grade, now)?;
        let mut review_logs = self.review_logs.clone();
        review_logs.push(log_entry);
        Ok(Self {
            scheduling,
            review_logs,
            ..self.clone()
        })
    }
}

impl AsRef<Flashcard> for Flashcard {
    fn as_ref(&self) -> &Flashcard {
        self
    }
}

fn required(value: &str, side: &str) -> Fallible<String> {
    let value = value.trim();
    if value.is_empty() {
        return fail(format!("flashcard {side} is required."));
    }
    Ok(value.to_string())
}

/// Trim and lowercase tag names, dropping empty names and duplicates. The
/// first occurrence of each tag keeps its position.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !result.contains(&tag) {
            result.push(tag);
        }
    }
    result
}
