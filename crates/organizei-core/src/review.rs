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

use crate::review_log::ReviewLogEntry;
use crate::scheduling::Scheduling;
use crate::scheduling::SchedulingError;
use crate::scheduling::update_scheduling;
use crate::types::grade::Grade;
use crate::types::timestamp::Timestamp;

/// Everything a caller has to persist after a review: the replacement
/// schedule and the log entry to append. Both should be written together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReviewOutcome {
    pub scheduling: Scheduling,
    pub log_entry: ReviewLogEntry,
}

/// Grade a flashcard. Either both values are produced or neither is.
///
/// Callers must not run two reviews of the same flashcard concurrently from
/// the same starting schedule, otherwise one of them is lost on write.
pub fn review(
    scheduling: Scheduling,
    grade: Grade,
    now: Timestamp,
) -> Result<ReviewOutcome, SchedulingError> {
    let scheduling: Scheduling = update_scheduling(scheduling, grade, now)?;
    let log_entry: ReviewLogEntry = ReviewLogEntry::new(grade, now);
    Ok(ReviewOutcome {
        scheduling,
        log_entry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_review() -> Fallible<()> {
        let created_at = Timestamp::try_from("2024-01-01T08:00:00.000000".to_string())?;
        let now = Timestamp::try_from("2024-01-01T08:30:00.000000".to_string())?;
        let outcome = review(Scheduling::new(created_at), Grade::new(4)?, now)?;
        assert_eq!(outcome.scheduling.repetitions, 1);
        assert_eq!(outcome.scheduling.last_review, Some(now));
        assert_eq!(outcome.log_entry, ReviewLogEntry::new(Grade::new(4)?, now));
        Ok(())
    }

    #[test]
    fn test_review_of_corrupt_state() -> Fallible<()> {
        let now = Timestamp::try_from("2024-01-01T08:30:00.000000".to_string())?;
        let mut scheduling = Scheduling::new(now);
        scheduling.ease_factor = 1.0;
        let result = review(scheduling, Grade::new(4)?, now);
        assert!(matches!(
            result,
            Err(SchedulingError::InvariantViolation(_))
        ));
        Ok(())
    }
}
