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

use crate::types::grade::Grade;
use crate::types::timestamp::Timestamp;

/// An entry in a flashcard's review history. Entries are only ever appended.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewLogEntry {
    pub review_date: Timestamp,
    pub grade: Grade,
    /// Always zero: measured answer times are not recorded yet.
    pub response_time_seconds: f64,
}

impl ReviewLogEntry {
    pub fn new(grade: Grade, now: Timestamp) -> Self {
        Self {
            review_date: now,
            grade,
            response_time_seconds: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_new() -> Fallible<()> {
        let now = Timestamp::new(
            NaiveDateTime::parse_from_str("2024-01-01T12:00:00.000", "%Y-%m-%dT%H:%M:%S%.3f")
                .unwrap(),
        );
        for g in 0..=5 {
            let entry = ReviewLogEntry::new(Grade::new(g)?, now);
            assert_eq!(entry.review_date, now);
            assert_eq!(entry.grade, Grade::new(g)?);
            assert_eq!(entry.response_time_seconds, 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_serialization_format() -> Fallible<()> {
        let now = Timestamp::try_from("2024-01-01T12:00:00.000000".to_string())?;
        let entry = ReviewLogEntry::new(Grade::new(3)?, now);
        assert_eq!(
            serde_json::to_string(&entry)?,
            r#"{"review_date":"2024-01-01T12:00:00.000000","grade":3,"response_time_seconds":0.0}"#
        );
        Ok(())
    }
}
