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

//! The SM-2 scheduling engine.
//!
//! A review with a passing grade extends the interval (1 day, then 6 days,
//! then the previous interval times the ease factor). A lapse resets the
//! streak and brings the card back tomorrow. The ease factor is adjusted on
//! every review and never drops below [`MIN_EASE_FACTOR`].

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::types::grade::Grade;
use crate::types::grade::MAX_GRADE;
use crate::types::timestamp::Timestamp;

/// The floor of the ease factor.
pub const MIN_EASE_FACTOR: EaseFactor = 1.3;

/// The ease factor of a card that has never been reviewed.
pub const INITIAL_EASE_FACTOR: EaseFactor = 2.5;

pub type EaseFactor = f64;

/// Errors produced when a review cannot be scheduled.
#[derive(Clone, Debug, PartialEq)]
pub enum SchedulingError {
    /// The grade is not an integer in `0..=5`.
    InvalidGrade(String),
    /// The input scheduling state is corrupt.
    InvariantViolation(String),
    /// The next review date can't be represented.
    IntervalOverflow(i64),
}

impl Display for SchedulingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingError::InvalidGrade(value) => {
                write!(f, "invalid grade: '{value}' (expected 0-{MAX_GRADE})")
            }
            SchedulingError::InvariantViolation(msg) => {
                write!(f, "invalid scheduling state: {msg}")
            }
            SchedulingError::IntervalOverflow(days) => {
                write!(f, "next review is out of range: interval of {days} days")
            }
        }
    }
}

impl Error for SchedulingError {}

/// The review schedule of a single flashcard.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scheduling {
    /// When the card becomes due again.
    pub next_review: Timestamp,
    /// When the card was last reviewed. `None` before the first review.
    pub last_review: Option<Timestamp>,
    /// Consecutive passing reviews since the last lapse.
    pub repetitions: u32,
    /// Days between the last review and the next one.
    pub interval_days: i64,
    /// Multiplier controlling interval growth.
    pub ease_factor: EaseFactor,
}

impl Scheduling {
    /// The schedule of a freshly created card: due immediately.
    pub fn new(created_at: Timestamp) -> Self {
        Self {
            next_review: created_at,
            last_review: None,
            repetitions: 0,
            interval_days: 0,
            ease_factor: INITIAL_EASE_FACTOR,
        }
    }

    pub fn is_new(&self) -> bool {
        self.last_review.is_none()
    }

    /// Check the invariants every stored schedule must satisfy.
    pub fn validate(&self) -> Result<(), SchedulingError> {
        // Written so that NaN fails too.
        if !(self.ease_factor >= MIN_EASE_FACTOR) || !self.ease_factor.is_finite() {
            return Err(SchedulingError::InvariantViolation(format!(
                "ease factor {} is below {MIN_EASE_FACTOR}",
                self.ease_factor
            )));
        }
        if self.interval_days < 0 {
            return Err(SchedulingError::InvariantViolation(format!(
                "negative interval of {} days",
                self.interval_days
            )));
        }
        if let Some(last_review) = self.last_review {
            if self.next_review < last_review {
                return Err(SchedulingError::InvariantViolation(format!(
                    "next review {} precedes last review {last_review}",
                    self.next_review
                )));
            }
        }
        Ok(())
    }
}

/// The interval after a passing review. `repetitions` is the streak length
/// including this review.
pub fn next_interval(repetitions: u32, interval_days: i64, ease_factor: EaseFactor) -> i64 {
    match repetitions {
        1 => 1,
        2 => 6,
        _ => (interval_days as f64 * ease_factor).round() as i64,
    }
}

pub fn next_ease_factor(ease_factor: EaseFactor, grade: Grade) -> EaseFactor {
    let q: f64 = grade.into();
    let delta: f64 = 0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02);
    f64::max(ease_factor + delta, MIN_EASE_FACTOR)
}

/// Compute the schedule that follows a review.
///
/// Interval growth uses the ease factor from before this review; the ease
/// factor is then updated from the grade alone.
pub fn update_scheduling(
    scheduling: Scheduling,
    grade: Grade,
    now: Timestamp,
) -> Result<Scheduling, SchedulingError> {
    scheduling.validate()?;
    let Scheduling {
        repetitions,
        interval_days,
        ease_factor,
        ..
    } = scheduling;
    let (repetitions, interval_days): (u32, i64) = if grade.is_pass() {
        let repetitions: u32 = repetitions.saturating_add(1);
        let interval_days: i64 = next_interval(repetitions, interval_days, ease_factor);
        (repetitions, interval_days)
    } else {
        (0, 1)
    };
    let ease_factor: EaseFactor = next_ease_factor(ease_factor, grade);
    let next_review: Timestamp = now
        .plus_days(interval_days)
        .ok_or(SchedulingError::IntervalOverflow(interval_days))?;
    Ok(Scheduling {
        next_review,
        last_review: Some(now),
        repetitions,
        interval_days,
        ease_factor,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::error::Fallible;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn make_timestamp(s: &str) -> Timestamp {
        let ndt = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.3f").unwrap();
        Timestamp::new(ndt)
    }

    fn grade(v: i64) -> Grade {
        Grade::new(v).unwrap()
    }

    fn reviewed(repetitions: u32, interval_days: i64, ease_factor: EaseFactor) -> Scheduling {
        let last = make_timestamp("2024-01-01T12:00:00.000");
        Scheduling {
            next_review: last.plus_days(interval_days).unwrap(),
            last_review: Some(last),
            repetitions,
            interval_days,
            ease_factor,
        }
    }

    #[test]
    fn test_new() {
        let now = make_timestamp("2024-01-01T12:00:00.000");
        let scheduling = Scheduling::new(now);
        assert!(scheduling.is_new());
        assert_eq!(scheduling.next_review, now);
        assert_eq!(scheduling.repetitions, 0);
        assert_eq!(scheduling.interval_days, 0);
        assert_eq!(scheduling.ease_factor, INITIAL_EASE_FACTOR);
        assert_eq!(scheduling.validate(), Ok(()));
    }

    #[test]
    fn test_first_two_passes() -> Fallible<()> {
        let created_at = make_timestamp("2024-01-01T12:00:00.000");
        let first_at = make_timestamp("2024-01-01T12:05:00.000");
        let first = update_scheduling(Scheduling::new(created_at), grade(5), first_at)?;
        assert_eq!(first.repetitions, 1);
        assert_eq!(first.interval_days, 1);
        assert_eq!(first.last_review, Some(first_at));
        assert!(!first.is_new());

        let second_at = make_timestamp("2024-01-02T09:00:00.000");
        let second = update_scheduling(first, grade(5), second_at)?;
        assert_eq!(second.repetitions, 2);
        assert_eq!(second.interval_days, 6);
        assert_eq!(second.next_review, make_timestamp("2024-01-08T09:00:00.000"));
        Ok(())
    }

    #[test]
    fn test_growth_phase() -> Fallible<()> {
        let now = make_timestamp("2024-01-07T12:00:00.000");
        let result = update_scheduling(reviewed(2, 6, 2.5), grade(4), now)?;
        assert_eq!(result.repetitions, 3);
        assert_eq!(result.interval_days, 15);
        assert!(approx_eq(result.ease_factor, 2.5));
        Ok(())
    }

    /// The interval grows with the ease factor from before the review: 15 *
    /// 2.5 = 37.5 rounds to 38, whereas the updated factor (2.36) would give
    /// 35.
    #[test]
    fn test_interval_uses_prior_ease_factor() -> Fallible<()> {
        let now = make_timestamp("2024-01-22T12:00:00.000");
        let result = update_scheduling(reviewed(3, 15, 2.5), grade(3), now)?;
        assert_eq!(result.repetitions, 4);
        assert_eq!(result.interval_days, 38);
        assert!(approx_eq(result.ease_factor, 2.36));
        Ok(())
    }

    #[test]
    fn test_lapse_resets() -> Fallible<()> {
        let now = make_timestamp("2024-03-01T12:00:00.000");
        for g in 0..3 {
            for (repetitions, interval_days) in [(0, 0), (1, 1), (2, 6), (7, 400)] {
                let result =
                    update_scheduling(reviewed(repetitions, interval_days, 2.1), grade(g), now)?;
                assert_eq!(result.repetitions, 0);
                assert_eq!(result.interval_days, 1);
                assert_eq!(result.next_review, now.plus_days(1).unwrap());
            }
        }
        Ok(())
    }

    #[test]
    fn test_lapse_still_updates_ease_factor() -> Fallible<()> {
        let now = make_timestamp("2024-03-01T12:00:00.000");
        let result = update_scheduling(reviewed(5, 30, 2.5), grade(2), now)?;
        assert!(approx_eq(result.ease_factor, 2.18));
        Ok(())
    }

    #[test]
    fn test_ease_factor_deltas() {
        let expected = [-0.8, -0.54, -0.32, -0.14, 0.0, 0.1];
        for (g, delta) in expected.iter().enumerate() {
            let ease = next_ease_factor(2.5, grade(g as i64));
            assert!(approx_eq(ease, 2.5 + delta), "grade {g}: {ease}");
        }
    }

    #[test]
    fn test_date_arithmetic() -> Fallible<()> {
        let now = make_timestamp("2024-05-17T18:45:30.250");
        // (input, grade, expected interval)
        let cases = [
            (reviewed(2, 0, 2.5), 5, 0),
            (Scheduling::new(now), 5, 1),
            (reviewed(1, 1, 2.5), 4, 6),
            (reviewed(2, 6, 2.5), 4, 15),
            (reviewed(4, 160, 2.5), 4, 400),
        ];
        for (input, g, interval_days) in cases {
            let result = update_scheduling(input, grade(g), now)?;
            assert_eq!(result.interval_days, interval_days);
            let expected = now.into_inner() + chrono::Duration::days(interval_days);
            assert_eq!(result.next_review.into_inner(), expected);
            assert_eq!(result.last_review, Some(now));
        }
        Ok(())
    }

    #[test]
    fn test_ease_factor_floor() -> Fallible<()> {
        let now = make_timestamp("2024-01-01T12:00:00.000");
        let eases = [1.3, 1.31, 1.5, 1.7, 2.0, 2.5, 3.0];
        for ease_factor in eases {
            for g in 0..=5 {
                let result = update_scheduling(reviewed(3, 10, ease_factor), grade(g), now)?;
                assert!(result.ease_factor >= MIN_EASE_FACTOR);
            }
        }
        Ok(())
    }

    #[test]
    fn test_repeated_blackouts_stop_at_floor() -> Fallible<()> {
        let mut now = make_timestamp("2024-01-01T12:00:00.000");
        let mut scheduling = Scheduling::new(now);
        for _ in 0..1000 {
            scheduling = update_scheduling(scheduling, grade(0), now)?;
            assert!(scheduling.ease_factor >= MIN_EASE_FACTOR);
            now = scheduling.next_review;
        }
        assert_eq!(scheduling.ease_factor, MIN_EASE_FACTOR);
        assert_eq!(scheduling.repetitions, 0);
        assert_eq!(scheduling.interval_days, 1);
        Ok(())
    }

    #[test]
    fn test_input_is_not_modified() -> Fallible<()> {
        let input = reviewed(2, 6, 2.5);
        let copy = input;
        let now = make_timestamp("2024-01-07T12:00:00.000");
        let result = update_scheduling(input, grade(5), now)?;
        assert_eq!(input, copy);
        assert_ne!(result, input);
        Ok(())
    }

    #[test]
    fn test_rejects_low_ease_factor() {
        let now = make_timestamp("2024-01-01T12:00:00.000");
        for ease_factor in [1.29, 0.0, -2.5, f64::NAN, f64::INFINITY] {
            let result = update_scheduling(reviewed(2, 6, ease_factor), grade(4), now);
            assert!(matches!(
                result,
                Err(SchedulingError::InvariantViolation(_))
            ));
        }
    }

    #[test]
    fn test_rejects_negative_interval() {
        let now = make_timestamp("2024-01-01T12:00:00.000");
        let mut scheduling = Scheduling::new(now);
        scheduling.interval_days = -1;
        let result = update_scheduling(scheduling, grade(4), now);
        assert!(matches!(
            result,
            Err(SchedulingError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_rejects_next_review_before_last_review() {
        let now = make_timestamp("2024-01-01T12:00:00.000");
        let mut scheduling = reviewed(1, 1, 2.5);
        scheduling.next_review = make_timestamp("2023-12-31T12:00:00.000");
        let result = update_scheduling(scheduling, grade(4), now);
        assert!(matches!(
            result,
            Err(SchedulingError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_interval_overflow() {
        let now = make_timestamp("2024-01-01T12:00:00.000");
        let scheduling = Scheduling {
            next_review: now,
            last_review: Some(now),
            repetitions: 40,
            interval_days: i64::MAX / 2,
            ease_factor: 2.5,
        };
        let result = update_scheduling(scheduling, grade(5), now);
        assert!(matches!(result, Err(SchedulingError::IntervalOverflow(_))));
    }

    #[test]
    fn test_serialization_roundtrip() -> Fallible<()> {
        let scheduling = reviewed(3, 15, 2.36);
        let json = serde_json::to_string(&scheduling)?;
        let parsed: Scheduling = serde_json::from_str(&json)?;
        assert_eq!(parsed, scheduling);
        Ok(())
    }
}
