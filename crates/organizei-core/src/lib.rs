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

//! organizei-core: Core library for organizei flashcard reviews.
//!
//! This library performs no I/O. It provides:
//! - The SM-2 scheduling engine
//! - Review log entries
//! - Due-flashcard selection
//! - Flashcard, grade and timestamp types

pub mod due;
pub mod error;
pub mod flashcard;
pub mod review;
pub mod review_log;
pub mod scheduling;
pub mod types;

// Re-exports for convenience
pub use due::{DueQuery, is_due, review_cutoff, sort_by_next_review};
pub use error::{ErrorReport, Fallible, fail};
pub use flashcard::{CardId, Flashcard};
pub use review::{ReviewOutcome, review};
pub use review_log::ReviewLogEntry;
pub use scheduling::{Scheduling, SchedulingError, update_scheduling};
pub use types::date::Date;
pub use types::grade::Grade;
pub use types::timestamp::Timestamp;
