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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::scheduling::SchedulingError;

/// The highest grade: perfect recall.
pub const MAX_GRADE: u8 = 5;

/// The lowest grade that counts as a successful recall.
pub const PASSING_GRADE: u8 = 3;

/// Quality of recall reported by the learner, from 0 (total blackout) to 5
/// (perfect). A value of this type is always in range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub fn new(value: i64) -> Result<Self, SchedulingError> {
        match u8::try_from(value) {
            Ok(v) if v <= MAX_GRADE => Ok(Self(v)),
            _ => Err(SchedulingError::InvalidGrade(value.to_string())),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this grade counts as a successful recall.
    pub fn is_pass(self) -> bool {
        self.0 >= PASSING_GRADE
    }
}

impl From<Grade> for u8 {
    fn from(g: Grade) -> u8 {
        g.0
    }
}

impl From<Grade> for f64 {
    fn from(g: Grade) -> f64 {
        g.0 as f64
    }
}

impl TryFrom<u8> for Grade {
    type Error = SchedulingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Grade::new(value as i64)
    }
}

impl TryFrom<String> for Grade {
    type Error = SchedulingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().parse::<i64>() {
            Ok(v) => Grade::new(v),
            Err(_) => Err(SchedulingError::InvalidGrade(value)),
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "sqlite")]
impl rusqlite::types::ToSql for Grade {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        Ok(rusqlite::types::ToSqlOutput::from(self.0 as i64))
    }
}

#[cfg(feature = "sqlite")]
impl rusqlite::types::FromSql for Grade {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        let v: i64 = i64::column_result(value)?;
        Grade::new(v).map_err(|e| rusqlite::types::FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_valid_range() -> Fallible<()> {
        for v in 0..=5 {
            assert_eq!(Grade::new(v)?.value() as i64, v);
        }
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        for v in [-1, 6, 255, 256, i64::MIN, i64::MAX] {
            assert_eq!(
                Grade::new(v),
                Err(SchedulingError::InvalidGrade(v.to_string()))
            );
        }
    }

    #[test]
    fn test_is_pass() -> Fallible<()> {
        assert!(!Grade::new(0)?.is_pass());
        assert!(!Grade::new(2)?.is_pass());
        assert!(Grade::new(3)?.is_pass());
        assert!(Grade::new(5)?.is_pass());
        Ok(())
    }

    #[test]
    fn test_from_string() -> Fallible<()> {
        assert_eq!(Grade::try_from("4".to_string())?, Grade::new(4)?);
        assert_eq!(Grade::try_from(" 0 ".to_string())?, Grade::new(0)?);
        Ok(())
    }

    #[test]
    fn test_invalid_grade_string() {
        let invalid_strings = ["", "invalid", "3.5", "-1", "6"];
        for s in invalid_strings {
            assert!(Grade::try_from(s.to_string()).is_err());
        }
    }

    #[test]
    fn test_serialization_format() -> Fallible<()> {
        let grade = Grade::new(4)?;
        assert_eq!(serde_json::to_string(&grade)?, "4");
        let parsed: Grade = serde_json::from_str("2")?;
        assert_eq!(parsed, Grade::new(2)?);
        assert!(serde_json::from_str::<Grade>("9").is_err());
        Ok(())
    }
}
