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

use chrono::Datelike;
use chrono::Duration;
use chrono::NaiveDateTime;
use chrono::SubsecRound;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::types::date::Date;

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A timestamp without a timezone and microsecond precision.
///
/// Within years 0000 to 9999 the string form is fixed-width, so
/// lexicographic order on the serialized value is chronological order. The
/// store relies on this for range queries, and refuses timestamps outside
/// that range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(ndt: NaiveDateTime) -> Self {
        Self(ndt.trunc_subsecs(6))
    }

    /// Converts a timestamp into a `NaiveDateTime`.
    pub fn into_inner(self) -> NaiveDateTime {
        self.0
    }

    /// The current timestamp in the user's local time.
    #[cfg(feature = "clock")]
    pub fn now() -> Self {
        Self(chrono::Local::now().naive_local().trunc_subsecs(6))
    }

    /// The date component of this timestamp.
    pub fn date(self) -> Date {
        Date::new(self.0.date())
    }

    /// Whether the year has exactly four digits, i.e. the string form is
    /// fixed-width.
    pub fn is_storable(self) -> bool {
        (0..=9999).contains(&self.0.year())
    }

    /// This timestamp moved forward by a whole number of days. Returns `None`
    /// if the result is past the year 9999.
    pub fn plus_days(self, days: i64) -> Option<Self> {
        let delta = Duration::try_days(days)?;
        self.0
            .checked_add_signed(delta)
            .map(Self)
            .filter(|ts| ts.is_storable())
    }

    /// This timestamp moved back by a number of microseconds.
    pub fn minus_micros(self, micros: i64) -> Option<Self> {
        self.0
            .checked_sub_signed(Duration::microseconds(micros))
            .map(Self)
            .filter(|ts| ts.is_storable())
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl TryFrom<String> for Timestamp {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let ndt = NaiveDateTime::parse_from_str(&value, FORMAT)
            .map_err(|_| ErrorReport::new(format!("Failed to parse timestamp: '{value}'.")))?;
        let ts = Timestamp::new(ndt);
        if !ts.is_storable() {
            return Err(ErrorReport::new(format!(
                "Timestamp out of range: '{value}'."
            )));
        }
        Ok(ts)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> String {
        ts.to_string()
    }
}

#[cfg(feature = "sqlite")]
impl rusqlite::types::ToSql for Timestamp {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        if !self.is_storable() {
            let err = ErrorReport::new(format!("Timestamp out of range: '{self}'."));
            return Err(rusqlite::Error::ToSqlConversionFailure(Box::new(err)));
        }
        Ok(rusqlite::types::ToSqlOutput::from(self.to_string()))
    }
}

#[cfg(feature = "sqlite")]
impl rusqlite::types::FromSql for Timestamp {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        let s: String = String::column_result(value)?;
        Timestamp::try_from(s).map_err(|e| rusqlite::types::FromSqlError::Other(Box::new(e)))
    }
}
