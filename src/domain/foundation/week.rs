//! ISO year-week value object used to key weekly snapshots.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// An ISO 8601 year-week, rendered as `YYYY-Www` (e.g. `2026-W31`).
///
/// The textual form sorts chronologically, which the weekly-trend query
/// relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekKey {
    year: i32,
    week: u32,
}

impl WeekKey {
    /// Creates a WeekKey, returning error for an impossible week number.
    pub fn new(year: i32, week: u32) -> Result<Self, ValidationError> {
        if week == 0 || week > 53 {
            return Err(ValidationError::out_of_range("week", 1.0, 53.0, week as f64));
        }
        Ok(Self { year, week })
    }

    /// Derives the ISO week containing the given instant.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        let iso = at.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Returns the ISO week-based year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the ISO week number (1-53).
    pub fn week(&self) -> u32 {
        self.week
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, week) = s
            .split_once("-W")
            .ok_or_else(|| ValidationError::invalid_format("week", "expected YYYY-Www"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| ValidationError::invalid_format("week", "year is not a number"))?;
        let week: u32 = week
            .parse()
            .map_err(|_| ValidationError::invalid_format("week", "week is not a number"))?;
        Self::new(year, week)
    }
}

impl From<WeekKey> for String {
    fn from(key: WeekKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for WeekKey {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
