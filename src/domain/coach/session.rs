//! Explicit per-session coaching state.
//!
//! The caller owns one of these per active work session and passes it into
//! every check-in; the coach never keeps process-wide state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutable state of one work session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachSession {
    pub work_session_start: DateTime<Utc>,
    pub last_break_at: DateTime<Utc>,
    pub stress_count: u32,
    pub fatigue_count: u32,
    /// Rotation cursor for suggestion libraries; advances on every draw so
    /// repeated check-ins cycle through the material deterministically.
    pub suggestion_cursor: u32,
}

impl CoachSession {
    /// Starts a fresh session at the given instant.
    pub fn started_at(now: DateTime<Utc>) -> Self {
        Self {
            work_session_start: now,
            last_break_at: now,
            stress_count: 0,
            fatigue_count: 0,
            suggestion_cursor: 0,
        }
    }

    /// Resets the session clocks and counters, keeping the rotation cursor.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.work_session_start = now;
        self.last_break_at = now;
        self.stress_count = 0;
        self.fatigue_count = 0;
    }

    /// Whole minutes since the last registered break.
    pub fn minutes_since_break(&self, now: DateTime<Utc>) -> i64 {
        (now - self.last_break_at).num_minutes()
    }

    /// Whole minutes since the session started.
    pub fn work_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.work_session_start).num_minutes()
    }

    /// Draws the next index into a library of `len` entries.
    pub(super) fn next_pick(&mut self, len: usize) -> usize {
        let idx = self.suggestion_cursor as usize % len.max(1);
        self.suggestion_cursor = self.suggestion_cursor.wrapping_add(1);
        idx
    }
}
