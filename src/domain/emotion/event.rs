//! Emotion observations as read from the event store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Emotion;

/// A single timestamped emotion observation.
///
/// Events are owned by the event store; the analytics core only reads them.
/// Confidence outside [0, 1] is clamped at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionEvent {
    pub emotion: Emotion,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl EmotionEvent {
    /// Creates an event, clamping confidence into [0, 1].
    pub fn new(emotion: Emotion, confidence: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            emotion,
            confidence: confidence.clamp(0.0, 1.0),
            timestamp,
        }
    }
}

/// Events within the trailing `days`-day window ending at `now`.
///
/// The cutoff is exclusive: an event exactly `days` days old is outside
/// the window.
pub fn trailing_window(
    events: &[EmotionEvent],
    now: DateTime<Utc>,
    days: i64,
) -> Vec<EmotionEvent> {
    let cutoff = now - chrono::Duration::days(days);
    events
        .iter()
        .filter(|e| e.timestamp > cutoff)
        .copied()
        .collect()
}

/// An event paired with its derived valence score.
///
/// Recomputed on every call; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEvent {
    pub emotion: Emotion,
    pub valence: f64,
    pub timestamp: DateTime<Utc>,
}
