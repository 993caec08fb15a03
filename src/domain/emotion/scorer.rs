//! Valence scoring - maps (label, confidence) to a 0-5 mood proxy.

use crate::domain::foundation::Emotion;

use super::{EmotionEvent, ScoredEvent};

/// Base valence per label on the 0-5 scale.
///
/// Positive labels sit at 4-5, neutral ones at 3, negative ones at 1-2.
pub fn base_valence(emotion: Emotion) -> f64 {
    match emotion {
        Emotion::Happy | Emotion::Joyful => 5.0,
        Emotion::Excited => 4.0,
        Emotion::Neutral | Emotion::Calm | Emotion::Surprised => 3.0,
        Emotion::Angry | Emotion::Anxious | Emotion::Stressed | Emotion::Tired => 2.0,
        Emotion::Sad | Emotion::Fear => 1.0,
    }
}

/// Computes the confidence-weighted valence for one observation.
///
/// Total function: confidence is clamped into [0, 1], so the result is
/// always within [0, 5] and non-decreasing in confidence for a fixed label.
pub fn valence(emotion: Emotion, confidence: f64) -> f64 {
    base_valence(emotion) * confidence.clamp(0.0, 1.0)
}

/// Scores a slice of events, preserving order.
pub fn score_events(events: &[EmotionEvent]) -> Vec<ScoredEvent> {
    events
        .iter()
        .map(|e| ScoredEvent {
            emotion: e.emotion,
            valence: valence(e.emotion, e.confidence),
            timestamp: e.timestamp,
        })
        .collect()
}
