//! Feature extraction over a trailing event window.

use crate::domain::emotion::EmotionEvent;
use crate::domain::foundation::Emotion;

/// Labels that count as positive for forecasting purposes.
pub const POSITIVE_LABELS: [Emotion; 4] = [
    Emotion::Happy,
    Emotion::Calm,
    Emotion::Surprised,
    Emotion::Joyful,
];

/// Minimum events before any forecast is attempted.
pub const MIN_SAMPLES: usize = 3;

/// Aggregate features the forecast rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionFeatures {
    /// Fraction of events with a positive label.
    pub positive_ratio: f64,
    /// Fraction of chronologically adjacent label changes.
    pub volatility: f64,
    /// Most frequent label; ties break to the first occurrence.
    pub dominant: Emotion,
    /// Number of events in the window.
    pub total: usize,
}

impl EmotionFeatures {
    /// Extracts features from a chronological window, or None below the
    /// sample minimum.
    pub fn extract(events: &[EmotionEvent]) -> Option<Self> {
        if events.len() < MIN_SAMPLES {
            return None;
        }

        let total = events.len();
        let positive = events
            .iter()
            .filter(|e| POSITIVE_LABELS.contains(&e.emotion))
            .count();

        let changes = events
            .windows(2)
            .filter(|pair| pair[0].emotion != pair[1].emotion)
            .count();

        Some(Self {
            positive_ratio: positive as f64 / total as f64,
            volatility: changes as f64 / total as f64,
            dominant: dominant_label(events),
            total,
        })
    }
}

/// Mode label of the window; ties break to the label seen first.
fn dominant_label(events: &[EmotionEvent]) -> Emotion {
    let mut seen: Vec<(Emotion, usize)> = Vec::new();
    for event in events {
        match seen.iter_mut().find(|(emotion, _)| *emotion == event.emotion) {
            Some((_, count)) => *count += 1,
            None => seen.push((event.emotion, 1)),
        }
    }

    let mut best = (Emotion::Neutral, 0);
    for (emotion, count) in seen {
        if count > best.1 {
            best = (emotion, count);
        }
    }
    best.0
}
