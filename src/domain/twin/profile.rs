//! The 7-day emotional fingerprint behind the twin's responses.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::emotion::EmotionEvent;
use crate::domain::foundation::Emotion;

/// Distribution of labels over a user's trailing week.
///
/// Percentages are kept at full precision so they always sum to 100 up to
/// float error; rounding for display belongs to the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinProfile {
    pub dominant_emotion: Emotion,
    pub distribution: BTreeMap<Emotion, f64>,
    pub total_logs: usize,
    pub most_recent_emotion: Emotion,
}

impl TwinProfile {
    /// Builds a profile from a chronological event window, or None when
    /// the window is empty.
    pub fn from_events(events: &[EmotionEvent]) -> Option<Self> {
        let last = events.last()?;
        let total = events.len();

        let mut counts: BTreeMap<Emotion, usize> = BTreeMap::new();
        for event in events {
            *counts.entry(event.emotion).or_insert(0) += 1;
        }

        let distribution = counts
            .iter()
            .map(|(&emotion, &count)| (emotion, count as f64 / total as f64 * 100.0))
            .collect();

        Some(Self {
            dominant_emotion: dominant_emotion(events.iter().map(|e| e.emotion))
                .unwrap_or(Emotion::Neutral),
            distribution,
            total_logs: total,
            most_recent_emotion: last.emotion,
        })
    }

    /// Percentage share of a label, 0 when absent.
    pub fn share(&self, emotion: Emotion) -> f64 {
        self.distribution.get(&emotion).copied().unwrap_or(0.0)
    }
}

/// Most frequent label; ties break to the label seen first.
pub fn dominant_emotion(emotions: impl Iterator<Item = Emotion>) -> Option<Emotion> {
    let mut seen: Vec<(Emotion, usize)> = Vec::new();
    for emotion in emotions {
        match seen.iter_mut().find(|(e, _)| *e == emotion) {
            Some((_, count)) => *count += 1,
            None => seen.push((emotion, 1)),
        }
    }

    seen.into_iter()
        .fold(None, |best: Option<(Emotion, usize)>, (emotion, count)| {
            match best {
                Some((_, n)) if count <= n => best,
                _ => Some((emotion, count)),
            }
        })
        .map(|(emotion, _)| emotion)
}
