//! Resilience scoring over the trailing 7-day label sequence.

use chrono::{DateTime, Utc};

use crate::domain::emotion::{trailing_window, EmotionEvent};
use crate::domain::foundation::Emotion;

use super::{GrowthState, ResilienceMetrics};

/// Labels that count as positive for resilience.
///
/// Narrower than the forecast set: a joyful spike reads as excitement,
/// not recovered stability.
pub const POSITIVE_LABELS: [Emotion; 3] = [Emotion::Happy, Emotion::Calm, Emotion::Surprised];

/// Labels that count as negative for resilience.
pub const NEGATIVE_LABELS: [Emotion; 4] = [
    Emotion::Sad,
    Emotion::Angry,
    Emotion::Fear,
    Emotion::Stressed,
];

/// Minimum events in the trailing week before metrics are computed.
pub const MIN_SAMPLES: usize = 3;

const WINDOW_DAYS: i64 = 7;

/// Computes metrics over the trailing week, or None below the sample
/// minimum.
///
/// Callers that persist a weekly snapshot should only do so when this
/// returns Some: the baseline has no real window behind it.
pub fn compute_window(events: &[EmotionEvent], now: DateTime<Utc>) -> Option<ResilienceMetrics> {
    let window = trailing_window(events, now, WINDOW_DAYS);
    if window.len() < MIN_SAMPLES {
        return None;
    }

    let labels: Vec<Emotion> = window.iter().map(|e| e.emotion).collect();
    let total = labels.len() as f64;

    let positive = labels
        .iter()
        .filter(|l| POSITIVE_LABELS.contains(l))
        .count();
    let positive_ratio = positive as f64 / total;

    let changes = labels.windows(2).filter(|p| p[0] != p[1]).count();
    let volatility = changes as f64 / total;

    // Every negative moment counts in the denominator, including a trailing
    // one with no successor: an unanswered low is a missed recovery.
    let negatives = labels
        .iter()
        .filter(|l| NEGATIVE_LABELS.contains(l))
        .count();
    let recoveries = labels
        .windows(2)
        .filter(|p| NEGATIVE_LABELS.contains(&p[0]) && POSITIVE_LABELS.contains(&p[1]))
        .count();
    let recovery_speed = recoveries as f64 / negatives.max(1) as f64;

    let score =
        100.0 * (0.4 * positive_ratio + 0.3 * recovery_speed + 0.3 * (1.0 - volatility));

    Some(ResilienceMetrics {
        score,
        volatility,
        recovery_speed,
        positive_ratio,
        growth_state: GrowthState::from_score(score),
    })
}

/// Like [`compute_window`], falling back to the fixed baseline when the
/// window is too sparse.
pub fn compute(events: &[EmotionEvent], now: DateTime<Utc>) -> ResilienceMetrics {
    compute_window(events, now).unwrap_or_else(ResilienceMetrics::baseline)
}
