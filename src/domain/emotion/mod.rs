//! Emotion events, valence scoring, and temporal bucketing.

mod buckets;
mod event;
mod scorer;

pub use buckets::{day_name, mean, TemporalBuckets, TimeOfDay, DAYS};
pub use event::{trailing_window, EmotionEvent, ScoredEvent};
pub use scorer::{base_valence, score_events, valence};
