//! GetResilienceHandler - Query handler computing and snapshotting the
//! weekly resilience metrics.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::warn;

use crate::domain::foundation::{UserId, WeekKey};
use crate::domain::resilience::{self, ResilienceMetrics};
use crate::ports::{EmotionEventReader, EventReadError, ResilienceStore, StoreError};

/// Days of history behind the resilience window.
const WINDOW_DAYS: i64 = 7;

/// Query for a user's current resilience metrics.
#[derive(Debug, Clone)]
pub struct GetResilienceQuery {
    pub user_id: UserId,
}

/// Metrics plus the outcome of the weekly snapshot write.
///
/// The read path is never blocked by the write path: a failed upsert is
/// carried here instead of replacing the computed result.
#[derive(Debug)]
pub struct GetResilienceResult {
    pub metrics: ResilienceMetrics,
    pub persistence_error: Option<StoreError>,
}

/// Computes resilience metrics and upserts the (user, week) snapshot.
///
/// Below the sample minimum the fixed baseline is returned and nothing is
/// persisted: a baseline has no real window behind it.
pub struct GetResilienceHandler {
    reader: Arc<dyn EmotionEventReader>,
    store: Arc<dyn ResilienceStore>,
}

impl GetResilienceHandler {
    pub fn new(reader: Arc<dyn EmotionEventReader>, store: Arc<dyn ResilienceStore>) -> Self {
        Self { reader, store }
    }

    pub async fn handle(
        &self,
        query: GetResilienceQuery,
    ) -> Result<GetResilienceResult, EventReadError> {
        let now = Utc::now();
        let events = self
            .reader
            .events_since(&query.user_id, now - Duration::days(WINDOW_DAYS))
            .await?;

        let Some(metrics) = resilience::compute_window(&events, now) else {
            return Ok(GetResilienceResult {
                metrics: ResilienceMetrics::baseline(),
                persistence_error: None,
            });
        };

        let week = WeekKey::from_datetime(now);
        let persistence_error = match self.store.upsert_week(&query.user_id, week, &metrics).await
        {
            Ok(()) => None,
            Err(err) => {
                warn!(
                    user_id = %query.user_id,
                    week = %week,
                    error = %err,
                    "failed to persist weekly resilience snapshot"
                );
                Some(err)
            }
        };

        Ok(GetResilienceResult {
            metrics,
            persistence_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::EmotionEvent;
    use crate::domain::foundation::Emotion;
    use crate::domain::resilience::GrowthState;
    use crate::ports::WeeklyScore;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;

    struct MockReader {
        events: Vec<EmotionEvent>,
    }

    #[async_trait]
    impl EmotionEventReader for MockReader {
        async fn events_since(
            &self,
            _user_id: &UserId,
            _since: DateTime<Utc>,
        ) -> Result<Vec<EmotionEvent>, EventReadError> {
            Ok(self.events.clone())
        }
    }

    struct MockStore {
        upserts: Mutex<Vec<(WeekKey, ResilienceMetrics)>>,
        fail: bool,
    }

    impl MockStore {
        fn new(fail: bool) -> Self {
            Self {
                upserts: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl ResilienceStore for MockStore {
        async fn upsert_week(
            &self,
            _user_id: &UserId,
            week: WeekKey,
            metrics: &ResilienceMetrics,
        ) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Database("disk full".to_string()));
            }
            self.upserts.lock().unwrap().push((week, *metrics));
            Ok(())
        }

        async fn weekly_trend(
            &self,
            _user_id: &UserId,
            _weeks: u32,
        ) -> Result<Vec<WeeklyScore>, StoreError> {
            Ok(Vec::new())
        }
    }

    fn query() -> GetResilienceQuery {
        GetResilienceQuery {
            user_id: UserId::new("user-1").unwrap(),
        }
    }

    fn recent_events(labels: &[Emotion]) -> Vec<EmotionEvent> {
        let now = Utc::now();
        labels
            .iter()
            .enumerate()
            .map(|(i, &emotion)| {
                EmotionEvent::new(emotion, 0.9, now - chrono::Duration::hours(i as i64 + 1))
            })
            .collect()
    }

    #[tokio::test]
    async fn computes_and_persists_a_real_window() {
        let store = Arc::new(MockStore::new(false));
        let handler = GetResilienceHandler::new(
            Arc::new(MockReader {
                events: recent_events(&[Emotion::Happy, Emotion::Calm, Emotion::Happy]),
            }),
            store.clone(),
        );

        let result = handler.handle(query()).await.unwrap();

        assert!(result.persistence_error.is_none());
        assert_eq!(result.metrics.positive_ratio, 1.0);
        let upserts = store.upserts.lock().unwrap();
        assert_eq!(upserts.len(), 1);
        assert_eq!(upserts[0].1, result.metrics);
    }

    #[tokio::test]
    async fn empty_history_returns_baseline_without_persisting() {
        let store = Arc::new(MockStore::new(false));
        let handler =
            GetResilienceHandler::new(Arc::new(MockReader { events: vec![] }), store.clone());

        let result = handler.handle(query()).await.unwrap();

        assert_eq!(result.metrics.score, 30.0);
        assert_eq!(result.metrics.growth_state, GrowthState::Sprout);
        assert!(result.persistence_error.is_none());
        assert!(store.upserts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn two_events_still_fall_back_to_baseline() {
        let store = Arc::new(MockStore::new(false));
        let handler = GetResilienceHandler::new(
            Arc::new(MockReader {
                events: recent_events(&[Emotion::Happy, Emotion::Sad]),
            }),
            store.clone(),
        );

        let result = handler.handle(query()).await.unwrap();

        assert_eq!(result.metrics, ResilienceMetrics::baseline());
        assert!(store.upserts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_upsert_still_returns_the_metrics() {
        let handler = GetResilienceHandler::new(
            Arc::new(MockReader {
                events: recent_events(&[Emotion::Happy, Emotion::Calm, Emotion::Happy]),
            }),
            Arc::new(MockStore::new(true)),
        );

        let result = handler.handle(query()).await.unwrap();

        assert_eq!(result.metrics.positive_ratio, 1.0);
        assert!(matches!(
            result.persistence_error,
            Some(StoreError::Database(_))
        ));
    }
}
