//! GenerateWeeklyGoalHandler - Command handler deriving this week's goal
//! from the resilience metrics.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::warn;

use crate::domain::foundation::{UserId, WeekKey};
use crate::domain::resilience::{self, WeeklyGoal};
use crate::ports::{EmotionEventReader, EventReadError, GoalStore, StoreError};

/// Days of history behind the metrics the goal is derived from.
const WINDOW_DAYS: i64 = 7;

/// Command to generate a new weekly goal for a user.
#[derive(Debug, Clone)]
pub struct GenerateWeeklyGoalCommand {
    pub user_id: UserId,
}

/// The generated goal plus the outcome of the append.
///
/// The goal text is derived before the write happens, so a failed append
/// still returns what would have been logged.
#[derive(Debug)]
pub struct GenerateWeeklyGoalResult {
    pub goal: WeeklyGoal,
    pub persistence_error: Option<StoreError>,
}

/// Derives one actionable goal from the current resilience metrics and
/// appends it to the goal log.
///
/// The log is append-only: calling this twice in one week produces two
/// rows, and consumers display the latest per (user, week).
pub struct GenerateWeeklyGoalHandler {
    reader: Arc<dyn EmotionEventReader>,
    store: Arc<dyn GoalStore>,
}

impl GenerateWeeklyGoalHandler {
    pub fn new(reader: Arc<dyn EmotionEventReader>, store: Arc<dyn GoalStore>) -> Self {
        Self { reader, store }
    }

    pub async fn handle(
        &self,
        command: GenerateWeeklyGoalCommand,
    ) -> Result<GenerateWeeklyGoalResult, EventReadError> {
        let now = Utc::now();
        let events = self
            .reader
            .events_since(&command.user_id, now - Duration::days(WINDOW_DAYS))
            .await?;

        // Sparse weeks fall back to the baseline metrics; the goal cascade
        // still produces a sensible starter goal from those.
        let metrics = resilience::compute(&events, now);
        let week = WeekKey::from_datetime(now);
        let goal = WeeklyGoal::generate(command.user_id.clone(), week, &metrics, now);

        let persistence_error = match self.store.append(&goal).await {
            Ok(()) => None,
            Err(err) => {
                warn!(
                    user_id = %command.user_id,
                    week = %week,
                    error = %err,
                    "failed to append weekly goal"
                );
                Some(err)
            }
        };

        Ok(GenerateWeeklyGoalResult {
            goal,
            persistence_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::EmotionEvent;
    use crate::domain::foundation::{Emotion, GoalId};
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

    struct MockGoalStore {
        appended: Mutex<Vec<WeeklyGoal>>,
        fail: bool,
    }

    impl MockGoalStore {
        fn new(fail: bool) -> Self {
            Self {
                appended: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl GoalStore for MockGoalStore {
        async fn append(&self, goal: &WeeklyGoal) -> Result<(), StoreError> {
            if self.fail {
                return Err(StoreError::Database("disk full".to_string()));
            }
            self.appended.lock().unwrap().push(goal.clone());
            Ok(())
        }

        async fn latest_for_week(
            &self,
            _user_id: &UserId,
            _week: WeekKey,
        ) -> Result<Option<WeeklyGoal>, StoreError> {
            Ok(self.appended.lock().unwrap().last().cloned())
        }

        async fn set_completed(&self, _id: GoalId, _completed: bool) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn command() -> GenerateWeeklyGoalCommand {
        GenerateWeeklyGoalCommand {
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
    async fn positive_week_gets_the_celebration_goal() {
        let store = Arc::new(MockGoalStore::new(false));
        let handler = GenerateWeeklyGoalHandler::new(
            Arc::new(MockReader {
                events: recent_events(&[Emotion::Happy, Emotion::Calm, Emotion::Happy]),
            }),
            store.clone(),
        );

        let result = handler.handle(command()).await.unwrap();

        assert!(result.goal.text.contains("positive streak"));
        assert!(result.persistence_error.is_none());
        assert_eq!(store.appended.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_history_still_generates_from_the_baseline() {
        let store = Arc::new(MockGoalStore::new(false));
        let handler =
            GenerateWeeklyGoalHandler::new(Arc::new(MockReader { events: vec![] }), store.clone());

        let result = handler.handle(command()).await.unwrap();

        // Baseline score 30 lands on the breathing-basics rule.
        assert!(result.goal.text.contains("3 deep breaths"));
        assert!(!result.goal.completed);
        assert_eq!(store.appended.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn repeated_calls_append_distinct_rows() {
        let store = Arc::new(MockGoalStore::new(false));
        let handler =
            GenerateWeeklyGoalHandler::new(Arc::new(MockReader { events: vec![] }), store.clone());

        let first = handler.handle(command()).await.unwrap();
        let second = handler.handle(command()).await.unwrap();

        assert_ne!(first.goal.id, second.goal.id);
        assert_eq!(store.appended.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn failed_append_still_returns_the_goal() {
        let handler = GenerateWeeklyGoalHandler::new(
            Arc::new(MockReader { events: vec![] }),
            Arc::new(MockGoalStore::new(true)),
        );

        let result = handler.handle(command()).await.unwrap();

        assert!(!result.goal.text.is_empty());
        assert!(matches!(
            result.persistence_error,
            Some(StoreError::Database(_))
        ));
    }
}
