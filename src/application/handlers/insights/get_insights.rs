//! GetInsightsHandler - Query handler for pattern analysis.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::foundation::UserId;
use crate::domain::patterns::{self, PatternInsight};
use crate::ports::{EmotionEventReader, EventReadError};

/// Days of history fed into pattern analysis.
const WINDOW_DAYS: i64 = 14;

/// Query for a user's pattern insights.
#[derive(Debug, Clone)]
pub struct GetInsightsQuery {
    pub user_id: UserId,
}

pub type GetInsightsResult = PatternInsight;

/// Runs the pattern rules over a user's recent events.
pub struct GetInsightsHandler {
    reader: Arc<dyn EmotionEventReader>,
}

impl GetInsightsHandler {
    pub fn new(reader: Arc<dyn EmotionEventReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetInsightsQuery,
    ) -> Result<GetInsightsResult, EventReadError> {
        let since = Utc::now() - Duration::days(WINDOW_DAYS);
        let events = self.reader.events_since(&query.user_id, since).await?;
        Ok(patterns::analyze(&events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::EmotionEvent;
    use crate::domain::foundation::{Emotion, RiskLevel};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    struct MockReader {
        events: Vec<EmotionEvent>,
        fail: bool,
    }

    #[async_trait]
    impl EmotionEventReader for MockReader {
        async fn events_since(
            &self,
            _user_id: &UserId,
            _since: DateTime<Utc>,
        ) -> Result<Vec<EmotionEvent>, EventReadError> {
            if self.fail {
                return Err(EventReadError::Database("simulated failure".to_string()));
            }
            Ok(self.events.clone())
        }
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn empty_history_yields_a_quiet_insight() {
        let handler = GetInsightsHandler::new(Arc::new(MockReader {
            events: vec![],
            fail: false,
        }));

        let insight = handler.handle(GetInsightsQuery { user_id: user() }).await.unwrap();

        assert!(insight.warnings.is_empty());
        assert_eq!(insight.risk_level, RiskLevel::Low);
    }

    #[tokio::test]
    async fn low_mood_history_produces_warnings() {
        let now = Utc::now();
        let events: Vec<_> = (0..5)
            .map(|i| {
                EmotionEvent::new(Emotion::Sad, 0.9, now - chrono::Duration::days(i))
            })
            .collect();
        let handler = GetInsightsHandler::new(Arc::new(MockReader { events, fail: false }));

        let insight = handler.handle(GetInsightsQuery { user_id: user() }).await.unwrap();

        assert!(!insight.warnings.is_empty());
        assert_eq!(insight.risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn reader_failures_propagate() {
        let handler = GetInsightsHandler::new(Arc::new(MockReader {
            events: vec![],
            fail: true,
        }));

        let result = handler.handle(GetInsightsQuery { user_id: user() }).await;
        assert!(matches!(result, Err(EventReadError::Database(_))));
    }
}
