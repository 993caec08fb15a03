//! GetWeeklyOutlookHandler - Query handler for the week-ahead outlook.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::foundation::UserId;
use crate::domain::patterns::{weekly_outlook, WeeklyOutlook};
use crate::ports::{EmotionEventReader, EventReadError};

/// Days of history behind the outlook.
const WINDOW_DAYS: i64 = 14;

/// Query for a user's weekly outlook.
#[derive(Debug, Clone)]
pub struct GetWeeklyOutlookQuery {
    pub user_id: UserId,
}

pub type GetWeeklyOutlookResult = WeeklyOutlook;

/// Classifies upcoming weekdays from historical weekday moods.
pub struct GetWeeklyOutlookHandler {
    reader: Arc<dyn EmotionEventReader>,
}

impl GetWeeklyOutlookHandler {
    pub fn new(reader: Arc<dyn EmotionEventReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetWeeklyOutlookQuery,
    ) -> Result<GetWeeklyOutlookResult, EventReadError> {
        let since = Utc::now() - Duration::days(WINDOW_DAYS);
        let events = self.reader.events_since(&query.user_id, since).await?;
        Ok(weekly_outlook(&events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::EmotionEvent;
    use crate::domain::foundation::Emotion;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

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

    #[tokio::test]
    async fn outlook_reflects_low_weekdays() {
        let now = Utc::now();
        let handler = GetWeeklyOutlookHandler::new(Arc::new(MockReader {
            events: vec![EmotionEvent::new(Emotion::Sad, 0.9, now)],
        }));

        let outlook = handler
            .handle(GetWeeklyOutlookQuery {
                user_id: UserId::new("user-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(outlook.watch_days.len(), 1);
        assert!(outlook.summary.contains("Watch out for"));
    }
}
