//! GetTodayOutlookHandler - Query handler for the same-weekday outlook.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::foundation::UserId;
use crate::domain::patterns::{today_outlook, TodayOutlook};
use crate::ports::{EmotionEventReader, EventReadError};

/// Days of history behind the outlook.
const WINDOW_DAYS: i64 = 14;

/// Query for today's outlook.
#[derive(Debug, Clone)]
pub struct GetTodayOutlookQuery {
    pub user_id: UserId,
}

pub type GetTodayOutlookResult = TodayOutlook;

/// Predicts today's mood from past events on the same weekday.
pub struct GetTodayOutlookHandler {
    reader: Arc<dyn EmotionEventReader>,
}

impl GetTodayOutlookHandler {
    pub fn new(reader: Arc<dyn EmotionEventReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetTodayOutlookQuery,
    ) -> Result<GetTodayOutlookResult, EventReadError> {
        let now = Utc::now();
        let events = self
            .reader
            .events_since(&query.user_id, now - Duration::days(WINDOW_DAYS))
            .await?;
        Ok(today_outlook(&events, now))
    }
}
