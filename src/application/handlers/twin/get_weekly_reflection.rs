//! GetWeeklyReflectionHandler - Query handler for the weekly mood summary.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::foundation::UserId;
use crate::domain::twin::weekly_reflection;
use crate::ports::{EmotionEventReader, EventReadError};

/// Days of history the reflection covers.
const WINDOW_DAYS: i64 = 7;

/// Query for a user's weekly reflection paragraph.
#[derive(Debug, Clone)]
pub struct GetWeeklyReflectionQuery {
    pub user_id: UserId,
}

pub type GetWeeklyReflectionResult = String;

/// Composes the narrative weekly summary from the trailing week.
pub struct GetWeeklyReflectionHandler {
    reader: Arc<dyn EmotionEventReader>,
}

impl GetWeeklyReflectionHandler {
    pub fn new(reader: Arc<dyn EmotionEventReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetWeeklyReflectionQuery,
    ) -> Result<GetWeeklyReflectionResult, EventReadError> {
        let since = Utc::now() - Duration::days(WINDOW_DAYS);
        let events = self.reader.events_since(&query.user_id, since).await?;
        Ok(weekly_reflection(&events))
    }
}
