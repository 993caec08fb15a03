//! TwinResponseHandler - Query handler for the twin's contextual message.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::foundation::UserId;
use crate::domain::twin::{twin_response, TwinProfile, TwinResponse};
use crate::ports::{EmotionEventReader, EventReadError};

/// Days of history behind the twin's context.
const WINDOW_DAYS: i64 = 7;

/// Query for the twin's contextual response.
#[derive(Debug, Clone)]
pub struct TwinResponseQuery {
    pub user_id: UserId,
}

pub type TwinResponseResult = TwinResponse;

/// Picks the twin's message from the trailing week's profile.
///
/// A user with no events this week gets the still-learning message, never
/// an error.
pub struct TwinResponseHandler {
    reader: Arc<dyn EmotionEventReader>,
}

impl TwinResponseHandler {
    pub fn new(reader: Arc<dyn EmotionEventReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: TwinResponseQuery,
    ) -> Result<TwinResponseResult, EventReadError> {
        let since = Utc::now() - Duration::days(WINDOW_DAYS);
        let events = self.reader.events_since(&query.user_id, since).await?;
        let profile = TwinProfile::from_events(&events);
        Ok(twin_response(profile.as_ref()))
    }
}
