//! GetTwinProfileHandler - Query handler for the 7-day emotion profile.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::foundation::UserId;
use crate::domain::twin::TwinProfile;
use crate::ports::{EmotionEventReader, EventReadError};

/// Days of history behind the twin profile.
const WINDOW_DAYS: i64 = 7;

/// Query for a user's twin profile.
#[derive(Debug, Clone)]
pub struct GetTwinProfileQuery {
    pub user_id: UserId,
}

/// None until the user has logged at least one emotion this week.
pub type GetTwinProfileResult = Option<TwinProfile>;

/// Builds the twin's emotional fingerprint from the trailing week.
pub struct GetTwinProfileHandler {
    reader: Arc<dyn EmotionEventReader>,
}

impl GetTwinProfileHandler {
    pub fn new(reader: Arc<dyn EmotionEventReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetTwinProfileQuery,
    ) -> Result<GetTwinProfileResult, EventReadError> {
        let since = Utc::now() - Duration::days(WINDOW_DAYS);
        let events = self.reader.events_since(&query.user_id, since).await?;
        Ok(TwinProfile::from_events(&events))
    }
}
