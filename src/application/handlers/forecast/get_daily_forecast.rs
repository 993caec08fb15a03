//! GetDailyForecastHandler - Query handler for the next-day forecast.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::forecast::{forecast_next_day, ForecastResult};
use crate::domain::foundation::UserId;
use crate::ports::{EmotionEventReader, EventReadError};

/// Days of history behind the next-day forecast.
const WINDOW_DAYS: i64 = 7;

/// Query for tomorrow's mood forecast.
#[derive(Debug, Clone)]
pub struct GetDailyForecastQuery {
    pub user_id: UserId,
}

pub type GetDailyForecastResult = ForecastResult;

/// Produces a single-day forecast from the trailing week.
pub struct GetDailyForecastHandler {
    reader: Arc<dyn EmotionEventReader>,
}

impl GetDailyForecastHandler {
    pub fn new(reader: Arc<dyn EmotionEventReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetDailyForecastQuery,
    ) -> Result<GetDailyForecastResult, EventReadError> {
        let now = Utc::now();
        let events = self
            .reader
            .events_since(&query.user_id, now - Duration::days(WINDOW_DAYS))
            .await?;
        Ok(ForecastResult::single(forecast_next_day(&events, now)))
    }
}
