//! GetThreeDayForecastHandler - Query handler for the 3-day forecast.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::forecast::{forecast_three_day, ForecastResult};
use crate::domain::foundation::UserId;
use crate::ports::{EmotionEventReader, EventReadError};

/// Days of history behind the 3-day forecast.
const WINDOW_DAYS: i64 = 14;

/// Query for the 3-day mood forecast.
#[derive(Debug, Clone)]
pub struct GetThreeDayForecastQuery {
    pub user_id: UserId,
}

pub type GetThreeDayForecastResult = ForecastResult;

/// Produces today/tomorrow/day-after forecasts from the trailing two weeks.
pub struct GetThreeDayForecastHandler {
    reader: Arc<dyn EmotionEventReader>,
}

impl GetThreeDayForecastHandler {
    pub fn new(reader: Arc<dyn EmotionEventReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetThreeDayForecastQuery,
    ) -> Result<GetThreeDayForecastResult, EventReadError> {
        let now = Utc::now();
        let events = self
            .reader
            .events_since(&query.user_id, now - Duration::days(WINDOW_DAYS))
            .await?;
        Ok(forecast_three_day(&events, now))
    }
}
