//! GetWeeklyTrendHandler - Query handler for the stored resilience trend.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::ports::{ResilienceStore, StoreError, WeeklyScore};

/// Stored weeks returned by the trend query.
const TREND_WEEKS: u32 = 4;

/// Query for a user's recent weekly resilience scores.
#[derive(Debug, Clone)]
pub struct GetWeeklyTrendQuery {
    pub user_id: UserId,
}

pub type GetWeeklyTrendResult = Vec<WeeklyScore>;

/// Reads the persisted weekly snapshots, oldest first.
pub struct GetWeeklyTrendHandler {
    store: Arc<dyn ResilienceStore>,
}

impl GetWeeklyTrendHandler {
    pub fn new(store: Arc<dyn ResilienceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetWeeklyTrendQuery,
    ) -> Result<GetWeeklyTrendResult, StoreError> {
        self.store.weekly_trend(&query.user_id, TREND_WEEKS).await
    }
}
