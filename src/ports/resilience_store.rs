use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{UserId, WeekKey};
use crate::domain::resilience::ResilienceMetrics;

use super::StoreError;

/// One point of a user's weekly resilience trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyScore {
    pub week: WeekKey,
    pub score: f64,
}

/// Persistence port for weekly resilience snapshots.
#[async_trait]
pub trait ResilienceStore: Send + Sync {
    /// Stores the metrics for (user, week), replacing any earlier snapshot
    /// for the same week in a single atomic statement. Latest write wins.
    async fn upsert_week(
        &self,
        user_id: &UserId,
        week: WeekKey,
        metrics: &ResilienceMetrics,
    ) -> Result<(), StoreError>;

    /// The user's stored scores, oldest first, limited to the most recent
    /// `weeks` entries.
    async fn weekly_trend(
        &self,
        user_id: &UserId,
        weeks: u32,
    ) -> Result<Vec<WeeklyScore>, StoreError>;
}
