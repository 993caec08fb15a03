//! SQLite implementation of the resilience snapshot store.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::foundation::{UserId, WeekKey};
use crate::domain::resilience::ResilienceMetrics;
use crate::ports::{ResilienceStore, StoreError, WeeklyScore};

/// Persists one resilience snapshot per (user, ISO week).
pub struct SqliteResilienceStore {
    pool: SqlitePool,
}

impl SqliteResilienceStore {
    /// Creates a store over the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TrendRow {
    week: String,
    score: f64,
}

impl TryFrom<TrendRow> for WeeklyScore {
    type Error = StoreError;

    fn try_from(row: TrendRow) -> Result<Self, Self::Error> {
        let week = row
            .week
            .parse::<WeekKey>()
            .map_err(|e| StoreError::Corrupt(format!("bad week key '{}': {}", row.week, e)))?;
        Ok(WeeklyScore {
            week,
            score: row.score,
        })
    }
}

#[async_trait]
impl ResilienceStore for SqliteResilienceStore {
    async fn upsert_week(
        &self,
        user_id: &UserId,
        week: WeekKey,
        metrics: &ResilienceMetrics,
    ) -> Result<(), StoreError> {
        // Single-statement replace: the snapshot is derived, so concurrent
        // writers racing last-write-wins is acceptable as long as no
        // read-modify-write is involved.
        sqlx::query(
            r#"
            INSERT INTO resilience_metrics
                (user_id, week, score, volatility, recovery_speed, positive_ratio, growth_state)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT (user_id, week) DO UPDATE SET
                score = excluded.score,
                volatility = excluded.volatility,
                recovery_speed = excluded.recovery_speed,
                positive_ratio = excluded.positive_ratio,
                growth_state = excluded.growth_state
            "#,
        )
        .bind(user_id.as_str())
        .bind(week.to_string())
        .bind(metrics.score)
        .bind(metrics.volatility)
        .bind(metrics.recovery_speed)
        .bind(metrics.positive_ratio)
        .bind(metrics.growth_state.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn weekly_trend(
        &self,
        user_id: &UserId,
        weeks: u32,
    ) -> Result<Vec<WeeklyScore>, StoreError> {
        // The week key's textual form sorts chronologically.
        let rows: Vec<TrendRow> = sqlx::query_as(
            r#"
            SELECT week, score
            FROM resilience_metrics
            WHERE user_id = ?1
            ORDER BY week DESC
            LIMIT ?2
            "#,
        )
        .bind(user_id.as_str())
        .bind(weeks)
        .fetch_all(&self.pool)
        .await?;

        let mut trend: Vec<WeeklyScore> = rows
            .into_iter()
            .map(WeeklyScore::try_from)
            .collect::<Result<_, _>>()?;
        trend.reverse();
        Ok(trend)
    }
}
