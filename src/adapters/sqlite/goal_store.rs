//! SQLite implementation of the weekly goal log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::foundation::{GoalId, UserId, WeekKey};
use crate::domain::resilience::WeeklyGoal;
use crate::ports::{GoalStore, StoreError};

/// Append-only goal log keyed by generated id.
pub struct SqliteGoalStore {
    pool: SqlitePool,
}

impl SqliteGoalStore {
    /// Creates a store over the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct GoalRow {
    id: String,
    user_id: String,
    week: String,
    goal_text: String,
    completed: bool,
    created_at: String,
}

impl TryFrom<GoalRow> for WeeklyGoal {
    type Error = StoreError;

    fn try_from(row: GoalRow) -> Result<Self, Self::Error> {
        let id = row
            .id
            .parse::<GoalId>()
            .map_err(|e| StoreError::Corrupt(format!("bad goal id '{}': {}", row.id, e)))?;
        let user_id = UserId::new(row.user_id)
            .map_err(|e| StoreError::Corrupt(format!("bad user id: {}", e)))?;
        let week = row
            .week
            .parse::<WeekKey>()
            .map_err(|e| StoreError::Corrupt(format!("bad week key '{}': {}", row.week, e)))?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                StoreError::Corrupt(format!("bad created_at '{}': {}", row.created_at, e))
            })?;

        Ok(WeeklyGoal {
            id,
            user_id,
            week,
            text: row.goal_text,
            completed: row.completed,
            created_at,
        })
    }
}

#[async_trait]
impl GoalStore for SqliteGoalStore {
    async fn append(&self, goal: &WeeklyGoal) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO weekly_goals (id, user_id, week, goal_text, completed, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(goal.id.to_string())
        .bind(goal.user_id.as_str())
        .bind(goal.week.to_string())
        .bind(&goal.text)
        .bind(goal.completed)
        .bind(goal.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn latest_for_week(
        &self,
        user_id: &UserId,
        week: WeekKey,
    ) -> Result<Option<WeeklyGoal>, StoreError> {
        // rowid breaks ties between goals generated in the same instant.
        let row: Option<GoalRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, week, goal_text, completed, created_at
            FROM weekly_goals
            WHERE user_id = ?1 AND week = ?2
            ORDER BY created_at DESC, rowid DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .bind(week.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(WeeklyGoal::try_from).transpose()
    }

    async fn set_completed(&self, id: GoalId, completed: bool) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE weekly_goals SET completed = ?2 WHERE id = ?1")
            .bind(id.to_string())
            .bind(completed)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("goal {}", id)));
        }

        Ok(())
    }
}
