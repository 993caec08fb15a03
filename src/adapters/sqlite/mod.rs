//! SQLite adapters for the persistence ports.
//!
//! This module owns the two tables of the analytics core; the emotion_logs
//! table belongs to the host application and is only read.

mod event_reader;
mod goal_store;
mod resilience_store;

pub use event_reader::SqliteEmotionEventReader;
pub use goal_store::SqliteGoalStore;
pub use resilience_store::SqliteResilienceStore;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;

/// Opens a connection pool per the database configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await
}

/// Creates the tables owned by this core if they do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resilience_metrics (
            user_id TEXT NOT NULL,
            week TEXT NOT NULL,
            score REAL NOT NULL,
            volatility REAL NOT NULL,
            recovery_speed REAL NOT NULL,
            positive_ratio REAL NOT NULL,
            growth_state TEXT NOT NULL,
            PRIMARY KEY (user_id, week)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weekly_goals (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            week TEXT NOT NULL,
            goal_text TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
