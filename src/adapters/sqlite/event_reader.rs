//! SQLite implementation of the emotion event reader.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::domain::emotion::EmotionEvent;
use crate::domain::foundation::{Emotion, UserId};
use crate::ports::{EmotionEventReader, EventReadError};

/// Reads the host application's emotion_logs table.
pub struct SqliteEmotionEventReader {
    pool: SqlitePool,
}

impl SqliteEmotionEventReader {
    /// Creates a reader over the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    emotion: String,
    confidence: Option<f64>,
    timestamp: String,
}

impl EventRow {
    /// Converts a row into an event.
    ///
    /// Unparsable timestamps drop the row; unrecognized labels degrade to
    /// neutral. Neither is an error.
    fn into_event(self) -> Option<EmotionEvent> {
        let Some(timestamp) = parse_timestamp(&self.timestamp) else {
            debug!(timestamp = %self.timestamp, "skipping event with unparsable timestamp");
            return None;
        };

        let emotion = match self.emotion.parse::<Emotion>() {
            Ok(emotion) => emotion,
            Err(_) => {
                debug!(label = %self.emotion, "unrecognized emotion label, treating as neutral");
                Emotion::Neutral
            }
        };

        Some(EmotionEvent::new(
            emotion,
            self.confidence.unwrap_or(1.0),
            timestamp,
        ))
    }
}

/// Parses the timestamp formats seen in the store: RFC 3339, ISO 8601
/// without offset, and SQLite's CURRENT_TIMESTAMP form. Naive values are
/// taken as UTC.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

#[async_trait]
impl EmotionEventReader for SqliteEmotionEventReader {
    async fn events_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<EmotionEvent>, EventReadError> {
        // datetime() normalizes the mixed timestamp formats for comparison.
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
            SELECT emotion, confidence, timestamp
            FROM emotion_logs
            WHERE user_id = ?1 AND datetime(timestamp) > datetime(?2)
            ORDER BY datetime(timestamp) ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(since.format("%Y-%m-%d %H:%M:%S").to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().filter_map(EventRow::into_event).collect())
    }
}
