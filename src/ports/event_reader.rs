use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::emotion::EmotionEvent;
use crate::domain::foundation::UserId;

/// Read-only port over the emotion event store.
///
/// The store is an external collaborator; this core never writes to it.
#[async_trait]
pub trait EmotionEventReader: Send + Sync {
    /// Events for a user after `since`, ascending by timestamp.
    ///
    /// Rows with unusable timestamps or labels are recovered at the
    /// adapter boundary and never surface as errors.
    async fn events_since(
        &self,
        user_id: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<EmotionEvent>, EventReadError>;
}

/// Errors that can occur while reading events.
#[derive(Debug, thiserror::Error)]
pub enum EventReadError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for EventReadError {
    fn from(err: sqlx::Error) -> Self {
        EventReadError::Database(err.to_string())
    }
}
