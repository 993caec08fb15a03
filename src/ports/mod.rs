//! Ports - async trait seams between the analytics core and its
//! collaborators.

mod event_reader;
mod goal_store;
mod resilience_store;

pub use event_reader::{EmotionEventReader, EventReadError};
pub use goal_store::GoalStore;
pub use resilience_store::{ResilienceStore, WeeklyScore};

/// Errors from the persistence side effects this core owns.
///
/// A failed write never invalidates an already-computed analytic result;
/// callers receive both.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Corrupt row: {0}")]
    Corrupt(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}
