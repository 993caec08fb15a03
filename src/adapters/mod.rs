//! Adapters - concrete implementations of the ports.

pub mod sqlite;

pub use sqlite::{
    connect, ensure_schema, SqliteEmotionEventReader, SqliteGoalStore, SqliteResilienceStore,
};
