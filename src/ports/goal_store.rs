use async_trait::async_trait;

use crate::domain::foundation::{GoalId, UserId, WeekKey};
use crate::domain::resilience::WeeklyGoal;

use super::StoreError;

/// Persistence port for the append-only weekly goal log.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Appends a goal row. Never deduplicates: repeated generation within
    /// one week produces multiple rows.
    async fn append(&self, goal: &WeeklyGoal) -> Result<(), StoreError>;

    /// The most recently created goal for (user, week), if any.
    ///
    /// This is the display policy for the append-only log.
    async fn latest_for_week(
        &self,
        user_id: &UserId,
        week: WeekKey,
    ) -> Result<Option<WeeklyGoal>, StoreError>;

    /// Marks a goal as completed (or not).
    async fn set_completed(&self, id: GoalId, completed: bool) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockStore;

    #[async_trait]
    impl GoalStore for MockStore {
        async fn append(&self, _goal: &WeeklyGoal) -> Result<(), StoreError> {
            Ok(())
        }

        async fn latest_for_week(
            &self,
            _user_id: &UserId,
            _week: WeekKey,
        ) -> Result<Option<WeeklyGoal>, StoreError> {
            Ok(None)
        }

        async fn set_completed(&self, _id: GoalId, _completed: bool) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn store_trait_is_object_safe() {
        let _store: Box<dyn GoalStore> = Box::new(MockStore);
    }
}
