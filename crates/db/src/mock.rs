use async_trait::async_trait;
use classdesk_core::models::schedule::{ClassSchedule, NewClassSchedule};
use mockall::mock;
use uuid::Uuid;

use crate::store::ClassScheduleStore;

// Mock store for handler tests
mock! {
    pub ScheduleStore {}

    #[async_trait]
    impl ClassScheduleStore for ScheduleStore {
        async fn create(&self, record: NewClassSchedule) -> eyre::Result<ClassSchedule>;

        async fn get(&self, id: Uuid) -> eyre::Result<Option<ClassSchedule>>;

        async fn list(&self) -> eyre::Result<Vec<ClassSchedule>>;

        async fn update(
            &self,
            id: Uuid,
            record: NewClassSchedule,
        ) -> eyre::Result<Option<ClassSchedule>>;

        async fn delete(&self, id: Uuid) -> eyre::Result<bool>;
    }
}
