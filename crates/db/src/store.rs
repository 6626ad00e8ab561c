//! Storage seam used by the API, so handlers can run against a mock.

use async_trait::async_trait;
use classdesk_core::models::schedule::{ClassSchedule, NewClassSchedule};
use eyre::Result;
use uuid::Uuid;

use crate::{repositories::class_schedule, DbPool};

#[async_trait]
pub trait ClassScheduleStore: Send + Sync {
    async fn create(&self, record: NewClassSchedule) -> Result<ClassSchedule>;

    async fn get(&self, id: Uuid) -> Result<Option<ClassSchedule>>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<ClassSchedule>>;

    async fn update(&self, id: Uuid, record: NewClassSchedule) -> Result<Option<ClassSchedule>>;

    /// `false` when there was nothing to delete.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// [`ClassScheduleStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgClassScheduleStore {
    pool: DbPool,
}

impl PgClassScheduleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassScheduleStore for PgClassScheduleStore {
    async fn create(&self, record: NewClassSchedule) -> Result<ClassSchedule> {
        class_schedule::create_class_schedule(&self.pool, &record)
            .await?
            .try_into()
    }

    async fn get(&self, id: Uuid) -> Result<Option<ClassSchedule>> {
        class_schedule::get_class_schedule_by_id(&self.pool, id)
            .await?
            .map(ClassSchedule::try_from)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<ClassSchedule>> {
        class_schedule::list_class_schedules(&self.pool)
            .await?
            .into_iter()
            .map(ClassSchedule::try_from)
            .collect()
    }

    async fn update(&self, id: Uuid, record: NewClassSchedule) -> Result<Option<ClassSchedule>> {
        class_schedule::update_class_schedule(&self.pool, id, &record)
            .await?
            .map(ClassSchedule::try_from)
            .transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        class_schedule::delete_class_schedule(&self.pool, id).await
    }
}
