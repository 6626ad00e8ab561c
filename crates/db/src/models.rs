use chrono::{DateTime, NaiveDate, Utc};
use classdesk_core::models::{
    schedule::ClassSchedule, AdditionalSession, Session, TimeSlot, WeeklySlot,
};
use eyre::{Report, WrapErr};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClassSchedule {
    pub id: Uuid,
    pub class_name: String,
    pub course_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub total_sessions: i32,
    pub weekly_pattern: Json<Vec<WeeklySlot>>,
    pub additional_sessions: Json<Vec<AdditionalSession>>,
    pub class_sessions: Json<Vec<Session>>,
    pub time_slots: Json<Vec<TimeSlot>>,
    pub schedule: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbClassSchedule> for ClassSchedule {
    type Error = Report;

    fn try_from(row: DbClassSchedule) -> Result<Self, Self::Error> {
        let total_sessions = u32::try_from(row.total_sessions)
            .wrap_err_with(|| format!("Class schedule {} has a negative session count", row.id))?;

        Ok(ClassSchedule {
            id: row.id,
            class_name: row.class_name,
            course_id: row.course_id,
            start_date: row.start_date,
            end_date: row.end_date,
            total_sessions,
            weekly_pattern: row.weekly_pattern.0,
            additional_sessions: row.additional_sessions.0,
            class_sessions: row.class_sessions.0,
            time_slots: row.time_slots.0,
            schedule: row.schedule,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
