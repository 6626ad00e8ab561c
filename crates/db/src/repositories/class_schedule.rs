use crate::models::DbClassSchedule;
use chrono::Utc;
use classdesk_core::models::schedule::NewClassSchedule;
use eyre::{Result, WrapErr};
use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

const COLUMNS: &str = "id, class_name, course_id, start_date, end_date, total_sessions, \
     weekly_pattern, additional_sessions, class_sessions, time_slots, schedule, \
     created_at, updated_at";

fn session_count(record: &NewClassSchedule) -> Result<i32> {
    i32::try_from(record.total_sessions).wrap_err("Total sessions out of range")
}

pub async fn create_class_schedule(
    pool: &Pool<Postgres>,
    record: &NewClassSchedule,
) -> Result<DbClassSchedule> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating class schedule: id={}, class_name={}, sessions={}",
        id,
        record.class_name,
        record.class_sessions.len()
    );

    let sql = format!(
        r#"
        INSERT INTO class_schedules ({COLUMNS})
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
        RETURNING {COLUMNS}
        "#
    );
    let schedule = sqlx::query_as::<_, DbClassSchedule>(&sql)
        .bind(id)
        .bind(&record.class_name)
        .bind(record.course_id)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(session_count(record)?)
        .bind(Json(&record.weekly_pattern))
        .bind(Json(&record.additional_sessions))
        .bind(Json(&record.class_sessions))
        .bind(Json(&record.time_slots))
        .bind(&record.schedule)
        .bind(now)
        .fetch_one(pool)
        .await?;

    tracing::debug!("Class schedule created successfully: id={}", id);
    Ok(schedule)
}

pub async fn get_class_schedule_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbClassSchedule>> {
    tracing::debug!("Getting class schedule by id: {}", id);

    let sql = format!("SELECT {COLUMNS} FROM class_schedules WHERE id = $1");
    let schedule = sqlx::query_as::<_, DbClassSchedule>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    if schedule.is_none() {
        tracing::debug!("Class schedule not found: id={}", id);
    }

    Ok(schedule)
}

pub async fn list_class_schedules(pool: &Pool<Postgres>) -> Result<Vec<DbClassSchedule>> {
    let sql = format!("SELECT {COLUMNS} FROM class_schedules ORDER BY created_at DESC");
    let schedules = sqlx::query_as::<_, DbClassSchedule>(&sql)
        .fetch_all(pool)
        .await?;

    Ok(schedules)
}

/// Overwrites every stored field of the schedule; `None` when it does not exist.
pub async fn update_class_schedule(
    pool: &Pool<Postgres>,
    id: Uuid,
    record: &NewClassSchedule,
) -> Result<Option<DbClassSchedule>> {
    tracing::debug!("Updating class schedule: id={}", id);

    let sql = format!(
        r#"
        UPDATE class_schedules
        SET class_name = $2, course_id = $3, start_date = $4, end_date = $5,
            total_sessions = $6, weekly_pattern = $7, additional_sessions = $8,
            class_sessions = $9, time_slots = $10, schedule = $11, updated_at = $12
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    );
    let schedule = sqlx::query_as::<_, DbClassSchedule>(&sql)
        .bind(id)
        .bind(&record.class_name)
        .bind(record.course_id)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(session_count(record)?)
        .bind(Json(&record.weekly_pattern))
        .bind(Json(&record.additional_sessions))
        .bind(Json(&record.class_sessions))
        .bind(Json(&record.time_slots))
        .bind(&record.schedule)
        .bind(Utc::now())
        .fetch_optional(pool)
        .await?;

    Ok(schedule)
}

pub async fn delete_class_schedule(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM class_schedules
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
