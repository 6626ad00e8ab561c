use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use classdesk_core::{
    draft::ScheduleDraft,
    errors::ScheduleError,
    models::schedule::{
        ClassSchedule, CreateClassScheduleRequest, NewClassSchedule, UpdateClassScheduleRequest,
    },
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn not_found(id: Uuid) -> ScheduleError {
    ScheduleError::NotFound(format!("Class schedule with ID {} not found", id))
}

fn validated_class_name(name: String) -> Result<String, ScheduleError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScheduleError::Validation("Class name is required".to_string()));
    }
    Ok(name.to_string())
}

/// A draft posted without sessions is generated from its pattern first; one
/// that carries sessions is stored as edited.
fn submitted(draft: ScheduleDraft) -> ScheduleDraft {
    if draft.class_sessions.is_empty() {
        draft.regenerated()
    } else {
        draft
    }
}

/// The record as stored, with only the class details replaced.
fn restamped(existing: ClassSchedule, class_name: String, course_id: Option<Uuid>) -> NewClassSchedule {
    NewClassSchedule {
        class_name,
        course_id,
        start_date: existing.start_date,
        end_date: existing.end_date,
        total_sessions: existing.total_sessions,
        weekly_pattern: existing.weekly_pattern,
        additional_sessions: existing.additional_sessions,
        class_sessions: existing.class_sessions,
        time_slots: existing.time_slots,
        schedule: existing.schedule,
    }
}

async fn find(state: &ApiState, id: Uuid) -> Result<ClassSchedule, AppError> {
    let schedule = state.store.get(id).await?.ok_or_else(|| not_found(id))?;

    Ok(schedule)
}

#[axum::debug_handler]
pub async fn list_schedules(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ClassSchedule>>, AppError> {
    let schedules = state.store.list().await?;

    Ok(Json(schedules))
}

#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateClassScheduleRequest>,
) -> Result<(StatusCode, Json<ClassSchedule>), AppError> {
    let class_name = validated_class_name(payload.class_name)?;
    let record = submitted(payload.draft).into_new_schedule(class_name, payload.course_id)?;

    let schedule = state.store.create(record).await?;

    info!(
        "Created class schedule {} ({}) with {} sessions",
        schedule.id,
        schedule.class_name,
        schedule.class_sessions.len()
    );

    Ok((StatusCode::CREATED, Json(schedule)))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClassSchedule>, AppError> {
    Ok(Json(find(&state, id).await?))
}

/// The draft the edit screen starts from, built from this record alone.
#[axum::debug_handler]
pub async fn get_schedule_draft(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleDraft>, AppError> {
    let schedule = find(&state, id).await?;

    Ok(Json(ScheduleDraft::from(&schedule)))
}

/// Updates class details and, when a draft is posted, the timetable.
///
/// Without a draft the stored sessions are written back unchanged. An absent
/// `courseId` keeps the current course.
#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClassScheduleRequest>,
) -> Result<Json<ClassSchedule>, AppError> {
    let existing = find(&state, id).await?;

    let class_name = match payload.class_name {
        Some(name) => validated_class_name(name)?,
        None => existing.class_name.clone(),
    };
    let course_id = payload.course_id.or(existing.course_id);

    let record = match payload.draft {
        Some(draft) => submitted(draft).into_new_schedule(class_name, course_id)?,
        None => restamped(existing, class_name, course_id),
    };

    let schedule = state
        .store
        .update(id, record)
        .await?
        .ok_or_else(|| not_found(id))?;

    info!("Updated class schedule {}", id);

    Ok(Json(schedule))
}

#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = state.store.delete(id).await?;

    if !deleted {
        return Err(not_found(id).into());
    }

    info!("Deleted class schedule {}", id);
    Ok(StatusCode::NO_CONTENT)
}
