use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AdditionalSession, Session, TimeSlot, WeeklySlot};
use crate::draft::ScheduleDraft;

/// A class timetable as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub id: Uuid,
    pub class_name: String,
    pub course_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub total_sessions: u32,
    pub weekly_pattern: Vec<WeeklySlot>,
    #[serde(default)]
    pub additional_sessions: Vec<AdditionalSession>,
    pub class_sessions: Vec<Session>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    pub schedule: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything needed to write a schedule record, produced from a validated draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassSchedule {
    pub class_name: String,
    pub course_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub total_sessions: u32,
    pub weekly_pattern: Vec<WeeklySlot>,
    pub additional_sessions: Vec<AdditionalSession>,
    pub class_sessions: Vec<Session>,
    pub time_slots: Vec<TimeSlot>,
    pub schedule: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassScheduleRequest {
    pub class_name: String,
    pub course_id: Option<Uuid>,
    pub draft: ScheduleDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassScheduleRequest {
    pub class_name: Option<String>,
    pub course_id: Option<Uuid>,
    /// Replaces the timetable when present; the stored sessions are kept otherwise.
    pub draft: Option<ScheduleDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSessionsRequest {
    pub start_date: NaiveDate,
    pub total_sessions: u32,
    pub weekly_pattern: Vec<WeeklySlot>,
    #[serde(default)]
    pub additional_sessions: Vec<AdditionalSession>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSessionsResponse {
    pub class_sessions: Vec<Session>,
    pub end_date: Option<NaiveDate>,
    pub requested_sessions: u32,
    /// Pattern sessions actually produced; lower than requested when the
    /// pattern cannot be satisfied within a year of the start date.
    pub generated_sessions: u32,
    pub schedule: String,
}
