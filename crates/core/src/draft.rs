//! # Schedule Draft
//!
//! The in-memory timetable a schedule screen edits before submitting it.
//! Every change goes through [`ScheduleDraft::apply`] with a named
//! [`DraftAction`]; changes to the start date, session count, weekly pattern or
//! additional sessions regenerate the whole session list, discarding any edits
//! made to individual sessions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::{ScheduleError, ScheduleResult},
    generator::{self, last_date, renumber},
    models::{
        schedule::{ClassSchedule, NewClassSchedule},
        AdditionalSession, ClockTime, Session, WeeklySlot,
    },
    summary, validation,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    pub start_date: Option<NaiveDate>,
    pub total_sessions: u32,
    #[serde(default)]
    pub weekly_pattern: Vec<WeeklySlot>,
    #[serde(default)]
    pub additional_sessions: Vec<AdditionalSession>,
    #[serde(default)]
    pub class_sessions: Vec<Session>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum DraftAction {
    SetStartDate(Option<NaiveDate>),
    SetTotalSessions(u32),
    AddSlot(WeeklySlot),
    #[serde(rename_all = "camelCase")]
    UpdateSlot { index: usize, slot: WeeklySlot },
    RemoveSlot { index: usize },
    AddAdditionalSession(AdditionalSession),
    RemoveAdditionalSession { index: usize },
    EditSessionDate { index: usize, date: NaiveDate },
    #[serde(rename_all = "camelCase")]
    EditSessionTime {
        index: usize,
        start_time: ClockTime,
        end_time: ClockTime,
    },
    RemoveSession { index: usize },
}

impl ScheduleDraft {
    /// Builds a draft and generates its sessions.
    pub fn new(
        start_date: Option<NaiveDate>,
        total_sessions: u32,
        weekly_pattern: Vec<WeeklySlot>,
        additional_sessions: Vec<AdditionalSession>,
    ) -> Self {
        Self {
            start_date,
            total_sessions,
            weekly_pattern,
            additional_sessions,
            ..Self::default()
        }
        .regenerated()
    }

    /// Applies one edit and returns the resulting draft.
    pub fn apply(mut self, action: DraftAction) -> Self {
        debug!("Applying draft action: {:?}", action);

        match action {
            DraftAction::SetStartDate(date) => {
                self.start_date = date;
                self.regenerated()
            }
            DraftAction::SetTotalSessions(total) => {
                self.total_sessions = total;
                self.regenerated()
            }
            DraftAction::AddSlot(slot) => {
                self.weekly_pattern.push(slot);
                self.regenerated()
            }
            DraftAction::UpdateSlot { index, slot } => {
                if index >= self.weekly_pattern.len() {
                    return self;
                }
                self.weekly_pattern[index] = slot;
                self.regenerated()
            }
            DraftAction::RemoveSlot { index } => {
                if index >= self.weekly_pattern.len() {
                    return self;
                }
                self.weekly_pattern.remove(index);
                self.regenerated()
            }
            DraftAction::AddAdditionalSession(session) => {
                self.additional_sessions.push(session);
                self.regenerated()
            }
            DraftAction::RemoveAdditionalSession { index } => {
                if index >= self.additional_sessions.len() {
                    return self;
                }
                self.additional_sessions.remove(index);
                self.regenerated()
            }
            DraftAction::EditSessionDate { index, date } => {
                // The edited date is not checked against the pattern and the
                // list is not re-sorted.
                if let Some(session) = self.class_sessions.get_mut(index) {
                    session.set_date(date);
                    self.refresh_end_date();
                }
                self
            }
            DraftAction::EditSessionTime {
                index,
                start_time,
                end_time,
            } => {
                if let Some(session) = self.class_sessions.get_mut(index) {
                    session.start_time = start_time;
                    session.end_time = end_time;
                }
                self
            }
            DraftAction::RemoveSession { index } => {
                if index >= self.class_sessions.len() {
                    return self;
                }
                self.class_sessions.remove(index);
                renumber(&mut self.class_sessions);
                self.refresh_end_date();
                self
            }
        }
    }

    /// Discards the current sessions and generates them again from the pattern.
    pub fn regenerated(mut self) -> Self {
        self.class_sessions = match self.start_date {
            Some(start_date) => {
                generator::generate(
                    &self.weekly_pattern,
                    start_date,
                    self.total_sessions,
                    &self.additional_sessions,
                )
                .sessions
            }
            None => Vec::new(),
        };
        self.refresh_end_date();
        self
    }

    fn refresh_end_date(&mut self) {
        if let Some(end_date) = last_date(&self.class_sessions) {
            self.end_date = Some(end_date);
        }
    }

    /// Validates the draft and packages it for storage.
    pub fn into_new_schedule(
        self,
        class_name: String,
        course_id: Option<Uuid>,
    ) -> ScheduleResult<NewClassSchedule> {
        validation::validate_draft(&self)?;
        let Some(start_date) = self.start_date else {
            return Err(ScheduleError::Validation("Start date is required".to_string()));
        };

        let additional_count = self
            .additional_sessions
            .iter()
            .filter(|s| s.date.is_some())
            .count();
        let schedule = summary::schedule_summary(&self.weekly_pattern, additional_count);
        let time_slots = summary::time_slots(&self.class_sessions);
        let weekly_pattern = self
            .weekly_pattern
            .into_iter()
            .filter(|slot| slot.complete().is_some())
            .collect();

        Ok(NewClassSchedule {
            class_name,
            course_id,
            start_date,
            end_date: self.end_date,
            total_sessions: self.total_sessions,
            weekly_pattern,
            additional_sessions: self.additional_sessions,
            class_sessions: self.class_sessions,
            time_slots,
            schedule,
        })
    }
}

impl From<&ClassSchedule> for ScheduleDraft {
    /// The draft an edit screen starts from: the record's own pattern and its
    /// stored sessions, untouched until the user changes something.
    fn from(schedule: &ClassSchedule) -> Self {
        Self {
            start_date: Some(schedule.start_date),
            total_sessions: schedule.total_sessions,
            weekly_pattern: schedule.weekly_pattern.clone(),
            additional_sessions: schedule.additional_sessions.clone(),
            class_sessions: schedule.class_sessions.clone(),
            end_date: schedule.end_date,
        }
    }
}
