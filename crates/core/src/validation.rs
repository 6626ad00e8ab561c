//! Submit-time checks for a schedule draft.
//!
//! The generator never fails; a draft it could not fully populate is rejected
//! here instead, together with any other problem found, in a single error.

use crate::{
    draft::ScheduleDraft,
    errors::{ScheduleError, ScheduleResult},
    models::{SessionKind, WeeklySlot},
};

/// Largest session count a stored schedule can hold.
pub const MAX_TOTAL_SESSIONS: u32 = i32::MAX as u32;

pub fn validate_draft(draft: &ScheduleDraft) -> ScheduleResult<()> {
    let problems = draft_problems(draft);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ScheduleError::Validation(problems.join("; ")))
    }
}

/// Every problem with the draft, in form order.
pub fn draft_problems(draft: &ScheduleDraft) -> Vec<String> {
    let mut problems = Vec::new();

    if draft.start_date.is_none() {
        problems.push("Start date is required".to_string());
    }

    let slots: Vec<_> = draft
        .weekly_pattern
        .iter()
        .filter_map(WeeklySlot::complete)
        .collect();
    if slots.is_empty() {
        problems.push("At least one complete weekly slot is required".to_string());
    }
    for slot in &slots {
        if slot.start_time >= slot.end_time {
            problems.push(format!(
                "{}: end time {} must be after start time {}",
                slot.day_of_week, slot.end_time, slot.start_time
            ));
        }
    }

    if draft.total_sessions == 0 {
        problems.push("Total sessions must be greater than zero".to_string());
    } else if draft.total_sessions > MAX_TOTAL_SESSIONS {
        problems.push(format!(
            "Total sessions must be at most {}",
            MAX_TOTAL_SESSIONS
        ));
    } else {
        let generated = draft
            .class_sessions
            .iter()
            .filter(|s| s.kind == SessionKind::Pattern)
            .count();
        if generated != draft.total_sessions as usize {
            problems.push(format!(
                "Generated {} sessions but {} were requested",
                generated, draft.total_sessions
            ));
        }
    }

    for session in &draft.class_sessions {
        if session.start_time >= session.end_time {
            problems.push(format!(
                "Session {} on {}: end time {} must be after start time {}",
                session.session_number, session.date, session.end_time, session.start_time
            ));
        }
    }

    problems
}
