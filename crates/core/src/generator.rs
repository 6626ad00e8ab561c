//! # Session Generator
//!
//! Expands a weekly recurrence pattern into the concrete sessions a class runs on.
//!
//! The walk starts at the start date (inclusive) and advances one calendar day at
//! a time. On each day the first complete slot whose weekday matches produces a
//! session, until the requested number of sessions exists. A pattern that can
//! never be satisfied stops the walk once it is more than [`MAX_WALK_DAYS`] past
//! the start date, so callers must accept fewer sessions than requested.
//!
//! Manually entered additional sessions are then merged in, the list is sorted
//! by date and session numbers are reassigned from 1.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{AdditionalSession, CompleteSlot, DayOfWeek, Session, SessionKind, WeeklySlot};

/// How far past the start date the walk may go before giving up.
pub const MAX_WALK_DAYS: i64 = 365;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedSchedule {
    pub sessions: Vec<Session>,
    /// Date of the last session, `None` when nothing was generated.
    pub end_date: Option<NaiveDate>,
}

impl GeneratedSchedule {
    /// Number of sessions that came from the weekly pattern.
    pub fn pattern_count(&self) -> usize {
        self.sessions
            .iter()
            .filter(|s| s.kind == SessionKind::Pattern)
            .count()
    }
}

pub fn generate(
    pattern: &[WeeklySlot],
    start_date: NaiveDate,
    total_sessions: u32,
    additional: &[AdditionalSession],
) -> GeneratedSchedule {
    let slots: Vec<CompleteSlot> = pattern.iter().filter_map(WeeklySlot::complete).collect();
    if slots.is_empty() || total_sessions == 0 {
        return GeneratedSchedule::default();
    }

    let target = total_sessions as usize;
    // The walk visits at most MAX_WALK_DAYS + 1 dates, whatever the caller asked for.
    let reachable = target.min(MAX_WALK_DAYS as usize + 1);
    let mut sessions = Vec::with_capacity(reachable + additional.len());
    let mut date = start_date;

    while sessions.len() < target {
        if (date - start_date).num_days() > MAX_WALK_DAYS {
            warn!(
                "Weekly pattern produced {} of {} sessions within {} days of {}",
                sessions.len(),
                target,
                MAX_WALK_DAYS,
                start_date
            );
            break;
        }

        let day = DayOfWeek::of(date);
        if let Some(slot) = slots.iter().find(|slot| slot.day_of_week == day) {
            sessions.push(Session::from_slot(date, slot));
        }

        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    sessions.extend(additional.iter().filter_map(AdditionalSession::to_session));
    // Stable, so a pattern session stays ahead of an additional one on the same day.
    sessions.sort_by_key(|s| s.date);
    renumber(&mut sessions);

    let end_date = last_date(&sessions);
    GeneratedSchedule { sessions, end_date }
}

/// Reassigns session numbers 1..=n in the current order.
pub fn renumber(sessions: &mut [Session]) {
    for (number, session) in (1..).zip(sessions.iter_mut()) {
        session.session_number = number;
    }
}

pub fn last_date(sessions: &[Session]) -> Option<NaiveDate> {
    sessions.last().map(|s| s.date)
}
