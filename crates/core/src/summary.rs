//! Human-readable and legacy projections of a timetable.

use crate::models::{CompleteSlot, Session, TimeSlot, WeeklySlot};

/// Joins each distinct complete slot as `"<day> (<start>-<end>)"`, adding
/// `" + N buổi bổ sung"` when there are additional sessions.
pub fn schedule_summary(pattern: &[WeeklySlot], additional_count: usize) -> String {
    let mut seen: Vec<CompleteSlot> = Vec::new();
    for slot in pattern.iter().filter_map(WeeklySlot::complete) {
        if !seen.contains(&slot) {
            seen.push(slot);
        }
    }

    let mut summary = seen
        .iter()
        .map(|slot| {
            format!(
                "{} ({}-{})",
                slot.day_of_week, slot.start_time, slot.end_time
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    if additional_count > 0 {
        summary.push_str(&format!(" + {additional_count} buổi bổ sung"));
    }

    summary
}

pub fn time_slots(sessions: &[Session]) -> Vec<TimeSlot> {
    sessions.iter().map(TimeSlot::from).collect()
}
