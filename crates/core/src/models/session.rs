use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{clock::blank_as_none, ClockTime, DayOfWeek};

/// One recurring weekly commitment of a class.
///
/// Every field is optional because the pattern is edited row by row; rows that
/// are not fully filled in are skipped by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySlot {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start_time: Option<ClockTime>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub end_time: Option<ClockTime>,
}

/// A weekly slot with all fields present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompleteSlot {
    pub day_of_week: DayOfWeek,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl WeeklySlot {
    pub fn new(day_of_week: DayOfWeek, start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            day_of_week: Some(day_of_week),
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }

    pub fn complete(&self) -> Option<CompleteSlot> {
        Some(CompleteSlot {
            day_of_week: self.day_of_week?,
            start_time: self.start_time?,
            end_time: self.end_time?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// Produced by expanding the weekly pattern.
    #[default]
    Pattern,
    /// Entered by hand outside the pattern, e.g. a make-up class.
    Additional,
}

/// One concrete, dated occurrence of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_number: u32,
    pub date: NaiveDate,
    pub day_of_week: DayOfWeek,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(rename = "type", default)]
    pub kind: SessionKind,
}

impl Session {
    pub fn from_slot(date: NaiveDate, slot: &CompleteSlot) -> Self {
        Self {
            session_number: 0,
            date,
            day_of_week: DayOfWeek::of(date),
            start_time: slot.start_time,
            end_time: slot.end_time,
            kind: SessionKind::Pattern,
        }
    }

    /// Moves the session to `date`, keeping `day_of_week` in step with it.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.day_of_week = DayOfWeek::of(date);
    }
}

/// A manually specified session outside the weekly pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalSession {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<NaiveDate>,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl AdditionalSession {
    pub fn to_session(&self) -> Option<Session> {
        let date = self.date?;
        Some(Session {
            session_number: 0,
            date,
            day_of_week: DayOfWeek::of(date),
            start_time: self.start_time,
            end_time: self.end_time,
            kind: SessionKind::Additional,
        })
    }
}

/// Per-session projection kept on records for older readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub day_of_week: DayOfWeek,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub date: NaiveDate,
}

impl From<&Session> for TimeSlot {
    fn from(session: &Session) -> Self {
        Self {
            day_of_week: session.day_of_week,
            start_time: session.start_time,
            end_time: session.end_time,
            date: session.date,
        }
    }
}
