use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Day of the week, serialized with the labels the schedule screens display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    #[serde(rename = "Thứ 2")]
    Monday,
    #[serde(rename = "Thứ 3")]
    Tuesday,
    #[serde(rename = "Thứ 4")]
    Wednesday,
    #[serde(rename = "Thứ 5")]
    Thursday,
    #[serde(rename = "Thứ 6")]
    Friday,
    #[serde(rename = "Thứ 7")]
    Saturday,
    #[serde(rename = "Chủ nhật")]
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Thứ 2",
            DayOfWeek::Tuesday => "Thứ 3",
            DayOfWeek::Wednesday => "Thứ 4",
            DayOfWeek::Thursday => "Thứ 5",
            DayOfWeek::Friday => "Thứ 6",
            DayOfWeek::Saturday => "Thứ 7",
            DayOfWeek::Sunday => "Chủ nhật",
        }
    }

    /// Weekday on which `date` falls.
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day of week: {0:?}")]
pub struct UnknownDayOfWeek(pub String);

impl FromStr for DayOfWeek {
    type Err = UnknownDayOfWeek;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.label() == trimmed)
            .ok_or_else(|| UnknownDayOfWeek(s.to_string()))
    }
}
