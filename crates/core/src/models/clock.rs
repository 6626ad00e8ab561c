use std::{fmt, str::FromStr};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Wall-clock time of day, exchanged as zero-padded `HH:MM`.
///
/// Ordering matches lexicographic ordering of the `HH:MM` strings, so start/end
/// comparisons behave the same whether done on values or on their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

const FORMAT: &str = "%H:%M";

/// First and last hours offered by the time picker.
const PICKER_FIRST_HOUR: u32 = 6;
const PICKER_LAST_HOUR: u32 = 23;
const PICKER_STEP_MINUTES: u32 = 30;

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Whether the time is one the schedule screens let the user pick:
    /// half-hour steps from 06:00 through 23:30.
    pub fn is_on_picker_grid(self) -> bool {
        (PICKER_FIRST_HOUR..=PICKER_LAST_HOUR).contains(&self.hour())
            && self.minute() % PICKER_STEP_MINUTES == 0
    }

    /// Every pickable time, in order.
    pub fn picker_options() -> Vec<ClockTime> {
        (PICKER_FIRST_HOUR..=PICKER_LAST_HOUR)
            .flat_map(|hour| {
                (0..60)
                    .step_by(PICKER_STEP_MINUTES as usize)
                    .filter_map(move |minute| ClockTime::from_hm(hour, minute))
            })
            .collect()
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(time: ClockTime) -> Self {
        time.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a zero-padded HH:MM time, got {0:?}")]
pub struct InvalidClockTime(pub String);

impl FromStr for ClockTime {
    type Err = InvalidClockTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != "HH:MM".len() {
            return Err(InvalidClockTime(s.to_string()));
        }
        NaiveTime::parse_from_str(trimmed, FORMAT)
            .map(ClockTime)
            .map_err(|_| InvalidClockTime(s.to_string()))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|e| de::Error::custom(format!("invalid time {raw:?}: {e}")))
    }
}

/// Deserializes an optional form field where a blank string means "not filled in".
pub(crate) fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
