pub mod clock;
pub mod schedule;
pub mod session;
pub mod weekday;

pub use clock::{ClockTime, InvalidClockTime};
pub use session::{AdditionalSession, CompleteSlot, Session, SessionKind, TimeSlot, WeeklySlot};
pub use weekday::DayOfWeek;
