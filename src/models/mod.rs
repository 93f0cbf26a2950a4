pub mod plan;
pub mod race;

pub use plan::WeekRow;
pub use race::{default_race_calendar, RaceCalendarRow, RaceEntry};
