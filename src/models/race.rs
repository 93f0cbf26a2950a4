use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::taper::{advise, Priority, TaperProtocol};

/// A meet on the race calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceEntry {
  pub date: NaiveDate,
  pub meet: String,
  /// Comma separated, e.g. "60m,200m"
  pub events: String,
  pub priority: Priority,
  #[serde(default)]
  pub peak_type: String,
}

/// Race calendar row with its taper protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceCalendarRow {
  pub date: NaiveDate,
  pub meet: String,
  pub priority: Priority,
  pub events: String,
  pub taper: TaperProtocol,
}

impl RaceCalendarRow {
  pub fn from_entry(entry: &RaceEntry) -> Self {
    Self {
      date: entry.date,
      meet: entry.meet.clone(),
      priority: entry.priority,
      events: entry.events.clone(),
      taper: advise(entry.priority, &entry.peak_type),
    }
  }

  /// Cells in export column order
  pub fn to_record(&self) -> Vec<String> {
    vec![
      self.date.format("%Y-%m-%d").to_string(),
      self.meet.clone(),
      self.priority.to_string(),
      self.events.clone(),
      self.taper.volume_change.clone(),
      self.taper.intensity.clone(),
      self.taper.key_sessions.clone(),
      self.taper.strength.clone(),
      self.taper.rest_days.clone(),
      self.taper.notes.clone(),
    ]
  }
}

const DEFAULT_CALENDAR: [(&str, &str, &str, &str, &str); 10] = [
  ("2026-01-31", "Indoor Open #1", "60m,200m", "B", "Indoor 60/200"),
  ("2026-02-07", "Indoor Open #2", "60m", "B", "Indoor 60/200"),
  ("2026-02-14", "Indoor Open #3", "60m,200m", "B", "Indoor 60/200"),
  ("2026-02-21", "Indoor Peak Day 1", "60m,200m", "A", "Indoor 60/200"),
  ("2026-02-22", "Indoor Peak Day 2", "60m,200m", "A", "Indoor 60/200"),
  ("2026-05-10", "Outdoor Open #1", "100m,200m", "B", "Outdoor 100/200"),
  ("2026-05-24", "Outdoor Open #2", "100m", "B", "Outdoor 100/200"),
  ("2026-06-07", "Outdoor Open #3", "100m,200m", "B", "Outdoor 100/200"),
  ("2026-06-14", "Outdoor Open #4", "100m", "B", "Outdoor 100/200"),
  ("2026-06-28", "Outdoor Peak", "100m,200m", "A", "Outdoor 100/200"),
];

/// Starter calendar for the 2025/26 season
pub fn default_race_calendar() -> Result<Vec<RaceEntry>> {
  DEFAULT_CALENDAR
    .iter()
    .map(|(date, meet, events, priority, peak_type)| {
      let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| PlanError::format("race date", *date, e.to_string()))?;
      Ok(RaceEntry {
        date,
        meet: meet.to_string(),
        events: events.to_string(),
        priority: Priority::from(*priority),
        peak_type: peak_type.to_string(),
      })
    })
    .collect()
}
