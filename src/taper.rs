//! Taper Advisor
//!
//! Fixed taper protocols per race priority, and the race calendar expansion
//! that attaches one to every meet.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{RaceCalendarRow, RaceEntry};

/// Race priority: A = main target, B = preparation race, C = training race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Priority {
  A,
  B,
  C,
}

impl Priority {
  pub fn as_str(&self) -> &'static str {
    match self {
      Priority::A => "A",
      Priority::B => "B",
      Priority::C => "C",
    }
  }
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Anything that is not exactly "A" or "B" is treated as a training race
impl From<&str> for Priority {
  fn from(s: &str) -> Self {
    match s {
      "A" => Priority::A,
      "B" => Priority::B,
      _ => Priority::C,
    }
  }
}

impl From<String> for Priority {
  fn from(s: String) -> Self {
    Priority::from(s.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaperProtocol {
  pub volume_change: String,
  pub intensity: String,
  pub key_sessions: String,
  pub strength: String,
  pub rest_days: String,
  pub notes: String,
}

impl TaperProtocol {
  fn fixed(
    volume_change: &str,
    intensity: &str,
    key_sessions: &str,
    strength: &str,
    rest_days: &str,
    notes: String,
  ) -> Self {
    Self {
      volume_change: volume_change.to_string(),
      intensity: intensity.to_string(),
      key_sessions: key_sessions.to_string(),
      strength: strength.to_string(),
      rest_days: rest_days.to_string(),
      notes,
    }
  }
}

/// Taper advice for a race. `peak_type` only shows up in A-race notes.
pub fn advise(priority: Priority, peak_type: &str) -> TaperProtocol {
  match priority {
    Priority::A => TaperProtocol::fixed(
      "-40% to -60%",
      "High (short & sharp)",
      "Mon: starts/accel; Tue: flying 20–30m; Thu: race-pace touches; Fri: micro-priming",
      "Explosive only (bodyweight/bands)",
      "≥1 full rest day before race",
      format!(
        "A-peak ({}): keep CNS fresh; no fatigue-dense work last 72h",
        peak_type
      ),
    ),
    Priority::B => TaperProtocol::fixed(
      "-20% to -30%",
      "Moderate-high",
      "Short starts + 1 race-pace rep",
      "Light explosive set",
      "Optional rest day before race",
      "Rehearsal race; do not over-taper".to_string(),
    ),
    Priority::C => TaperProtocol::fixed(
      "No change or -10%",
      "Normal training",
      "Keep routine; short starts",
      "Normal",
      "None required",
      "Training race; prioritize learning".to_string(),
    ),
  }
}

/// Attach taper advice to each meet, keeping the order they were entered in
pub fn annotate_calendar(entries: &[RaceEntry]) -> Vec<RaceCalendarRow> {
  entries.iter().map(RaceCalendarRow::from_entry).collect()
}
