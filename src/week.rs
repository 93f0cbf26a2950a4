//! Training week days
//!
//! One weekday enumeration shared by the rotation templates, the slot tables,
//! plan rows, exports and the athlete log.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
  Mon,
  Tue,
  Wed,
  Thu,
  Fri,
  Sat,
  Sun,
}

impl Day {
  /// Monday-first, the order of every plan column
  pub const ALL: [Day; 7] = [
    Day::Mon,
    Day::Tue,
    Day::Wed,
    Day::Thu,
    Day::Fri,
    Day::Sat,
    Day::Sun,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Day::Mon => "Mon",
      Day::Tue => "Tue",
      Day::Wed => "Wed",
      Day::Thu => "Thu",
      Day::Fri => "Fri",
      Day::Sat => "Sat",
      Day::Sun => "Sun",
    }
  }

  /// Zero-based position from Monday
  pub fn index(self) -> usize {
    self as usize
  }
}

impl From<chrono::Weekday> for Day {
  fn from(weekday: chrono::Weekday) -> Self {
    Day::ALL[weekday.num_days_from_monday() as usize]
  }
}

impl fmt::Display for Day {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Day {
  type Err = PlanError;

  /// Accepts short ("Thu") and long ("Thursday") names, any case
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    Day::ALL
      .iter()
      .copied()
      .find(|day| {
        trimmed.eq_ignore_ascii_case(day.as_str()) || trimmed.eq_ignore_ascii_case(full_name(*day))
      })
      .ok_or_else(|| PlanError::format("weekday", s, "expected Mon..Sun"))
  }
}

fn full_name(day: Day) -> &'static str {
  match day {
    Day::Mon => "Monday",
    Day::Tue => "Tuesday",
    Day::Wed => "Wednesday",
    Day::Thu => "Thursday",
    Day::Fri => "Friday",
    Day::Sat => "Saturday",
    Day::Sun => "Sunday",
  }
}
