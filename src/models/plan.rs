use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::week::Day;

/// One week of the generated plan, anchored on its Monday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekRow {
  pub week_start_date: NaiveDate,
  pub phase_name: String,
  pub focus: String,
  pub per_day_text: BTreeMap<Day, String>,
  /// Multiplier on planned load, in (0, 1]
  pub volume_modifier: f64,
}

impl WeekRow {
  pub fn day_text(&self, day: Day) -> &str {
    self.per_day_text.get(&day).map(String::as_str).unwrap_or("")
  }

  /// Cells in export column order: Week of, Phase, Focus, Mon..Sun, Volume modifier
  pub fn to_record(&self) -> Vec<String> {
    let mut record = Vec::with_capacity(11);
    record.push(self.week_start_date.format("%Y-%m-%d").to_string());
    record.push(self.phase_name.clone());
    record.push(self.focus.clone());
    record.extend(Day::ALL.iter().map(|day| self.day_text(*day).to_string()));
    record.push(format!("{:.2}", self.volume_modifier));
    record
  }
}
