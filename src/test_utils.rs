//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Mock data factories
//! - An in-memory log store
//! - Helper assertions

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::config::{AthleteProfile, ScheduleConfig, SeasonConfig};
use crate::logstore::{LogEntry, LogStore, LogStoreError, LOG_HEADER};
use crate::models::{default_race_calendar, RaceEntry};
use crate::slots::SlotSource;
use crate::week::Day;

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// The 2025/26 reference season: 15 year old, 32 km daily bike commute,
/// indoor peak 2026-02-21, outdoor peak 2026-06-28, no time prefixes
pub fn mock_season_config() -> SeasonConfig {
  SeasonConfig {
    season_start: date(2025, 9, 1),
    season_end: date(2026, 7, 1),
    peak_indoor_date: date(2026, 2, 21),
    additional_indoor_peak_dates: vec![],
    peak_outdoor_date: date(2026, 6, 28),
    bike_km_per_day: 32.0,
    age: 15,
    athlete: AthleteProfile {
      name: "Kylie".into(),
      sex: "F".into(),
      pbs: BTreeMap::from([("60m".to_string(), 8.58), ("200m".to_string(), 29.09)]),
      events: vec!["60m".into(), "200m".into()],
    },
    schedule: ScheduleConfig {
      source: SlotSource::NoPrefix,
      include_time_prefix: true,
    },
  }
}

pub fn mock_race_calendar() -> Vec<RaceEntry> {
  default_race_calendar().expect("default calendar parses")
}

/// A Monday session logged on 2026-01-12
pub fn mock_log_entry(athlete: &str, rpe: u8) -> LogEntry {
  LogEntry {
    date: date(2026, 1, 12),
    athlete: athlete.to_string(),
    session: Day::Mon,
    rpe,
    fatigue: 5,
    notes: "Felt sharp".into(),
  }
}

/// ---------------------------------------------------------------------------
/// In-memory Log Store
/// ---------------------------------------------------------------------------

/// Worksheets kept in a map, rows in insertion order
#[derive(Default)]
pub struct InMemoryLogStore {
  sheets: Mutex<BTreeMap<String, Vec<Vec<String>>>>,
}

impl InMemoryLogStore {
  pub fn worksheet_names(&self) -> Vec<String> {
    self.sheets.lock().expect("store lock").keys().cloned().collect()
  }

  /// Append a row without going through the trait, e.g. a malformed one
  pub fn push_raw(&self, worksheet: &str, row: Vec<String>) {
    self
      .sheets
      .lock()
      .expect("store lock")
      .entry(worksheet.to_string())
      .or_default()
      .push(row);
  }
}

#[async_trait]
impl LogStore for InMemoryLogStore {
  async fn open_or_create(&self, worksheet: &str) -> Result<(), LogStoreError> {
    self
      .sheets
      .lock()
      .expect("store lock")
      .entry(worksheet.to_string())
      .or_insert_with(|| vec![LOG_HEADER.iter().map(|h| h.to_string()).collect()]);
    Ok(())
  }

  async fn append_row(&self, worksheet: &str, row: Vec<String>) -> Result<(), LogStoreError> {
    let mut sheets = self.sheets.lock().expect("store lock");
    let rows = sheets
      .get_mut(worksheet)
      .ok_or_else(|| LogStoreError::SpreadsheetNotFound(worksheet.to_string()))?;
    rows.push(row);
    Ok(())
  }

  async fn read_all_rows(&self, worksheet: &str) -> Result<Vec<Vec<String>>, LogStoreError> {
    Ok(
      self
        .sheets
        .lock()
        .expect("store lock")
        .get(worksheet)
        .cloned()
        .unwrap_or_default(),
    )
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let config = mock_season_config();
    assert!(config.validate().is_ok());
    assert_eq!(config.athlete.name, "Kylie");

    let calendar = mock_race_calendar();
    assert_eq!(calendar.len(), 10);

    let entry = mock_log_entry("Kylie", 6);
    assert!(entry.validate().is_ok());
    assert_eq!(entry.session, Day::Mon);
  }

  #[tokio::test]
  async fn test_in_memory_store_starts_sheet_with_header() {
    let store = InMemoryLogStore::default();
    store.open_or_create("Logs").await.unwrap();
    store.open_or_create("Logs").await.unwrap();
    store.append_row("Logs", vec!["x".into()]).await.unwrap();

    let rows = store.read_all_rows("Logs").await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], LOG_HEADER);
    assert_eq!(store.worksheet_names(), vec!["Logs"]);
  }

  #[tokio::test]
  async fn test_in_memory_store_append_needs_open_sheet() {
    let store = InMemoryLogStore::default();
    assert!(store.append_row("Nope", vec![]).await.is_err());
    assert!(store.read_all_rows("Nope").await.unwrap().is_empty());
  }

  #[test]
  fn test_assert_approx_eq_macro() {
    crate::assert_approx_eq!(0.855_f64, 0.86_f64, 0.01);
  }
}
