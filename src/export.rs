//! Spreadsheet export
//!
//! Writes the season plan and the race calendar as single-table CSV files
//! that open directly in any spreadsheet program.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{RaceCalendarRow, WeekRow};

pub const PLAN_HEADERS: [&str; 11] = [
  "Week of",
  "Phase",
  "Focus",
  "Mon",
  "Tue",
  "Wed",
  "Thu",
  "Fri",
  "Sat",
  "Sun",
  "Volume modifier",
];

pub const RACE_CALENDAR_HEADERS: [&str; 10] = [
  "Date",
  "Meet",
  "Priority (A/B/C)",
  "Events",
  "Taper: Volume",
  "Taper: Intensity",
  "Taper: Key sessions",
  "Taper: Strength",
  "Taper: Rest days",
  "Notes",
];

pub const RACE_CALENDAR_FILE_NAME: &str = "Race_Calendar_Taper.csv";

/// "Kylie Smith" -> "Kylie_Smith_SprintPlan.csv"
pub fn plan_file_name(athlete_name: &str) -> String {
  format!("{}_SprintPlan.csv", athlete_name.trim().replace(' ', "_"))
}

pub fn config_file_name(athlete_name: &str) -> String {
  format!("{}_config.json", athlete_name.trim().replace(' ', "_"))
}

pub fn write_plan_csv<W: Write>(writer: W, rows: &[WeekRow]) -> Result<()> {
  let mut csv_writer = csv::Writer::from_writer(writer);
  csv_writer.write_record(PLAN_HEADERS)?;
  for row in rows {
    csv_writer.write_record(row.to_record())?;
  }
  csv_writer.flush()?;
  Ok(())
}

pub fn write_race_calendar_csv<W: Write>(writer: W, rows: &[RaceCalendarRow]) -> Result<()> {
  let mut csv_writer = csv::Writer::from_writer(writer);
  csv_writer.write_record(RACE_CALENDAR_HEADERS)?;
  for row in rows {
    csv_writer.write_record(row.to_record())?;
  }
  csv_writer.flush()?;
  Ok(())
}

pub fn save_plan(path: &Path, rows: &[WeekRow]) -> Result<()> {
  write_plan_csv(File::create(path)?, rows)?;
  tracing::info!(path = %path.display(), weeks = rows.len(), "Wrote plan spreadsheet");
  Ok(())
}

pub fn save_race_calendar(path: &Path, rows: &[RaceCalendarRow]) -> Result<()> {
  write_race_calendar_csv(File::create(path)?, rows)?;
  tracing::info!(path = %path.display(), meets = rows.len(), "Wrote race calendar spreadsheet");
  Ok(())
}

/// Compact terminal overview: one line per week
pub fn render_plan_table(rows: &[WeekRow]) -> String {
  let phase_width = rows
    .iter()
    .map(|r| r.phase_name.chars().count())
    .max()
    .unwrap_or(0)
    .max("Phase".len());

  let mut out = format!(
    "{:<10}  {:<width$}  {}\n",
    "Week of",
    "Phase",
    "Volume",
    width = phase_width
  );
  for row in rows {
    out.push_str(&format!(
      "{:<10}  {:<width$}  {:.2}\n",
      row.week_start_date.format("%Y-%m-%d").to_string(),
      row.phase_name,
      row.volume_modifier,
      width = phase_width
    ));
  }
  out
}
