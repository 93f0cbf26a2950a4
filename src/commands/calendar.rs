use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::export::{save_race_calendar, RACE_CALENDAR_FILE_NAME};
use crate::models::{default_race_calendar, RaceCalendarRow, RaceEntry};
use crate::taper::annotate_calendar;

#[derive(Args, Debug)]
pub struct CalendarArgs {
  /// Meets as a JSON array; the 2025/26 starter calendar when omitted
  #[arg(short, long, value_name = "FILE")]
  pub input: Option<PathBuf>,

  #[arg(short, long, value_name = "FILE", default_value = RACE_CALENDAR_FILE_NAME)]
  pub out: PathBuf,
}

pub fn load_calendar(input: Option<&PathBuf>) -> Result<Vec<RaceEntry>> {
  match input {
    Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
    None => default_race_calendar(),
  }
}

pub fn run_calendar(args: &CalendarArgs) -> Result<Vec<RaceCalendarRow>> {
  let entries = load_calendar(args.input.as_ref())?;
  let rows = annotate_calendar(&entries);

  for row in &rows {
    println!(
      "{}  {}  {:<20}  {}",
      row.date, row.priority, row.meet, row.taper.volume_change
    );
  }
  save_race_calendar(&args.out, &rows)?;
  println!("Race calendar written to {}", args.out.display());

  Ok(rows)
}
