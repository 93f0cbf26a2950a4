//! Athlete log commands

use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Subcommand};

use crate::logstore::{
  log_session, recent_entries, LogEntry, LogStore, LogStoreError, SheetsClient, SheetsConfig,
  SpreadsheetRef, DEFAULT_WORKSHEET,
};
use crate::week::Day;

#[derive(Subcommand, Debug)]
pub enum LogCommand {
  /// Record one session
  Append(AppendArgs),
  /// Show the latest entries
  Recent(RecentArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SheetArgs {
  /// Spreadsheet URL or id
  #[arg(long, env = "SPRINT_PLANNER_SHEET")]
  pub sheet: String,

  #[arg(long, default_value = DEFAULT_WORKSHEET)]
  pub worksheet: String,
}

#[derive(Args, Debug)]
pub struct AppendArgs {
  #[command(flatten)]
  pub target: SheetArgs,

  /// Session date (YYYY-MM-DD), today when omitted
  #[arg(long)]
  pub date: Option<NaiveDate>,

  #[arg(long)]
  pub athlete: String,

  /// Training day; the weekday of --date when omitted
  #[arg(long)]
  pub session: Option<Day>,

  #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=10))]
  pub rpe: u8,

  #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
  pub fatigue: u8,

  #[arg(long, default_value = "")]
  pub notes: String,
}

#[derive(Args, Debug)]
pub struct RecentArgs {
  #[command(flatten)]
  pub target: SheetArgs,

  /// Only athletes whose name contains this text
  #[arg(long)]
  pub athlete: Option<String>,

  #[arg(long, default_value_t = 50)]
  pub last: usize,
}

impl AppendArgs {
  pub fn to_entry(&self, today: NaiveDate) -> LogEntry {
    let date = self.date.unwrap_or(today);
    LogEntry {
      date,
      athlete: self.athlete.trim().to_string(),
      session: self.session.unwrap_or_else(|| Day::from(date.weekday())),
      rpe: self.rpe,
      fatigue: self.fatigue,
      notes: self.notes.clone(),
    }
  }
}

fn connect(target: &SheetArgs) -> Result<SheetsClient, LogStoreError> {
  let config = SheetsConfig::from_env()?;
  let spreadsheet = SpreadsheetRef::parse(&target.sheet)?;
  Ok(SheetsClient::new(config, spreadsheet))
}

pub async fn run_log(command: LogCommand) -> Result<(), LogStoreError> {
  match command {
    LogCommand::Append(args) => {
      let store = connect(&args.target)?;
      run_append(&store, &args, Local::now().date_naive()).await
    }
    LogCommand::Recent(args) => {
      let store = connect(&args.target)?;
      let entries = run_recent(&store, &args).await?;
      print!("{}", render_entries(&entries));
      Ok(())
    }
  }
}

pub async fn run_append<S: LogStore + ?Sized>(
  store: &S,
  args: &AppendArgs,
  today: NaiveDate,
) -> Result<(), LogStoreError> {
  let entry = args.to_entry(today);
  log_session(store, &args.target.worksheet, &entry).await?;
  println!(
    "Logged {} {} ({}): RPE {}, fatigue {}",
    entry.athlete, entry.date, entry.session, entry.rpe, entry.fatigue
  );
  Ok(())
}

pub async fn run_recent<S: LogStore + ?Sized>(
  store: &S,
  args: &RecentArgs,
) -> Result<Vec<LogEntry>, LogStoreError> {
  recent_entries(store, &args.target.worksheet, args.athlete.as_deref(), args.last).await
}

pub fn render_entries(entries: &[LogEntry]) -> String {
  if entries.is_empty() {
    return "No log entries\n".to_string();
  }

  let name_width = entries
    .iter()
    .map(|e| e.athlete.chars().count())
    .max()
    .unwrap_or(0)
    .max("Athlete".len());

  let mut out = format!(
    "{:<10}  {:<width$}  {:<7}  {:>3}  {:>7}  Notes\n",
    "Date",
    "Athlete",
    "Session",
    "RPE",
    "Fatigue",
    width = name_width
  );
  for e in entries {
    out.push_str(&format!(
      "{:<10}  {:<width$}  {:<7}  {:>3}  {:>7}  {}\n",
      e.date.format("%Y-%m-%d").to_string(),
      e.athlete,
      e.session.as_str(),
      e.rpe,
      e.fatigue,
      e.notes,
      width = name_width
    ));
  }
  out
}
