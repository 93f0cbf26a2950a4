pub mod calendar;
pub mod log;
pub mod plan;

use clap::{Parser, Subcommand};

use crate::error::PlanError;
use crate::logstore::LogStoreError;

/// Sprint season planner
#[derive(Parser, Debug)]
#[command(name = "sprint-planner")]
#[command(about = "Periodized sprint season plans, taper advice and athlete logs")]
#[command(version)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Build the weekly season plan from a config file
  Plan(plan::PlanArgs),
  /// Write a starter season config
  InitConfig(plan::InitConfigArgs),
  /// Attach taper advice to a race calendar
  Calendar(calendar::CalendarArgs),
  /// Athlete log in a remote spreadsheet
  #[command(subcommand)]
  Log(log::LogCommand),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
  #[error(transparent)]
  Plan(#[from] PlanError),

  #[error(transparent)]
  LogStore(#[from] LogStoreError),
}

pub async fn dispatch(cli: Cli) -> Result<(), CommandError> {
  match cli.command {
    Command::Plan(args) => {
      plan::run_plan(&args)?;
    }
    Command::InitConfig(args) => plan::run_init_config(&args)?,
    Command::Calendar(args) => {
      calendar::run_calendar(&args)?;
    }
    Command::Log(command) => log::run_log(command).await?,
  }
  Ok(())
}
