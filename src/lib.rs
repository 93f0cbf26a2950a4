pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod logstore;
pub mod models;
pub mod phase;
pub mod rotation;
pub mod schedule;
pub mod slots;
pub mod taper;
pub mod week;

#[cfg(test)]
mod test_utils;

pub use config::SeasonConfig;
pub use error::PlanError;
pub use models::{RaceCalendarRow, RaceEntry, WeekRow};
pub use schedule::build;
pub use week::Day;

use clap::Parser;
use std::process::ExitCode;

pub fn run() -> ExitCode {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  if let Err(e) = logging::init_logging() {
    eprintln!("{}", e);
  }

  let cli = commands::Cli::parse();

  let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
    Ok(runtime) => runtime,
    Err(e) => {
      eprintln!("Failed to start async runtime: {}", e);
      return ExitCode::FAILURE;
    }
  };

  match runtime.block_on(commands::dispatch(cli)) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!(error = %e, "Command failed");
      eprintln!("Error: {}", e);
      ExitCode::FAILURE
    }
  }
}
