//! Season plan commands

use clap::Args;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SeasonConfig;
use crate::error::Result;
use crate::export::{config_file_name, plan_file_name, render_plan_table, save_plan};
use crate::schedule::build;

#[derive(Args, Debug)]
pub struct PlanArgs {
  /// Season config (JSON)
  #[arg(short, long, value_name = "FILE")]
  pub config: PathBuf,

  /// Plan spreadsheet to write; defaults to <athlete>_SprintPlan.csv
  #[arg(short, long, value_name = "FILE")]
  pub out: Option<PathBuf>,

  /// Also write the rows as JSON
  #[arg(long, value_name = "FILE")]
  pub json: Option<PathBuf>,

  /// Also write the normalized config next to the plan as <athlete>_config.json
  #[arg(long)]
  pub save_config: bool,

  /// Don't print the week table
  #[arg(short, long)]
  pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
  #[arg(short, long, value_name = "FILE", default_value = "season.json")]
  pub out: PathBuf,

  /// Overwrite an existing file
  #[arg(long)]
  pub force: bool,
}

/// Generate the plan and write it out. Returns the spreadsheet path.
pub fn run_plan(args: &PlanArgs) -> Result<PathBuf> {
  let config = SeasonConfig::load(&args.config)?;

  // Plans are still produced for odd dates; weeks without a phase get dropped
  if let Err(e) = config.validate() {
    tracing::warn!(error = %e, "Season config looks inconsistent");
  }

  let rows = build(&config);
  if rows.is_empty() {
    tracing::warn!("Season has no weeks to plan");
  }

  if !args.quiet {
    print!("{}", render_plan_table(&rows));
  }

  let out = args
    .out
    .clone()
    .unwrap_or_else(|| PathBuf::from(plan_file_name(&config.athlete.name)));
  save_plan(&out, &rows)?;

  if let Some(json_path) = &args.json {
    fs::write(json_path, serde_json::to_string_pretty(&rows)?)?;
    tracing::info!(path = %json_path.display(), "Wrote plan rows as JSON");
  }

  if args.save_config {
    let config_path = out
      .parent()
      .unwrap_or_else(|| Path::new(""))
      .join(config_file_name(&config.athlete.name));
    config.save(&config_path)?;
    tracing::info!(path = %config_path.display(), "Wrote season config");
  }

  println!("Plan written to {}", out.display());
  Ok(out)
}

pub fn run_init_config(args: &InitConfigArgs) -> Result<()> {
  let json = SeasonConfig::template()?.to_json()?;

  if args.force {
    fs::write(&args.out, json)?;
  } else {
    let mut file = OpenOptions::new()
      .write(true)
      .create_new(true)
      .open(&args.out)?;
    file.write_all(json.as_bytes())?;
  }

  println!("Starter config written to {}", args.out.display());
  Ok(())
}
