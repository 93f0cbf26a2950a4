use std::process::ExitCode;

fn main() -> ExitCode {
  sprint_planner_lib::run()
}
