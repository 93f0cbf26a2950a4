//! Logging setup
//!
//! Structured diagnostics go to stderr through `tracing`; stdout stays free
//! for plan tables and log listings.

use std::env;
use tracing_subscriber::EnvFilter;

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  /// One line per event
  Compact,
  /// Multi-line, for development
  Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
  /// Filter directive, e.g. "info" or "sprint_planner_lib=debug"
  pub level: String,
  pub format: LogFormat,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: "info".into(),
      format: LogFormat::Compact,
    }
  }
}

impl LoggingConfig {
  /// Reads `RUST_LOG` and `LOG_FORMAT` (compact | pretty)
  pub fn from_env() -> Self {
    let level = env::var("RUST_LOG")
      .ok()
      .filter(|v| !v.trim().is_empty())
      .unwrap_or_else(|| "info".into());

    let format = match env::var("LOG_FORMAT").as_deref() {
      Ok("pretty") => LogFormat::Pretty,
      _ => LogFormat::Compact,
    };

    Self { level, format }
  }

  fn filter(&self) -> EnvFilter {
    let base = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"));
    ["hyper=warn", "reqwest=warn"]
      .iter()
      .filter_map(|directive| directive.parse().ok())
      .fold(base, |filter, directive| filter.add_directive(directive))
  }

  /// Install the global subscriber. Fails if one is already set.
  pub fn init(&self) -> Result<(), String> {
    let builder = tracing_subscriber::fmt()
      .with_env_filter(self.filter())
      .with_writer(std::io::stderr)
      .with_target(false);

    let result = match self.format {
      LogFormat::Compact => builder.compact().try_init(),
      LogFormat::Pretty => builder.pretty().try_init(),
    };
    result.map_err(|e| format!("Failed to initialize logging: {}", e))
  }
}

/// Initialize logging from the environment
pub fn init_logging() -> Result<(), String> {
  LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_from_env_defaults() {
    temp_env::with_vars_unset(["RUST_LOG", "LOG_FORMAT"], || {
      assert_eq!(LoggingConfig::from_env(), LoggingConfig::default());
    });
  }

  #[test]
  #[serial]
  fn test_from_env_reads_level_and_format() {
    temp_env::with_vars(
      [
        ("RUST_LOG", Some("sprint_planner_lib=debug")),
        ("LOG_FORMAT", Some("pretty")),
      ],
      || {
        let config = LoggingConfig::from_env();
        assert_eq!(config.level, "sprint_planner_lib=debug");
        assert_eq!(config.format, LogFormat::Pretty);
      },
    );
  }

  #[test]
  #[serial]
  fn test_unknown_format_falls_back_to_compact() {
    temp_env::with_var("LOG_FORMAT", Some("json"), || {
      assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);
    });
  }

  #[test]
  fn test_filter_quiets_http_crates() {
    let filter = LoggingConfig::default().filter().to_string();
    assert!(filter.contains("reqwest=warn"));
    assert!(filter.contains("hyper=warn"));
  }
}
