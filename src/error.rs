//! Error types for season planning and export

use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
  /// A configuration value could not be parsed (dates, times, weekdays, modes)
  #[error("Invalid {field} '{value}': {reason}")]
  Format {
    field: String,
    value: String,
    reason: String,
  },

  /// Season or peak dates that cannot produce a complete plan
  #[error("Invalid season range: {0}")]
  InvalidRange(String),

  #[error("Config parse error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("File error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Spreadsheet export failed: {0}")]
  Csv(#[from] csv::Error),
}

impl PlanError {
  pub fn format(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
    PlanError::Format {
      field: field.into(),
      value: value.into(),
      reason: reason.into(),
    }
  }
}

impl Serialize for PlanError {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

pub type Result<T> = std::result::Result<T, PlanError>;
