//! Athlete log storage in a remote spreadsheet
//!
//! Athletes record session RPE and fatigue after training. Rows go to a named
//! worksheet of a cloud spreadsheet; the planner never keeps its own copy.
//! Credentials come from outside (an access token issued for a service
//! account); this module only uses them.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use url::Url;

use crate::week::Day;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_WORKSHEET: &str = "AthleteLogs";
pub const LOG_HEADER: [&str; 6] = ["Date", "Athlete", "Session", "RPE", "Fatigue", "Notes"];
const NEW_SHEET_ROWS: u32 = 1000;
const NEW_SHEET_COLUMNS: u32 = 20;

#[derive(Debug, Clone)]
pub struct SheetsConfig {
  pub access_token: String,
  pub api_base: String,
}

impl SheetsConfig {
  pub fn from_env() -> Result<Self, LogStoreError> {
    let access_token = env::var("SHEETS_ACCESS_TOKEN")
      .ok()
      .filter(|token| !token.trim().is_empty())
      .ok_or_else(|| LogStoreError::MissingConfig("SHEETS_ACCESS_TOKEN".into()))?;

    Ok(Self {
      access_token,
      api_base: env::var("SHEETS_API_BASE").unwrap_or_else(|_| SHEETS_API_BASE.to_string()),
    })
  }
}

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LogStoreError {
  #[error("Missing configuration: {0}")]
  MissingConfig(String),

  #[error("Invalid spreadsheet reference: {0}")]
  InvalidReference(String),

  #[error("Not authenticated with the spreadsheet service (check the access token)")]
  NotAuthenticated,

  #[error("Permission denied for spreadsheet {0}: share it with the service account as Editor")]
  PermissionDenied(String),

  #[error("Spreadsheet not found: {0}")]
  SpreadsheetNotFound(String),

  #[error("HTTP request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("Spreadsheet API error ({status}): {message}")]
  Api { status: u16, message: String },

  #[error("Invalid log entry: {0}")]
  InvalidEntry(String),
}

impl Serialize for LogStoreError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Spreadsheet reference
/// ---------------------------------------------------------------------------

/// Spreadsheet id, taken from a bare id or a browser URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetRef(String);

impl SpreadsheetRef {
  /// Accepts `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0` or `<id>`
  pub fn parse(id_or_url: &str) -> Result<Self, LogStoreError> {
    let trimmed = id_or_url.trim();
    if trimmed.is_empty() {
      return Err(LogStoreError::InvalidReference("empty spreadsheet URL or id".into()));
    }

    let id = if trimmed.starts_with("http") {
      let url = Url::parse(trimmed).map_err(|e| LogStoreError::InvalidReference(e.to_string()))?;
      let segments: Vec<&str> = url.path_segments().map(|s| s.collect()).unwrap_or_default();
      segments
        .windows(2)
        .find(|pair| pair[0] == "d")
        .map(|pair| pair[1].to_string())
        .ok_or_else(|| LogStoreError::InvalidReference(format!("no /d/<id> in {}", trimmed)))?
    } else {
      trimmed.to_string()
    };

    let valid = !id.is_empty()
      && id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
      return Err(LogStoreError::InvalidReference(format!("'{}' is not a spreadsheet id", id)));
    }

    Ok(Self(id))
  }

  pub fn id(&self) -> &str {
    &self.0
  }
}

/// ---------------------------------------------------------------------------
/// Log entries
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
  pub date: NaiveDate,
  pub athlete: String,
  pub session: Day,
  /// Session RPE, 1-10
  pub rpe: u8,
  /// Fatigue, 1-10
  pub fatigue: u8,
  pub notes: String,
}

impl LogEntry {
  pub fn validate(&self) -> Result<(), LogStoreError> {
    if self.athlete.trim().is_empty() {
      return Err(LogStoreError::InvalidEntry("athlete name is required".into()));
    }
    for (label, value) in [("RPE", self.rpe), ("fatigue", self.fatigue)] {
      if !(1..=10).contains(&value) {
        return Err(LogStoreError::InvalidEntry(format!(
          "{} must be between 1 and 10, got {}",
          label, value
        )));
      }
    }
    Ok(())
  }

  /// Cells in `LOG_HEADER` order
  pub fn to_row(&self) -> Vec<String> {
    vec![
      self.date.format("%Y-%m-%d").to_string(),
      self.athlete.clone(),
      self.session.to_string(),
      self.rpe.to_string(),
      self.fatigue.to_string(),
      self.notes.clone(),
    ]
  }

  /// Read a sheet row by header name. Rows that don't parse are skipped by callers.
  pub fn from_record(header: &[String], row: &[String]) -> Option<Self> {
    let cell = |name: &str| -> Option<&str> {
      let idx = header.iter().position(|h| h.trim() == name)?;
      Some(row.get(idx).map(|s| s.trim()).unwrap_or(""))
    };

    Some(Self {
      date: NaiveDate::parse_from_str(cell("Date")?, "%Y-%m-%d").ok()?,
      athlete: cell("Athlete")?.to_string(),
      session: cell("Session")?.parse().ok()?,
      rpe: cell("RPE")?.parse().ok()?,
      fatigue: cell("Fatigue")?.parse().ok()?,
      notes: cell("Notes").unwrap_or("").to_string(),
    })
  }
}

/// ---------------------------------------------------------------------------
/// Store operations
/// ---------------------------------------------------------------------------

/// The three operations a remote log store must offer
#[async_trait]
pub trait LogStore: Send + Sync {
  /// Make sure `worksheet` exists; a new one starts with `LOG_HEADER`
  async fn open_or_create(&self, worksheet: &str) -> Result<(), LogStoreError>;

  async fn append_row(&self, worksheet: &str, row: Vec<String>) -> Result<(), LogStoreError>;

  /// Every row including the header, top to bottom
  async fn read_all_rows(&self, worksheet: &str) -> Result<Vec<Vec<String>>, LogStoreError>;
}

/// Validate and append one athlete log entry
pub async fn log_session<S: LogStore + ?Sized>(
  store: &S,
  worksheet: &str,
  entry: &LogEntry,
) -> Result<(), LogStoreError> {
  entry.validate()?;
  store.open_or_create(worksheet).await?;
  store.append_row(worksheet, entry.to_row()).await?;
  tracing::info!(athlete = %entry.athlete, date = %entry.date, worksheet, "Logged session");
  Ok(())
}

/// Latest `last_n` entries, optionally only athletes whose name contains `athlete_filter`
pub async fn recent_entries<S: LogStore + ?Sized>(
  store: &S,
  worksheet: &str,
  athlete_filter: Option<&str>,
  last_n: usize,
) -> Result<Vec<LogEntry>, LogStoreError> {
  store.open_or_create(worksheet).await?;
  let rows = store.read_all_rows(worksheet).await?;

  let Some((header, data)) = rows.split_first() else {
    return Ok(vec![]);
  };

  let needle = athlete_filter
    .map(|f| f.trim().to_lowercase())
    .filter(|f| !f.is_empty());

  let mut entries: Vec<LogEntry> = Vec::with_capacity(data.len());
  for (i, row) in data.iter().enumerate() {
    match LogEntry::from_record(header, row) {
      Some(entry) => entries.push(entry),
      // +2: one for the header, one for 1-based sheet rows
      None => tracing::warn!(row = i + 2, worksheet, "Skipping unreadable log row"),
    }
  }

  if let Some(needle) = needle {
    entries.retain(|e| e.athlete.to_lowercase().contains(&needle));
  }

  let skip = entries.len().saturating_sub(last_n);
  Ok(entries.split_off(skip))
}

/// ---------------------------------------------------------------------------
/// Google Sheets adapter
/// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
  #[serde(default)]
  sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
  properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
  title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
  #[serde(default)]
  values: Vec<Vec<serde_json::Value>>,
}

pub struct SheetsClient {
  http: Client,
  config: SheetsConfig,
  spreadsheet: SpreadsheetRef,
}

impl SheetsClient {
  pub fn new(config: SheetsConfig, spreadsheet: SpreadsheetRef) -> Self {
    Self {
      http: Client::new(),
      config,
      spreadsheet,
    }
  }

  fn endpoint(&self, tail: &[&str]) -> Result<Url, LogStoreError> {
    let mut url = Url::parse(&self.config.api_base)
      .map_err(|e| LogStoreError::MissingConfig(format!("SHEETS_API_BASE is not a URL: {}", e)))?;
    url
      .path_segments_mut()
      .map_err(|_| LogStoreError::MissingConfig("SHEETS_API_BASE cannot be a base URL".into()))?
      .pop_if_empty()
      .push("spreadsheets")
      .extend(tail);
    Ok(url)
  }

  async fn check(&self, response: Response) -> Result<Response, LogStoreError> {
    match response.status() {
      status if status.is_success() => Ok(response),
      StatusCode::UNAUTHORIZED => Err(LogStoreError::NotAuthenticated),
      StatusCode::FORBIDDEN => Err(LogStoreError::PermissionDenied(self.spreadsheet.id().to_string())),
      StatusCode::NOT_FOUND => Err(LogStoreError::SpreadsheetNotFound(self.spreadsheet.id().to_string())),
      status => {
        let message = response.text().await.unwrap_or_default();
        Err(LogStoreError::Api {
          status: status.as_u16(),
          message,
        })
      }
    }
  }

  async fn worksheet_titles(&self) -> Result<Vec<String>, LogStoreError> {
    let mut url = self.endpoint(&[self.spreadsheet.id()])?;
    url.query_pairs_mut().append_pair("fields", "sheets.properties.title");

    let response = self
      .http
      .get(url)
      .bearer_auth(&self.config.access_token)
      .send()
      .await?;
    let meta: SpreadsheetMeta = self.check(response).await?.json().await?;
    Ok(meta.sheets.into_iter().map(|s| s.properties.title).collect())
  }

  async fn add_worksheet(&self, worksheet: &str) -> Result<(), LogStoreError> {
    let url = self.endpoint(&[&format!("{}:batchUpdate", self.spreadsheet.id())])?;
    let body = json!({
      "requests": [{
        "addSheet": {
          "properties": {
            "title": worksheet,
            "gridProperties": {
              "rowCount": NEW_SHEET_ROWS,
              "columnCount": NEW_SHEET_COLUMNS
            }
          }
        }
      }]
    });

    let response = self
      .http
      .post(url)
      .bearer_auth(&self.config.access_token)
      .json(&body)
      .send()
      .await?;
    self.check(response).await?;
    Ok(())
  }
}

/// A1 range for a whole worksheet: the title quoted, embedded quotes doubled
fn sheet_range(worksheet: &str) -> String {
  format!("'{}'", worksheet.replace('\'', "''"))
}

#[async_trait]
impl LogStore for SheetsClient {
  async fn open_or_create(&self, worksheet: &str) -> Result<(), LogStoreError> {
    let titles = self.worksheet_titles().await?;
    if titles.iter().any(|t| t == worksheet) {
      return Ok(());
    }

    tracing::info!(worksheet, spreadsheet = self.spreadsheet.id(), "Creating worksheet");
    self.add_worksheet(worksheet).await?;
    self
      .append_row(worksheet, LOG_HEADER.iter().map(|h| h.to_string()).collect())
      .await
  }

  async fn append_row(&self, worksheet: &str, row: Vec<String>) -> Result<(), LogStoreError> {
    let mut url = self.endpoint(&[self.spreadsheet.id(), "values", &format!("{}:append", sheet_range(worksheet))])?;
    url
      .query_pairs_mut()
      .append_pair("valueInputOption", "RAW")
      .append_pair("insertDataOption", "INSERT_ROWS");

    let response = self
      .http
      .post(url)
      .bearer_auth(&self.config.access_token)
      .json(&json!({ "values": [row] }))
      .send()
      .await?;
    self.check(response).await?;
    Ok(())
  }

  async fn read_all_rows(&self, worksheet: &str) -> Result<Vec<Vec<String>>, LogStoreError> {
    let url = self.endpoint(&[self.spreadsheet.id(), "values", &sheet_range(worksheet)])?;

    let response = self
      .http
      .get(url)
      .bearer_auth(&self.config.access_token)
      .send()
      .await?;
    let range: ValueRange = self.check(response).await?.json().await?;

    Ok(
      range
        .values
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect(),
    )
  }
}

fn cell_text(value: serde_json::Value) -> String {
  match value {
    serde_json::Value::String(s) => s,
    serde_json::Value::Null => String::new(),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{date, mock_log_entry, InMemoryLogStore};
  use mockito::{Matcher, Server};
  use serial_test::serial;

  fn client_for(server: &Server) -> SheetsClient {
    SheetsClient::new(
      SheetsConfig {
        access_token: "test-token".into(),
        api_base: server.url(),
      },
      SpreadsheetRef::parse("sheet123").unwrap(),
    )
  }

  #[test]
  fn test_parse_reference_from_url() {
    let r = SpreadsheetRef::parse("https://docs.google.com/spreadsheets/d/1AbC-d_9/edit#gid=0").unwrap();
    assert_eq!(r.id(), "1AbC-d_9");
  }

  #[test]
  fn test_parse_reference_bare_id() {
    assert_eq!(SpreadsheetRef::parse("  1AbC-d_9 ").unwrap().id(), "1AbC-d_9");
  }

  #[test]
  fn test_parse_reference_rejects_garbage() {
    assert!(matches!(SpreadsheetRef::parse(""), Err(LogStoreError::InvalidReference(_))));
    assert!(SpreadsheetRef::parse("https://example.com/nothing/here").is_err());
    assert!(SpreadsheetRef::parse("not an id").is_err());
  }

  #[test]
  fn test_sheet_range_quotes_title() {
    assert_eq!(sheet_range("AthleteLogs"), "'AthleteLogs'");
    assert_eq!(sheet_range("A1"), "'A1'");
    assert_eq!(sheet_range("Kylie's log!"), "'Kylie''s log!'");
  }

  #[tokio::test]
  async fn test_sheets_reads_title_that_looks_like_a_cell() {
    let mut server = Server::new_async().await;
    let mock = server
      .mock("GET", "/spreadsheets/sheet123/values/'B2:C3'")
      .with_status(200)
      .with_body(r#"{"values":[["Date"]]}"#)
      .create_async()
      .await;

    let client = client_for(&server);
    assert_eq!(client.read_all_rows("B2:C3").await.unwrap(), vec![vec!["Date"]]);
    mock.assert_async().await;
  }

  #[tokio::test]
  async fn test_sheets_append_stores_values_raw() {
    let mut server = Server::new_async().await;
    let append = server
      .mock("POST", "/spreadsheets/sheet123/values/'AthleteLogs':append")
      .match_query(Matcher::UrlEncoded("valueInputOption".into(), "RAW".into()))
      .match_body(Matcher::Json(json!({ "values": [["=1+1", "-2 reps short"]] })))
      .with_status(200)
      .with_body("{}")
      .create_async()
      .await;

    let client = client_for(&server);
    client
      .append_row(DEFAULT_WORKSHEET, vec!["=1+1".into(), "-2 reps short".into()])
      .await
      .unwrap();
    append.assert_async().await;
  }

  #[test]
  #[serial]
  fn test_config_from_env() {
    temp_env::with_vars(
      [
        ("SHEETS_ACCESS_TOKEN", Some("abc")),
        ("SHEETS_API_BASE", Some("http://localhost:9999")),
      ],
      || {
        let config = SheetsConfig::from_env().unwrap();
        assert_eq!(config.access_token, "abc");
        assert_eq!(config.api_base, "http://localhost:9999");
      },
    );
  }

  #[test]
  #[serial]
  fn test_config_defaults_api_base() {
    temp_env::with_vars(
      [
        ("SHEETS_ACCESS_TOKEN", Some("abc")),
        ("SHEETS_API_BASE", None),
      ],
      || {
        let config = SheetsConfig::from_env().unwrap();
        assert_eq!(config.api_base, SHEETS_API_BASE);
      },
    );
  }

  #[test]
  #[serial]
  fn test_config_missing_token() {
    temp_env::with_var_unset("SHEETS_ACCESS_TOKEN", || {
      let err = SheetsConfig::from_env().unwrap_err();
      assert_eq!(err.to_string(), "Missing configuration: SHEETS_ACCESS_TOKEN");
    });
  }

  #[test]
  fn test_entry_validation() {
    let mut entry = mock_log_entry("Kylie", 6);
    assert!(entry.validate().is_ok());
    entry.rpe = 11;
    assert!(matches!(entry.validate(), Err(LogStoreError::InvalidEntry(_))));
    entry.rpe = 5;
    entry.athlete = "  ".into();
    assert!(entry.validate().is_err());
  }

  #[test]
  fn test_entry_record_roundtrip_by_header_name() {
    let entry = mock_log_entry("Kylie", 7);
    // Columns shuffled: lookup goes by header, not position
    let header: Vec<String> = ["Notes", "Date", "Athlete", "Session", "RPE", "Fatigue"]
      .iter()
      .map(|s| s.to_string())
      .collect();
    let row = entry.to_row();
    let shuffled = vec![
      row[5].clone(),
      row[0].clone(),
      row[1].clone(),
      row[2].clone(),
      row[3].clone(),
      row[4].clone(),
    ];
    assert_eq!(LogEntry::from_record(&header, &shuffled), Some(entry));
  }

  #[test]
  fn test_entry_from_short_row_without_notes() {
    let header: Vec<String> = LOG_HEADER.iter().map(|s| s.to_string()).collect();
    let row: Vec<String> = ["2026-01-12", "Kylie", "Mon", "6", "5"]
      .iter()
      .map(|s| s.to_string())
      .collect();
    let entry = LogEntry::from_record(&header, &row).unwrap();
    assert_eq!(entry.date, date(2026, 1, 12));
    assert_eq!(entry.notes, "");
  }

  #[tokio::test]
  async fn test_log_session_creates_worksheet_once() {
    let store = InMemoryLogStore::default();
    log_session(&store, DEFAULT_WORKSHEET, &mock_log_entry("Kylie", 6)).await.unwrap();
    log_session(&store, DEFAULT_WORKSHEET, &mock_log_entry("Kylie", 8)).await.unwrap();

    let rows = store.read_all_rows(DEFAULT_WORKSHEET).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], LOG_HEADER);
    assert_eq!(rows[2][3], "8");
  }

  #[tokio::test]
  async fn test_log_session_rejects_invalid_entry_before_io() {
    let store = InMemoryLogStore::default();
    let mut entry = mock_log_entry("Kylie", 6);
    entry.fatigue = 0;
    assert!(log_session(&store, DEFAULT_WORKSHEET, &entry).await.is_err());
    assert!(store.worksheet_names().is_empty());
  }

  #[tokio::test]
  async fn test_recent_entries_filters_and_takes_tail() {
    let store = InMemoryLogStore::default();
    for (athlete, rpe) in [("Kylie", 5), ("Sam", 6), ("kylie B", 7), ("Kylie", 8)] {
      log_session(&store, DEFAULT_WORKSHEET, &mock_log_entry(athlete, rpe)).await.unwrap();
    }
    store.push_raw(DEFAULT_WORKSHEET, vec!["garbage".into()]);

    let entries = recent_entries(&store, DEFAULT_WORKSHEET, Some("KYLIE"), 2).await.unwrap();
    let rpes: Vec<u8> = entries.iter().map(|e| e.rpe).collect();
    assert_eq!(rpes, vec![7, 8]);

    let all = recent_entries(&store, DEFAULT_WORKSHEET, None, 50).await.unwrap();
    assert_eq!(all.len(), 4);
  }

  #[tokio::test]
  async fn test_recent_entries_empty_sheet() {
    let store = InMemoryLogStore::default();
    let entries = recent_entries(&store, "Fresh", None, 10).await.unwrap();
    assert!(entries.is_empty());
  }

  #[tokio::test]
  async fn test_sheets_open_existing_worksheet() {
    let mut server = Server::new_async().await;
    let meta = server
      .mock("GET", "/spreadsheets/sheet123")
      .match_query(Matcher::UrlEncoded("fields".into(), "sheets.properties.title".into()))
      .match_header("authorization", "Bearer test-token")
      .with_status(200)
      .with_header("content-type", "application/json")
      .with_body(r#"{"sheets":[{"properties":{"title":"AthleteLogs"}}]}"#)
      .create_async()
      .await;

    let client = client_for(&server);
    client.open_or_create(DEFAULT_WORKSHEET).await.unwrap();
    meta.assert_async().await;
  }

  #[tokio::test]
  async fn test_sheets_creates_missing_worksheet_with_header() {
    let mut server = Server::new_async().await;
    let meta = server
      .mock("GET", "/spreadsheets/sheet123")
      .match_query(Matcher::Any)
      .with_status(200)
      .with_body(r#"{"sheets":[{"properties":{"title":"Sheet1"}}]}"#)
      .create_async()
      .await;
    let add = server
      .mock("POST", "/spreadsheets/sheet123:batchUpdate")
      .match_body(Matcher::AllOf(vec![
        Matcher::Regex("addSheet".into()),
        Matcher::Regex(r#""title":"AthleteLogs""#.into()),
      ]))
      .with_status(200)
      .with_body("{}")
      .create_async()
      .await;
    let header = server
      .mock("POST", "/spreadsheets/sheet123/values/'AthleteLogs':append")
      .match_query(Matcher::UrlEncoded("valueInputOption".into(), "RAW".into()))
      .match_body(Matcher::Json(json!({
        "values": [["Date", "Athlete", "Session", "RPE", "Fatigue", "Notes"]]
      })))
      .with_status(200)
      .with_body("{}")
      .create_async()
      .await;

    let client = client_for(&server);
    client.open_or_create(DEFAULT_WORKSHEET).await.unwrap();
    meta.assert_async().await;
    add.assert_async().await;
    header.assert_async().await;
  }

  #[tokio::test]
  async fn test_sheets_read_all_rows_stringifies_cells() {
    let mut server = Server::new_async().await;
    let mock = server
      .mock("GET", "/spreadsheets/sheet123/values/'AthleteLogs'")
      .with_status(200)
      .with_body(
        r#"{"range":"AthleteLogs!A1:F2","values":[
          ["Date","Athlete","Session","RPE","Fatigue","Notes"],
          ["2026-01-12","Kylie","Mon",6,5]
        ]}"#,
      )
      .create_async()
      .await;

    let client = client_for(&server);
    let rows = client.read_all_rows(DEFAULT_WORKSHEET).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["2026-01-12", "Kylie", "Mon", "6", "5"]);
    mock.assert_async().await;
  }

  #[tokio::test]
  async fn test_sheets_empty_range_has_no_rows() {
    let mut server = Server::new_async().await;
    server
      .mock("GET", "/spreadsheets/sheet123/values/'AthleteLogs'")
      .with_status(200)
      .with_body(r#"{"range":"AthleteLogs!A1:Z1000"}"#)
      .create_async()
      .await;

    let client = client_for(&server);
    assert!(client.read_all_rows(DEFAULT_WORKSHEET).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_sheets_status_errors_are_distinct() {
    let mut server = Server::new_async().await;
    let client = client_for(&server);

    let unauthorized = server
      .mock("GET", "/spreadsheets/sheet123/values/'A'")
      .with_status(401)
      .create_async()
      .await;
    let forbidden = server
      .mock("GET", "/spreadsheets/sheet123/values/'B'")
      .with_status(403)
      .create_async()
      .await;
    let missing = server
      .mock("GET", "/spreadsheets/sheet123/values/'C'")
      .with_status(404)
      .create_async()
      .await;
    let broken = server
      .mock("GET", "/spreadsheets/sheet123/values/'D'")
      .with_status(500)
      .with_body("backend exploded")
      .create_async()
      .await;

    assert!(matches!(client.read_all_rows("A").await, Err(LogStoreError::NotAuthenticated)));
    assert!(matches!(client.read_all_rows("B").await, Err(LogStoreError::PermissionDenied(_))));
    assert!(matches!(client.read_all_rows("C").await, Err(LogStoreError::SpreadsheetNotFound(_))));
    match client.read_all_rows("D").await {
      Err(LogStoreError::Api { status, message }) => {
        assert_eq!(status, 500);
        assert_eq!(message, "backend exploded");
      }
      other => panic!("expected API error, got {:?}", other),
    }

    unauthorized.assert_async().await;
    forbidden.assert_async().await;
    missing.assert_async().await;
    broken.assert_async().await;
  }

  #[tokio::test]
  async fn test_sheets_append_entry_through_log_session() {
    let mut server = Server::new_async().await;
    server
      .mock("GET", "/spreadsheets/sheet123")
      .match_query(Matcher::Any)
      .with_status(200)
      .with_body(r#"{"sheets":[{"properties":{"title":"AthleteLogs"}}]}"#)
      .create_async()
      .await;
    let append = server
      .mock("POST", "/spreadsheets/sheet123/values/'AthleteLogs':append")
      .match_query(Matcher::AllOf(vec![
        Matcher::UrlEncoded("valueInputOption".into(), "RAW".into()),
        Matcher::UrlEncoded("insertDataOption".into(), "INSERT_ROWS".into()),
      ]))
      .match_body(Matcher::Json(json!({
        "values": [["2026-01-12", "Kylie", "Mon", "6", "5", "Felt sharp"]]
      })))
      .with_status(200)
      .with_body("{}")
      .create_async()
      .await;

    let client = client_for(&server);
    log_session(&client, DEFAULT_WORKSHEET, &mock_log_entry("Kylie", 6)).await.unwrap();
    append.assert_async().await;
  }
}
