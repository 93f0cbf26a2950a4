//! Season configuration
//!
//! `SeasonConfigFile` is the JSON layout coaches save and share (string dates,
//! schedule mode as text). `SeasonConfig` is the typed form the planner works
//! on. All format errors surface while converting one into the other.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{PlanError, Result};
use crate::slots::{ManualSlots, SlotSource, TimeSlot, DEFAULT_SESSIONS_PER_WEEK};
use crate::week::Day;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const DEFAULT_AGE: u32 = 15;

/// ---------------------------------------------------------------------------
/// File layout
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonConfigFile {
  pub season_start: String,
  pub season_end: String,
  #[serde(default)]
  pub athlete_name: String,
  #[serde(default = "default_age")]
  pub age: u32,
  #[serde(default)]
  pub sex: String,
  /// Personal bests in seconds, keyed by event ("60m")
  #[serde(default)]
  pub pbs: BTreeMap<String, f64>,
  #[serde(default)]
  pub bike_km_per_day: f64,
  pub peaks: PeaksFile,
  #[serde(default)]
  pub events: Vec<String>,
  #[serde(default)]
  pub schedule: ScheduleFile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeaksFile {
  /// First date anchors the phases; later dates are extra championship days
  pub indoor_peak_dates: Vec<String>,
  pub outdoor_peak_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleFile {
  #[serde(default = "default_mode")]
  pub mode: String,
  #[serde(default = "default_true")]
  pub include_time_prefix: bool,
  #[serde(default = "default_sessions")]
  pub sessions_per_week: u32,
  #[serde(default)]
  pub slots: BTreeMap<String, Vec<SlotFile>>,
}

impl Default for ScheduleFile {
  fn default() -> Self {
    Self {
      mode: default_mode(),
      include_time_prefix: true,
      sessions_per_week: DEFAULT_SESSIONS_PER_WEEK,
      slots: BTreeMap::new(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotFile {
  pub start: String,
  pub end: String,
  #[serde(default)]
  pub location: String,
}

fn default_age() -> u32 {
  DEFAULT_AGE
}

fn default_mode() -> String {
  "none".to_string()
}

fn default_true() -> bool {
  true
}

fn default_sessions() -> u32 {
  DEFAULT_SESSIONS_PER_WEEK
}

impl SeasonConfigFile {
  /// Starter config: the planner form's defaults
  pub fn template() -> Self {
    let pbs = [("60m", 8.58), ("100m", 13.48), ("200m", 29.09)]
      .into_iter()
      .map(|(event, seconds)| (event.to_string(), seconds))
      .collect();

    Self {
      season_start: "2025-09-01".into(),
      season_end: "2026-07-01".into(),
      athlete_name: "Kylie".into(),
      age: DEFAULT_AGE,
      sex: "F".into(),
      pbs,
      bike_km_per_day: 32.0,
      peaks: PeaksFile {
        indoor_peak_dates: vec!["2026-02-21".into(), "2026-02-22".into()],
        outdoor_peak_date: "2026-06-28".into(),
      },
      events: vec!["60m".into(), "100m".into(), "200m".into()],
      schedule: ScheduleFile {
        mode: "manual".into(),
        include_time_prefix: true,
        sessions_per_week: DEFAULT_SESSIONS_PER_WEEK,
        slots: default_manual_slots(),
      },
    }
  }
}

/// Default weekly grid, Monday to Friday
pub fn default_manual_slots() -> BTreeMap<String, Vec<SlotFile>> {
  [
    (Day::Mon, "20:00", "21:15", "Statina"),
    (Day::Tue, "19:00", "20:00", "Track"),
    (Day::Wed, "17:00", "18:00", "Home (online)"),
    (Day::Thu, "16:30", "18:15", "Papendal"),
    (Day::Fri, "19:30", "20:30", "Track"),
  ]
  .into_iter()
  .map(|(day, start, end, location)| {
    (
      day.as_str().to_string(),
      vec![SlotFile {
        start: start.into(),
        end: end.into(),
        location: location.into(),
      }],
    )
  })
  .collect()
}

/// ---------------------------------------------------------------------------
/// Typed configuration
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AthleteProfile {
  pub name: String,
  pub sex: String,
  pub pbs: BTreeMap<String, f64>,
  pub events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
  pub source: SlotSource,
  /// When false, no mode adds a prefix
  pub include_time_prefix: bool,
}

impl Default for ScheduleConfig {
  fn default() -> Self {
    Self {
      source: SlotSource::NoPrefix,
      include_time_prefix: true,
    }
  }
}

impl ScheduleConfig {
  /// Workout text for a plan cell
  pub fn day_text(&self, day: Day, workout: &str) -> String {
    if self.include_time_prefix {
      self.source.decorate(day, workout)
    } else {
      workout.to_string()
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeasonConfigFile", into = "SeasonConfigFile")]
pub struct SeasonConfig {
  pub season_start: NaiveDate,
  pub season_end: NaiveDate,
  pub peak_indoor_date: NaiveDate,
  /// Further indoor championship days after the anchoring peak
  pub additional_indoor_peak_dates: Vec<NaiveDate>,
  pub peak_outdoor_date: NaiveDate,
  pub bike_km_per_day: f64,
  pub age: u32,
  pub athlete: AthleteProfile,
  pub schedule: ScheduleConfig,
}

impl SeasonConfig {
  pub fn from_json(json: &str) -> Result<Self> {
    let file: SeasonConfigFile = serde_json::from_str(json)?;
    Self::try_from(file)
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SeasonConfigFile::from(self))?)
  }

  pub fn load(path: &Path) -> Result<Self> {
    let json = fs::read_to_string(path)?;
    let config = Self::from_json(&json)?;
    tracing::info!(path = %path.display(), athlete = %config.athlete.name, "Loaded season config");
    Ok(config)
  }

  pub fn save(&self, path: &Path) -> Result<()> {
    fs::write(path, self.to_json()?)?;
    Ok(())
  }

  pub fn template() -> Result<Self> {
    Self::try_from(SeasonConfigFile::template())
  }

  /// Check the season and peak ordering.
  ///
  /// Planning never requires this to pass: out-of-range peaks only leave
  /// weeks without a phase, which the builder drops.
  pub fn validate(&self) -> Result<()> {
    if self.season_end < self.season_start {
      return Err(PlanError::InvalidRange(format!(
        "season_end {} is before season_start {}",
        self.season_end, self.season_start
      )));
    }

    let in_season = |d: NaiveDate| self.season_start <= d && d <= self.season_end;
    for (label, peak) in [
      ("indoor peak", self.peak_indoor_date),
      ("outdoor peak", self.peak_outdoor_date),
    ] {
      if !in_season(peak) {
        return Err(PlanError::InvalidRange(format!(
          "{} {} is outside the season {}..{}",
          label, peak, self.season_start, self.season_end
        )));
      }
    }

    if self.peak_outdoor_date < self.peak_indoor_date {
      return Err(PlanError::InvalidRange(format!(
        "outdoor peak {} is before indoor peak {}",
        self.peak_outdoor_date, self.peak_indoor_date
      )));
    }

    Ok(())
  }
}

/// ---------------------------------------------------------------------------
/// Conversions
/// ---------------------------------------------------------------------------

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
    .map_err(|e| PlanError::format(field, value, format!("expected YYYY-MM-DD ({})", e)))
}

fn parse_time(field: &str, value: &str) -> Result<NaiveTime> {
  NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
    .map_err(|e| PlanError::format(field, value, format!("expected HH:MM ({})", e)))
}

fn parse_slots(slots: &BTreeMap<String, Vec<SlotFile>>) -> Result<ManualSlots> {
  let mut parsed = ManualSlots::new();
  for (day_name, day_slots) in slots {
    let day: Day = day_name.parse()?;
    if parsed.contains_key(&day) {
      return Err(PlanError::format(
        "schedule.slots",
        day_name,
        format!("{} is listed more than once", day),
      ));
    }
    let field = format!("schedule.slots.{}", day);
    let typed = day_slots
      .iter()
      .map(|slot| {
        Ok(TimeSlot {
          start: parse_time(&format!("{}.start", field), &slot.start)?,
          end: parse_time(&format!("{}.end", field), &slot.end)?,
          location: slot.location.clone(),
        })
      })
      .collect::<Result<Vec<_>>>()?;
    parsed.insert(day, typed);
  }
  Ok(parsed)
}

fn parse_schedule(file: &ScheduleFile) -> Result<ScheduleConfig> {
  let source = match file.mode.trim().to_ascii_lowercase().as_str() {
    "none" | "" => SlotSource::NoPrefix,
    "manual" => SlotSource::Manual(parse_slots(&file.slots)?),
    "auto" => SlotSource::Auto {
      sessions_per_week: file.sessions_per_week,
    },
    _ => {
      return Err(PlanError::format(
        "schedule.mode",
        &file.mode,
        "expected none, manual or auto",
      ))
    }
  };

  Ok(ScheduleConfig {
    source,
    include_time_prefix: file.include_time_prefix,
  })
}

impl TryFrom<SeasonConfigFile> for SeasonConfig {
  type Error = PlanError;

  fn try_from(file: SeasonConfigFile) -> Result<Self> {
    let mut indoor = file
      .peaks
      .indoor_peak_dates
      .iter()
      .enumerate()
      .map(|(i, d)| parse_date(&format!("peaks.indoor_peak_dates[{}]", i), d));
    let peak_indoor_date = indoor
      .next()
      .ok_or_else(|| PlanError::format("peaks.indoor_peak_dates", "[]", "at least one date is required"))??;
    let additional_indoor_peak_dates = indoor.collect::<Result<Vec<_>>>()?;

    if !file.bike_km_per_day.is_finite() || file.bike_km_per_day < 0.0 {
      return Err(PlanError::format(
        "bike_km_per_day",
        file.bike_km_per_day.to_string(),
        "must be a non-negative number",
      ));
    }

    Ok(Self {
      season_start: parse_date("season_start", &file.season_start)?,
      season_end: parse_date("season_end", &file.season_end)?,
      peak_indoor_date,
      additional_indoor_peak_dates,
      peak_outdoor_date: parse_date("peaks.outdoor_peak_date", &file.peaks.outdoor_peak_date)?,
      bike_km_per_day: file.bike_km_per_day,
      age: file.age,
      schedule: parse_schedule(&file.schedule)?,
      athlete: AthleteProfile {
        name: file.athlete_name,
        sex: file.sex,
        pbs: file.pbs,
        events: file.events,
      },
    })
  }
}

impl From<&SeasonConfig> for SeasonConfigFile {
  fn from(config: &SeasonConfig) -> Self {
    let format_date = |d: &NaiveDate| d.format(DATE_FORMAT).to_string();

    let indoor_peak_dates = std::iter::once(&config.peak_indoor_date)
      .chain(config.additional_indoor_peak_dates.iter())
      .map(format_date)
      .collect();

    let (sessions_per_week, slots) = match &config.schedule.source {
      SlotSource::Auto { sessions_per_week } => (*sessions_per_week, BTreeMap::new()),
      SlotSource::Manual(manual) => (
        DEFAULT_SESSIONS_PER_WEEK,
        manual
          .iter()
          .map(|(day, day_slots)| {
            let files = day_slots
              .iter()
              .map(|slot| SlotFile {
                start: slot.start.format(TIME_FORMAT).to_string(),
                end: slot.end.format(TIME_FORMAT).to_string(),
                location: slot.location.clone(),
              })
              .collect();
            (day.as_str().to_string(), files)
          })
          .collect(),
      ),
      SlotSource::NoPrefix => (DEFAULT_SESSIONS_PER_WEEK, BTreeMap::new()),
    };

    Self {
      season_start: format_date(&config.season_start),
      season_end: format_date(&config.season_end),
      athlete_name: config.athlete.name.clone(),
      age: config.age,
      sex: config.athlete.sex.clone(),
      pbs: config.athlete.pbs.clone(),
      bike_km_per_day: config.bike_km_per_day,
      peaks: PeaksFile {
        indoor_peak_dates,
        outdoor_peak_date: format_date(&config.peak_outdoor_date),
      },
      events: config.athlete.events.clone(),
      schedule: ScheduleFile {
        mode: config.schedule.source.mode_name().to_string(),
        include_time_prefix: config.schedule.include_time_prefix,
        sessions_per_week,
        slots,
      },
    }
  }
}

impl From<SeasonConfig> for SeasonConfigFile {
  fn from(config: SeasonConfig) -> Self {
    SeasonConfigFile::from(&config)
  }
}
