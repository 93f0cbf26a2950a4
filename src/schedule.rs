//! Schedule Builder
//!
//! Walks the Mondays of a season, resolves each week's phase, and assembles
//! one plan row per week with its rotation, slot prefixes and volume
//! modifier. Pure and synchronous: the same config always gives the same
//! rows.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::config::SeasonConfig;
use crate::models::WeekRow;
use crate::phase::{phase_for, segment, Phase};
use crate::rotation;
use crate::week::Day;

/// ---------------------------------------------------------------------------
/// Volume constants
/// ---------------------------------------------------------------------------

/// Daily bike commute (km) from which legs count as pre-loaded
const COMMUTE_THRESHOLD_KM: f64 = 30.0;
const COMMUTE_FACTOR: f64 = 0.9;
/// Athletes younger than this train at reduced volume
const ADULT_AGE: u32 = 16;
const YOUTH_FACTOR: f64 = 0.95;
const TAPER_VOLUME: f64 = 0.5;
const RECOVERY_VOLUME: f64 = 0.4;

/// Volume modifier for a week in `phase_name`.
///
/// Taper weeks are exactly 0.5 and transition/post-season weeks exactly 0.4;
/// every other week uses the commute and age factors rounded to 2 decimals.
pub fn volume_modifier(phase_name: &str, bike_km_per_day: f64, age: u32) -> f64 {
  if phase_name.contains("Transition") || phase_name.contains("Post-season") {
    return RECOVERY_VOLUME;
  }
  if phase_name.contains("Taper") {
    return TAPER_VOLUME;
  }

  let commute_factor = if bike_km_per_day >= COMMUTE_THRESHOLD_KM {
    COMMUTE_FACTOR
  } else {
    1.0
  };
  let age_factor = if age >= ADULT_AGE { 1.0 } else { YOUTH_FACTOR };

  ((commute_factor * age_factor) * 100.0).round() / 100.0
}

/// Every Monday in `[start, end]`
pub fn weekly_anchors(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
  let days_to_monday = (7 - start.weekday().num_days_from_monday()) % 7;
  let first = start.checked_add_signed(Duration::days(days_to_monday as i64));

  std::iter::successors(first, |monday| monday.checked_add_signed(Duration::days(7)))
    .take_while(move |monday| *monday <= end)
}

/// Build the season plan.
///
/// Weeks whose Monday falls in no phase are dropped; the rotation index still
/// counts them so the rotation stays aligned with the calendar.
pub fn build(config: &SeasonConfig) -> Vec<WeekRow> {
  let phases = segment(
    config.season_start,
    config.season_end,
    config.peak_indoor_date,
    config.peak_outdoor_date,
  );
  warn_empty_phases(&phases);

  let mut rows = Vec::new();
  let mut skipped = 0usize;

  for (week_index, monday) in weekly_anchors(config.season_start, config.season_end).enumerate() {
    let Some(phase) = phase_for(&phases, monday) else {
      skipped += 1;
      tracing::debug!(week = %monday, "No phase covers week, skipping");
      continue;
    };

    let per_day_text: BTreeMap<Day, String> = Day::ALL
      .iter()
      .map(|day| {
        let workout = rotation::select(*day, week_index);
        (*day, config.schedule.day_text(*day, workout))
      })
      .collect();

    let row = WeekRow {
      week_start_date: monday,
      phase_name: phase.name.clone(),
      focus: phase.focus.clone(),
      per_day_text,
      volume_modifier: volume_modifier(&phase.name, config.bike_km_per_day, config.age),
    };
    tracing::debug!(week = %monday, phase = %row.phase_name, volume = row.volume_modifier, "Planned week");
    rows.push(row);
  }

  if skipped > 0 {
    tracing::warn!(skipped, "Weeks outside every phase were left out of the plan");
  }
  tracing::info!(
    athlete = %config.athlete.name,
    weeks = rows.len(),
    "Built season plan"
  );

  rows
}

fn warn_empty_phases(phases: &[Phase]) {
  for phase in phases.iter().filter(|p| p.is_empty()) {
    tracing::warn!(
      phase = %phase.name,
      start = %phase.start_date,
      end = %phase.end_date,
      "Phase is empty for these peak dates"
    );
  }
}
