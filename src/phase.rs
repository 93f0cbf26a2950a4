//! Phase Segmenter
//!
//! Splits a season into nine training phases anchored on the indoor and
//! outdoor peaks. Boundaries live in a declarative table of (anchor, day
//! offset) pairs so every cut-off can be audited in one place.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
/// Boundary table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
  SeasonStart,
  SeasonEnd,
  PeakIndoor,
  PeakOutdoor,
}

#[derive(Debug, Clone, Copy)]
struct Boundary {
  anchor: Anchor,
  offset_days: i64,
}

const fn at(anchor: Anchor, offset_days: i64) -> Boundary {
  Boundary { anchor, offset_days }
}

struct PhaseRule {
  name: &'static str,
  focus: &'static str,
  start: Boundary,
  end: Boundary,
}

const PHASE_TABLE: [PhaseRule; 9] = [
  PhaseRule {
    name: "Phase 1 - General Prep",
    focus: "Build foundation: sprint drills, general strength",
    start: at(Anchor::SeasonStart, 0),
    end: at(Anchor::PeakIndoor, -84),
  },
  PhaseRule {
    name: "Phase 2 - Specific Prep",
    focus: "Acceleration, max velocity, introduce 150m runs",
    start: at(Anchor::PeakIndoor, -83),
    end: at(Anchor::PeakIndoor, -35),
  },
  PhaseRule {
    name: "Phase 3 - Pre-Competition (Indoor)",
    focus: "Sharpening, block starts, race sim (60/200)",
    start: at(Anchor::PeakIndoor, -34),
    end: at(Anchor::PeakIndoor, -7),
  },
  PhaseRule {
    name: "Phase 4 - Taper & Peak 1",
    focus: "Taper into indoor peak",
    start: at(Anchor::PeakIndoor, -6),
    end: at(Anchor::PeakIndoor, 0),
  },
  PhaseRule {
    name: "Phase 5 - Transition/Recovery",
    focus: "Active recovery, variation",
    start: at(Anchor::PeakIndoor, 1),
    end: at(Anchor::PeakIndoor, 14),
  },
  PhaseRule {
    name: "Phase 6 - Outdoor Build",
    focus: "100/200m base, special endurance, bends",
    start: at(Anchor::PeakIndoor, 15),
    end: at(Anchor::PeakOutdoor, -49),
  },
  PhaseRule {
    name: "Phase 7 - Pre-Competition Outdoor",
    focus: "Race-specific prep (100/200)",
    start: at(Anchor::PeakOutdoor, -48),
    end: at(Anchor::PeakOutdoor, -14),
  },
  PhaseRule {
    name: "Phase 8 - Taper & Peak 2",
    focus: "Taper into outdoor peak",
    start: at(Anchor::PeakOutdoor, -13),
    end: at(Anchor::PeakOutdoor, 0),
  },
  PhaseRule {
    name: "Phase 9 - Post-season Reset",
    focus: "Active recovery & reset",
    start: at(Anchor::PeakOutdoor, 1),
    end: at(Anchor::SeasonEnd, 0),
  },
];

// ---------------------------------------------------------------------------
/// Phase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
  pub name: String,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub focus: String,
}

impl Phase {
  /// Inclusive on both ends; an inverted phase contains nothing
  pub fn contains(&self, date: NaiveDate) -> bool {
    self.start_date <= date && date <= self.end_date
  }

  /// True when the peaks are too close together for this phase to exist
  pub fn is_empty(&self) -> bool {
    self.start_date > self.end_date
  }
}

struct SeasonAnchors {
  season_start: NaiveDate,
  season_end: NaiveDate,
  peak_indoor: NaiveDate,
  peak_outdoor: NaiveDate,
}

impl SeasonAnchors {
  fn resolve(&self, boundary: Boundary) -> NaiveDate {
    let base = match boundary.anchor {
      Anchor::SeasonStart => self.season_start,
      Anchor::SeasonEnd => self.season_end,
      Anchor::PeakIndoor => self.peak_indoor,
      Anchor::PeakOutdoor => self.peak_outdoor,
    };
    // Saturate at the calendar limits instead of overflowing
    base
      .checked_add_signed(Duration::days(boundary.offset_days))
      .unwrap_or(if boundary.offset_days < 0 {
        NaiveDate::MIN
      } else {
        NaiveDate::MAX
      })
  }
}

// ---------------------------------------------------------------------------
/// Segmentation
// ---------------------------------------------------------------------------

/// Compute the nine phases of a season, in table order.
///
/// Phases are returned even when inverted (`start_date > end_date`) so callers
/// can report them; such phases never match a date.
pub fn segment(
  season_start: NaiveDate,
  season_end: NaiveDate,
  peak_indoor: NaiveDate,
  peak_outdoor: NaiveDate,
) -> Vec<Phase> {
  let anchors = SeasonAnchors {
    season_start,
    season_end,
    peak_indoor,
    peak_outdoor,
  };

  PHASE_TABLE
    .iter()
    .map(|rule| Phase {
      name: rule.name.to_string(),
      start_date: anchors.resolve(rule.start),
      end_date: anchors.resolve(rule.end),
      focus: rule.focus.to_string(),
    })
    .collect()
}

/// First phase (in table order) containing `date`
pub fn phase_for(phases: &[Phase], date: NaiveDate) -> Option<&Phase> {
  phases.iter().find(|phase| phase.contains(date))
}

/// Phase names in table order
#[cfg(test)]
fn phase_names() -> impl Iterator<Item = &'static str> {
  PHASE_TABLE.iter().map(|rule| rule.name)
}
