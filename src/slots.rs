//! Time-Slot Annotator
//!
//! Prefixes a day's workout with where and when it happens, either from
//! slots the coach entered by hand or from the built-in weekly templates.

use chrono::NaiveTime;
use std::collections::BTreeMap;

use crate::week::Day;

/// Separator between a manual slot prefix and the workout text
pub const PREFIX_SEPARATOR: &str = " — ";

/// Sessions/week used when the configured count has no template
pub const DEFAULT_SESSIONS_PER_WEEK: u32 = 5;

// ---------------------------------------------------------------------------
/// Slot sources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
  pub start: NaiveTime,
  pub end: NaiveTime,
  pub location: String,
}

impl TimeSlot {
  /// "20:00-21:15 @ Statina"
  pub fn label(&self) -> String {
    format!(
      "{}-{} @ {}",
      self.start.format("%H:%M"),
      self.end.format("%H:%M"),
      self.location
    )
  }
}

/// Hand-entered slots per weekday, in the order they happen
pub type ManualSlots = BTreeMap<Day, Vec<TimeSlot>>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotSource {
  #[default]
  NoPrefix,
  Manual(ManualSlots),
  Auto { sessions_per_week: u32 },
}

impl SlotSource {
  /// Name used for this source in config files
  pub fn mode_name(&self) -> &'static str {
    match self {
      SlotSource::NoPrefix => "none",
      SlotSource::Manual(_) => "manual",
      SlotSource::Auto { .. } => "auto",
    }
  }

  /// Workout text with this source's prefix for `day`, if any
  pub fn decorate(&self, day: Day, workout: &str) -> String {
    let prefix = annotate(day, self);
    if prefix.is_empty() {
      return workout.to_string();
    }
    match self {
      // Auto prefixes carry their own separator
      SlotSource::Auto { .. } => format!("{}{}", prefix, workout),
      _ => format!("{}{}{}", prefix, PREFIX_SEPARATOR, workout),
    }
  }
}

// ---------------------------------------------------------------------------
/// Built-in weekly templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct TemplateSession {
  location: &'static str,
  minutes: u32,
}

const fn session(location: &'static str, minutes: u32) -> Option<TemplateSession> {
  Some(TemplateSession { location, minutes })
}

type WeekTemplate = [Option<TemplateSession>; 7];

const FOUR_SESSIONS: WeekTemplate = [
  session("Club/Track", 75),
  None,
  session("Home (core)", 45),
  session("Track", 90),
  session("Track", 60),
  None,
  None,
];

const FIVE_SESSIONS: WeekTemplate = [
  session("Statina/Club", 75),
  session("Track", 60),
  session("Home (core)", 60),
  session("Papendal/Track", 105),
  session("Track", 60),
  None,
  None,
];

const SIX_SESSIONS: WeekTemplate = [
  session("Track", 75),
  session("Track", 60),
  session("Home (core)", 60),
  session("Track", 105),
  session("Track", 60),
  session("Track (optional)", 90),
  None,
];

fn template_for(sessions_per_week: u32) -> &'static WeekTemplate {
  match sessions_per_week {
    4 => &FOUR_SESSIONS,
    6 => &SIX_SESSIONS,
    _ => &FIVE_SESSIONS,
  }
}

// ---------------------------------------------------------------------------
/// Annotation
// ---------------------------------------------------------------------------

/// Location/time prefix for `day`; empty when the source has nothing for it.
///
/// Manual prefixes are the joined slot labels. Auto prefixes end with the
/// separator already: `"(@ Track, ~60 min) — "`.
pub fn annotate(day: Day, source: &SlotSource) -> String {
  match source {
    SlotSource::NoPrefix => String::new(),
    SlotSource::Manual(slots) => slots
      .get(&day)
      .map(|day_slots| {
        day_slots
          .iter()
          .map(TimeSlot::label)
          .collect::<Vec<_>>()
          .join(" + ")
      })
      .unwrap_or_default(),
    SlotSource::Auto { sessions_per_week } => match template_for(*sessions_per_week)[day.index()] {
      Some(t) if t.minutes > 0 => format!("(@ {}, ~{} min){}", t.location, t.minutes, PREFIX_SEPARATOR),
      _ => String::new(),
    },
  }
}
