//! Weekly Rotation Selector
//!
//! Four canned sessions per weekday, cycled by week index.

use crate::week::Day;

/// Number of weeks before the rotation repeats
pub const ROTATION_PERIOD: usize = 4;

/// Indexed by `Day::index()`, then by rotation index
const ROTATIONS: [[&str; ROTATION_PERIOD]; 7] = [
  // Mon
  [
    "Warm-up + drills; Starts/accelerations; Core",
    "Warm-up + drills; Accel 30–40m; Relaxed 60m; Core",
    "Warm-up + drills; Accel 30m x8; Med ball; Core",
    "Warm-up + drills; Blocks; Accel; Short 50–60m; Core",
  ],
  // Tue
  [
    "Drills; Flying 20–30m; Light plyo",
    "Drills; Relaxed strides; Bounding; Core",
    "Drills; Accel 30m; Hurdle hops; Med ball",
    "Drills; Flying 20–30m; Plyo circuit",
  ],
  // Wed
  [
    "Bodyweight circuit (legs + push + core)",
    "Bands (rows, pull-aparts) + glutes + core",
    "Single-leg / balance strength + core",
    "Split squats + pull-aparts + stability core",
  ],
  // Thu
  [
    "Key session: special endurance / race sim",
    "Key session: bend runs / race rhythm",
    "Key session: 150–200m @90–95% + starts",
    "Key session: race pace mix (100/200)",
  ],
  // Fri
  [
    "Flying 20–30m; Blocks; Explosive circuit",
    "Accel 20–40m; Jump squats; Core",
    "Accel 20–30m; Bounding; Med ball",
    "Relaxed 40–60m; Blocks; Explosive lunges; Core",
  ],
  // Sat
  [
    "Optional sprint (if fresh) or active recovery",
    "Optional: relaxed 150–200m + stretch",
    "Optional: accel + light plyo",
    "Optional: short race sim; or rest",
  ],
  // Sun
  [
    "Rest / Competition",
    "Rest / Mobility",
    "Rest / Easy bike",
    "Rest",
  ],
];

/// Workout text for `day` in the week at `week_index` (0-based from the first anchor)
pub fn select(day: Day, week_index: usize) -> &'static str {
  ROTATIONS[day.index()][week_index % ROTATION_PERIOD]
}
