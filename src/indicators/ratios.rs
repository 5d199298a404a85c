//! Volume ratios used to flag unusual options activity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How unusual a volume ratio is, from [`activity_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Ratio of 1.5 or less.
    Normal,
    /// Above 1.5.
    Moderate,
    /// Above 2.
    High,
    /// Above 3.
    Extreme,
}

impl ActivityLevel {
    /// Upper-case label as shown on the volume radar.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Normal => "NORMAL",
            ActivityLevel::Moderate => "MODERATE",
            ActivityLevel::High => "HIGH",
            ActivityLevel::Extreme => "EXTREME",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Put volume over call volume, `0` when there is no call volume.
#[must_use]
pub fn put_call_ratio(put_volume: f64, call_volume: f64) -> f64 {
    if call_volume == 0.0 {
        0.0
    } else {
        put_volume / call_volume
    }
}

/// Current volume as a multiple of its average, `0` when the average is zero.
#[must_use]
pub fn volume_ratio(current_volume: f64, average_volume: f64) -> f64 {
    if average_volume == 0.0 {
        0.0
    } else {
        current_volume / average_volume
    }
}

/// Buckets a [`volume_ratio`] into an activity level.
///
/// Band edges belong to the lower level: a ratio of exactly 2 is `Moderate`.
/// A `NaN` ratio is `Normal`.
#[must_use]
pub fn activity_level(ratio: f64) -> ActivityLevel {
    if ratio > 3.0 {
        ActivityLevel::Extreme
    } else if ratio > 2.0 {
        ActivityLevel::High
    } else if ratio > 1.5 {
        ActivityLevel::Moderate
    } else {
        ActivityLevel::Normal
    }
}
