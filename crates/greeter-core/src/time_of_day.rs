//! Time-of-day classification for the greeting phrase.
//!
//! Timestamps are classified in a fixed reference zone expressed as a whole
//! hour offset from UTC (Pacific standard time, UTC-8, by default). The
//! offset hour is normalised with a Euclidean remainder, so UTC 03:00 lands
//! on 19:00 local rather than on a negative hour.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Default reference zone offset (Pacific standard time).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -8;

/// Part of the day used to pick a greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Classifies an hour already expressed in the reference zone.
    ///
    /// Values outside `0..24` are wrapped first.
    pub fn from_local_hour(hour: i32) -> Self {
        match hour.rem_euclid(24) {
            h if h < 12 => Self::Morning,
            h if h < 18 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Classifies a UTC timestamp after shifting it by `utc_offset_hours`.
    pub fn classify(now: DateTime<Utc>, utc_offset_hours: i32) -> Self {
        Self::from_local_hour(local_hour(now, utc_offset_hours))
    }

    /// Spoken greeting for this part of the day.
    pub fn greeting(self) -> &'static str {
        match self {
            Self::Morning => "Good morning. ",
            Self::Afternoon => "Good afternoon. ",
            Self::Evening => "Good evening. ",
        }
    }
}

/// Hour of `now` in the reference zone, always in `0..24`.
pub fn local_hour(now: DateTime<Utc>, utc_offset_hours: i32) -> i32 {
    (now.hour() as i32 + utc_offset_hours).rem_euclid(24)
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
