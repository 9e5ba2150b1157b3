//! Time formatting for the tracking screen and the API payloads.
//!
//! Two formats are used throughout the application:
//!
//! - **Timestamps** sent to the API: UTC, second precision,
//!   `YYYY-MM-DDTHH:MM:SSZ`.
//! - **Elapsed time** shown to the user: `H:MM:SS`, where hours are not
//!   wrapped at 24 and minutes/seconds are always below 60.
//!
//! ```rust
//! use timetrak::libs::formatter::{format_timestamp, Elapsed};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
//! assert_eq!(format_timestamp(&start), "2024-01-01T10:00:00Z");
//!
//! let elapsed = Elapsed::from(Duration::minutes(90));
//! assert_eq!(elapsed.to_string(), "1:30:00");
//! ```

use chrono::{DateTime, Duration, Utc};
use std::fmt::{self, Display, Formatter};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Formats a UTC instant the way the time-entries endpoint expects it.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// A non-negative duration split into hours, minutes and seconds.
///
/// Sub-second precision is truncated. Negative durations (a clock stepping
/// backwards between start and end) collapse to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elapsed {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    /// Elapsed time between two instants, `end - start`.
    pub fn between(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Self {
        Self::from(end.signed_duration_since(*start))
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        let total = duration.num_seconds().max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl Display for Elapsed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
