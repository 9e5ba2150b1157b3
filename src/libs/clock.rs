use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// The tracker reads start and end timestamps through this trait so a
/// session can be replayed with fixed times.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
