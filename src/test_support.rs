//! Shared helpers for in-crate tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a fixed instant for deterministic assertions.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Creates a clock pinned to midnight UTC on the given date.
    #[must_use]
    pub fn at_midnight(year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("valid calendar date")
            .and_hms_opt(0, 0, 0)
            .expect("valid time of day");
        Self(Utc.from_utc_datetime(&date))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
