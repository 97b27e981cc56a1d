use chrono::{Local, Utc};

/// Source of capture-time readings.
pub trait Clock {
    /// Milliseconds since the Unix epoch; doubles as the highlight id.
    fn now_millis(&self) -> i64;
    /// Current date formatted for display.
    fn locale_date(&self) -> String;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn locale_date(&self) -> String {
        // en-US short date, e.g. 3/7/2025
        Local::now().format("%-m/%-d/%Y").to_string()
    }
}
