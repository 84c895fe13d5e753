//! Epoch-second helpers for event dates.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Datelike};

const SECS_PER_DAY: i64 = 86_400;

/// Current time in epoch seconds. Uses the browser clock in hydrate builds.
pub fn now_epoch_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Whole days from `now` until `event_date`; zero or negative once the
/// event day has arrived.
pub fn days_until(event_date: i64, now: i64) -> i64 {
    (event_date - now).div_euclid(SECS_PER_DAY)
}

/// Only future events can be opened from the events list.
pub fn is_selectable(event_date: i64, now: i64) -> bool {
    days_until(event_date, now) > 0
}

/// `D Month YYYY` in UTC, e.g. `5 March 2024`.
pub fn format_event_date(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|dt| dt.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| "-".to_owned())
}

/// `D Month YYYY, HH:MM` in UTC, for participant status timestamps.
pub fn format_timestamp(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|dt| dt.format("%-d %B %Y, %H:%M").to_string())
        .unwrap_or_else(|| "-".to_owned())
}

pub fn current_year() -> i32 {
    DateTime::from_timestamp(now_epoch_secs(), 0).map_or(1970, |dt| dt.year())
}
