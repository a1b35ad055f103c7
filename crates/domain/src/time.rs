//! Time and timestamp helpers.

use chrono::{DateTime, Local, TimeZone, Utc};

/// UTC timestamp used for file modification times and poll bookkeeping.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp as `dd.mm.yyyy` in the given time zone.
#[must_use]
pub fn format_day_in<Tz: TimeZone>(ts: Timestamp, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%d.%m.%Y").to_string()
}

/// Format a timestamp as `dd.mm.yyyy` in the host's local time zone.
#[must_use]
pub fn format_day(ts: Timestamp) -> String {
    format_day_in(ts, &Local)
}

/// Format a timestamp as `HH:MM:SS` in the given time zone.
#[must_use]
pub fn format_time_in<Tz: TimeZone>(ts: Timestamp, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%H:%M:%S").to_string()
}

/// Format a timestamp as `HH:MM:SS` in the host's local time zone.
#[must_use]
pub fn format_time(ts: Timestamp) -> String {
    format_time_in(ts, &Local)
}
