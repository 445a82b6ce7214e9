//! Clock helpers for message timestamps.
//!
//! Timestamps are kept as UTC `OffsetDateTime` values. The wire format is
//! RFC 3339 (an ISO-8601 profile); the bubble label is a 24-hour `HH:MM`
//! string in the viewer's local offset.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, Time, UtcOffset};

/// Current instant in UTC.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Render an instant for the webhook request body.
///
/// # Errors
///
/// Returns an error if the instant cannot be represented in RFC 3339
/// (years outside `0..=9999`).
pub fn to_iso8601(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.format(&Rfc3339)
}

/// Offset of the viewer's local clock.
///
/// Browser builds ask `Date.getTimezoneOffset()`; server renders use UTC.
pub fn local_offset() -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let minutes_west = js_sys::Date::new_0().get_timezone_offset() as i32;
        UtcOffset::from_whole_seconds(-minutes_west * 60).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UtcOffset::UTC
    }
}

/// 24-hour `HH:MM` label for a message timestamp.
pub fn format_clock(at: OffsetDateTime, offset: UtcOffset) -> String {
    format_time_of_day(at.to_offset(offset).time())
}

/// 24-hour `HH:MM` label for a time of day.
pub fn format_time_of_day(at: Time) -> String {
    format!("{:02}:{:02}", at.hour(), at.minute())
}

/// Parse a `HH:MM` label back into a time of day.
pub fn parse_clock(label: &str) -> Option<Time> {
    Time::parse(label.trim(), format_description!("[hour]:[minute]")).ok()
}
