//! Day-of-week and time-of-day parsing/formatting.
//!
//! Schedules arrive as plain strings (`"Monday"`, `"9:00 AM"`, `"14:30"`). Everything
//! is interpreted in a single shared wall-clock zone; there is no time-zone handling.

use chrono::{NaiveTime, Timelike, Weekday};

use crate::error::{MatchError, Result};

/// Canonical week order. Output is always reported in this order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Formats accepted by [`parse_time_of_day`], tried in order.
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];

/// Parse a day name such as `"Monday"`, `"mon"` or `"FRI"`.
pub fn parse_day(s: &str) -> Result<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| MatchError::InvalidDay(s.to_string()))
}

/// Full English name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a wall-clock time in 24-hour (`"09:00"`, `"9:00:30"`) or 12-hour
/// (`"9:00 AM"`, `"4:30pm"`) form. Minutes are always required.
///
/// Midnight (`"00:00"` or `"12:00 AM"`) is the start of the day, and `"24:00"` is not
/// accepted. An entry running until midnight should end at `"23:59"` / `"11:59 PM"`.
///
/// # Errors
/// Returns `MatchError::InvalidTime` if no accepted format matches.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    let trimmed = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| MatchError::InvalidTime(s.to_string()))
}

/// Render a time as `HH:MM`, or `HH:MM:SS` when seconds are non-zero.
pub fn format_time(t: NaiveTime) -> String {
    if t.second() == 0 {
        t.format("%H:%M").to_string()
    } else {
        t.format("%H:%M:%S").to_string()
    }
}

/// Serde adapter for `NaiveTime` fields using [`parse_time_of_day`] / [`format_time`].
pub mod serde_time {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for `Weekday` fields using [`parse_day`] / [`day_name`].
pub mod serde_day {
    use chrono::Weekday;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::day_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_day(&raw).map_err(de::Error::custom)
    }
}
