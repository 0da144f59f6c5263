//! Input data model: weekly schedule entries, participants, day bounds and windows.

use chrono::{Duration, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::time::{serde_day, serde_time};

/// One busy period in a participant's weekly timetable.
///
/// Entries are same-day only: `start_time < end_time`, never spanning midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(with = "serde_day")]
    pub day: Weekday,
    #[serde(with = "serde_time")]
    pub start_time: NaiveTime,
    #[serde(with = "serde_time")]
    pub end_time: NaiveTime,
    /// Free-text label, e.g. "CS101 Lecture" or "Soccer practice".
    #[serde(default)]
    pub activity: String,
}

impl ScheduleEntry {
    pub fn new(
        day: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        activity: impl Into<String>,
    ) -> Self {
        Self {
            day,
            start_time,
            end_time,
            activity: activity.into(),
        }
    }
}

/// A participant's full weekly timetable. Entries may be unordered and may overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSchedule {
    pub participant_id: String,
    #[serde(default)]
    pub entries: Vec<ScheduleEntry>,
}

impl ParticipantSchedule {
    pub fn new(participant_id: impl Into<String>, entries: Vec<ScheduleEntry>) -> Self {
        Self {
            participant_id: participant_id.into(),
            entries,
        }
    }

    /// Check every entry for `start_time < end_time`.
    ///
    /// # Errors
    /// Returns `MatchError::InvalidInterval` for the first offending entry.
    pub fn validate(&self) -> Result<()> {
        match self.entries.iter().find(|e| e.start_time >= e.end_time) {
            Some(e) => Err(MatchError::InvalidInterval {
                participant: self.participant_id.clone(),
                day: e.day,
                start: e.start_time,
                end: e.end_time,
            }),
            None => Ok(()),
        }
    }
}

/// The part of each day considered relevant; time outside it is never reported free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBounds {
    #[serde(with = "serde_time")]
    pub day_start: NaiveTime,
    #[serde(with = "serde_time")]
    pub day_end: NaiveTime,
}

impl DayBounds {
    /// # Errors
    /// Returns `MatchError::InvalidDayBounds` unless `day_start < day_end`.
    pub fn new(day_start: NaiveTime, day_end: NaiveTime) -> Result<Self> {
        let bounds = Self { day_start, day_end };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<()> {
        if self.day_start >= self.day_end {
            return Err(MatchError::InvalidDayBounds {
                start: self.day_start,
                end: self.day_end,
            });
        }
        Ok(())
    }
}

impl Default for DayBounds {
    /// 08:00–22:00.
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time"),
            day_end: NaiveTime::from_hms_opt(22, 0, 0).expect("22:00 is a valid time"),
        }
    }
}

/// A closed-open `[start, end)` window on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(with = "serde_day")]
    pub day: Weekday,
    #[serde(with = "serde_time")]
    pub start: NaiveTime,
    #[serde(with = "serde_time")]
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(day: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        Self { day, start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }
}
