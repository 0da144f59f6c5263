//! Layered, serde-facing configuration for a shared free-time query.
//!
//! Every field is optional so several sources (an input document, a config file,
//! command-line flags) can be stacked with [`MatchConfig::overlay`] before being
//! resolved into concrete [`MatchOptions`].

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::engine::MatchOptions;
use crate::error::{MatchError, Result};
use crate::schedule::DayBounds;
use crate::time::parse_time_of_day;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Start of the considered part of each day, e.g. "08:00" or "8:00 AM".
    pub day_start: Option<String>,
    /// End of the considered part of each day.
    pub day_end: Option<String>,
    /// Minimum width of a reported slot, in minutes.
    pub min_duration_minutes: Option<i64>,
    /// Look-around distance for surrounding activities, in minutes.
    pub context_lead_minutes: Option<i64>,
}

impl MatchConfig {
    /// Stack `higher` on top of `self`; fields set in `higher` win.
    pub fn overlay(self, higher: MatchConfig) -> MatchConfig {
        MatchConfig {
            day_start: higher.day_start.or(self.day_start),
            day_end: higher.day_end.or(self.day_end),
            min_duration_minutes: higher.min_duration_minutes.or(self.min_duration_minutes),
            context_lead_minutes: higher.context_lead_minutes.or(self.context_lead_minutes),
        }
    }

    /// Resolve into [`MatchOptions`], filling unset fields from the defaults.
    ///
    /// # Errors
    /// - `MatchError::InvalidTime` for an unparseable `day_start`/`day_end`.
    /// - `MatchError::InvalidDayBounds` if the resulting start is not before the end.
    /// - `MatchError::InvalidDuration` for negative minute values.
    pub fn resolve(&self) -> Result<MatchOptions> {
        let defaults = MatchOptions::default();

        let day_start = match &self.day_start {
            Some(raw) => parse_time_of_day(raw)?,
            None => defaults.day_bounds.day_start,
        };
        let day_end = match &self.day_end {
            Some(raw) => parse_time_of_day(raw)?,
            None => defaults.day_bounds.day_end,
        };

        Ok(MatchOptions {
            day_bounds: DayBounds::new(day_start, day_end)?,
            min_duration: minutes("min_duration_minutes", self.min_duration_minutes)?
                .unwrap_or(defaults.min_duration),
            context_lead: minutes("context_lead_minutes", self.context_lead_minutes)?
                .unwrap_or(defaults.context_lead),
        })
    }
}

fn minutes(field: &str, value: Option<i64>) -> Result<Option<Duration>> {
    match value {
        Some(m) if m < 0 => Err(MatchError::InvalidDuration(format!(
            "{field} must not be negative, got {m}"
        ))),
        Some(m) => Duration::try_minutes(m).map(Some).ok_or_else(|| {
            MatchError::InvalidDuration(format!("{field} is out of range, got {m}"))
        }),
        None => Ok(None),
    }
}
