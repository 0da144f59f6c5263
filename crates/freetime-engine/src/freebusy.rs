//! Per-participant busy merging and free-gap computation.
//!
//! Sorts a participant's entries for one day by start time, merges overlapping or
//! touching busy periods, then walks the gaps between merged periods inside the day
//! bounds.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::schedule::{DayBounds, ParticipantSchedule, ScheduleEntry, TimeWindow};
use crate::time::{serde_time, WEEK};

/// A merged busy period for one participant on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    #[serde(with = "serde_time")]
    pub start: NaiveTime,
    #[serde(with = "serde_time")]
    pub end: NaiveTime,
    /// Every labelled entry merged into this interval, in start order.
    pub activities: Vec<Activity>,
}

impl BusyInterval {
    /// Distinct activity labels, first-seen order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::with_capacity(self.activities.len());
        for activity in &self.activities {
            if !labels.contains(&activity.label.as_str()) {
                labels.push(&activity.label);
            }
        }
        labels
    }
}

/// One labelled entry kept inside a merged [`BusyInterval`] with its own times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub label: String,
    #[serde(with = "serde_time")]
    pub start: NaiveTime,
    #[serde(with = "serde_time")]
    pub end: NaiveTime,
}

/// Merge a participant's entries on `day` into sorted, non-overlapping busy intervals.
///
/// Intervals are closed-open, so an entry starting exactly where another ends is
/// coalesced with it. Entries on other days are ignored.
pub fn merge_busy_intervals(entries: &[ScheduleEntry], day: Weekday) -> Vec<BusyInterval> {
    let mut day_entries: Vec<&ScheduleEntry> = entries.iter().filter(|e| e.day == day).collect();

    if day_entries.is_empty() {
        return Vec::new();
    }

    // Sort by start time (then by end time for stability).
    day_entries.sort_by_key(|e| (e.start_time, e.end_time));

    let mut merged: Vec<BusyInterval> = Vec::new();
    for entry in day_entries {
        if let Some(last) = merged.last_mut() {
            if entry.start_time <= last.end {
                last.end = last.end.max(entry.end_time);
                push_activity(&mut last.activities, entry);
                continue;
            }
        }
        let mut activities = Vec::new();
        push_activity(&mut activities, entry);
        merged.push(BusyInterval {
            start: entry.start_time,
            end: entry.end_time,
            activities,
        });
    }

    merged
}

fn push_activity(activities: &mut Vec<Activity>, entry: &ScheduleEntry) {
    let label = entry.activity.trim();
    if label.is_empty() {
        return;
    }
    let activity = Activity {
        label: label.to_string(),
        start: entry.start_time,
        end: entry.end_time,
    };
    if !activities.contains(&activity) {
        activities.push(activity);
    }
}

/// Free windows on `day` given already-merged busy intervals.
///
/// Busy intervals are clipped to `bounds`; the result is sorted and never leaves
/// `[bounds.day_start, bounds.day_end)`.
pub fn free_intervals(
    busy: &[BusyInterval],
    day: Weekday,
    bounds: DayBounds,
) -> Vec<TimeWindow> {
    let mut free = Vec::new();
    let mut cursor = bounds.day_start;

    for interval in busy {
        if interval.end <= cursor {
            continue;
        }
        if interval.start >= bounds.day_end {
            break;
        }
        if cursor < interval.start {
            free.push(TimeWindow::new(day, cursor, interval.start));
        }
        cursor = cursor.max(interval.end);
    }

    // Trailing free window after the last busy period.
    if cursor < bounds.day_end {
        free.push(TimeWindow::new(day, cursor, bounds.day_end));
    }

    free
}

/// One participant's free windows across the whole week, Monday first.
pub fn participant_free_times(
    schedule: &ParticipantSchedule,
    bounds: DayBounds,
) -> Vec<TimeWindow> {
    WEEK.iter()
        .flat_map(|&day| {
            let busy = merge_busy_intervals(&schedule.entries, day);
            free_intervals(&busy, day, bounds)
        })
        .collect()
}
