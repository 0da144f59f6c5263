//! Shared free-time computation across N participants' weekly schedules.
//!
//! Pipeline per day, Monday first:
//! 1. merge each participant's entries into busy intervals ([`crate::freebusy`]),
//! 2. take each participant's free gaps inside the day bounds,
//! 3. sweep all free gaps to find windows where everyone is free ([`crate::intersect`]),
//! 4. drop windows shorter than the minimum duration,
//! 5. attach the activities surrounding each window ([`crate::context`]).
//!
//! The computation is pure: identical inputs always yield identical output, and all
//! input validation happens before any interval is processed.

use std::collections::{BTreeSet, HashSet};

use chrono::{Duration, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::context::{summarize, surrounding_activities, SurroundingActivities};
use crate::error::{MatchError, Result};
use crate::freebusy::{free_intervals, merge_busy_intervals, BusyInterval};
use crate::intersect::intersect_free_intervals;
use crate::schedule::{DayBounds, ParticipantSchedule, TimeWindow};
use crate::time::{day_name, format_time, serde_day, serde_time, WEEK};

/// Default minimum width of a reported slot.
pub const DEFAULT_MIN_DURATION_MINUTES: i64 = 30;

/// Default distance before/after a slot searched for surrounding activities.
pub const DEFAULT_CONTEXT_LEAD_MINUTES: i64 = 30;

/// Options controlling a shared free-time query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Only time inside these bounds can be reported free.
    pub day_bounds: DayBounds,
    /// Windows shorter than this are discarded.
    pub min_duration: Duration,
    /// How far around a window to look for the participants' neighbouring activities.
    pub context_lead: Duration,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            day_bounds: DayBounds::default(),
            min_duration: Duration::minutes(DEFAULT_MIN_DURATION_MINUTES),
            context_lead: Duration::minutes(DEFAULT_CONTEXT_LEAD_MINUTES),
        }
    }
}

/// A window in which every selected participant is free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFreeSlot {
    #[serde(with = "serde_day")]
    pub day: Weekday,
    #[serde(with = "serde_time")]
    pub start: NaiveTime,
    #[serde(with = "serde_time")]
    pub end: NaiveTime,
    pub duration_minutes: i64,
    pub participant_ids: BTreeSet<String>,
    /// Activities the participants have right before, then right after, the slot.
    pub context: Vec<String>,
    pub summary: String,
}

impl SharedFreeSlot {
    fn from_window(
        window: TimeWindow,
        participant_ids: BTreeSet<String>,
        surrounding: &SurroundingActivities,
    ) -> Self {
        let mut slot = Self {
            day: window.day,
            start: window.start,
            end: window.end,
            duration_minutes: window.duration_minutes(),
            participant_ids,
            context: surrounding.labels(),
            summary: String::new(),
        };
        slot.summary = summarize(&slot, surrounding);
        slot
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.day, self.start, self.end)
    }
}

/// Compute every shared free slot across `schedules` within `day_bounds`, keeping
/// only slots of at least `min_duration`. Uses the default context lead.
///
/// # Errors
/// - `MatchError::InsufficientParticipants` if fewer than 2 schedules are given.
/// - `MatchError::InvalidDayBounds` if `day_start >= day_end`.
/// - `MatchError::InvalidInterval` if any entry has `start_time >= end_time`.
pub fn compute_shared_free_times(
    schedules: &[ParticipantSchedule],
    day_bounds: DayBounds,
    min_duration: Duration,
) -> Result<Vec<SharedFreeSlot>> {
    compute_shared_free_times_with(
        schedules,
        &MatchOptions {
            day_bounds,
            min_duration,
            ..MatchOptions::default()
        },
    )
}

/// Identical to [`compute_shared_free_times`] but takes the full [`MatchOptions`].
///
/// Slots are ordered by day (Monday first), then by start time. Slots on the same
/// day never overlap.
///
/// # Errors
/// In addition to the errors of [`compute_shared_free_times`]:
/// - `MatchError::InvalidDuration` if `min_duration` or `context_lead` is negative.
/// - `MatchError::DuplicateParticipant` if two schedules share a `participant_id`.
pub fn compute_shared_free_times_with(
    schedules: &[ParticipantSchedule],
    options: &MatchOptions,
) -> Result<Vec<SharedFreeSlot>> {
    validate(schedules, options)?;

    debug!(
        participants = schedules.len(),
        day_start = %format_time(options.day_bounds.day_start),
        day_end = %format_time(options.day_bounds.day_end),
        min_duration_minutes = options.min_duration.num_minutes(),
        "computing shared free times"
    );

    let participant_ids: BTreeSet<String> = schedules
        .iter()
        .map(|s| s.participant_id.clone())
        .collect();

    let mut slots = Vec::new();
    for day in WEEK {
        let busy: Vec<Vec<BusyInterval>> = schedules
            .iter()
            .map(|s| merge_busy_intervals(&s.entries, day))
            .collect();
        let free: Vec<Vec<TimeWindow>> = busy
            .iter()
            .map(|b| free_intervals(b, day, options.day_bounds))
            .collect();

        let candidates = intersect_free_intervals(day, &free);
        let before = slots.len();
        for window in candidates
            .into_iter()
            .filter(|w| w.duration() >= options.min_duration)
        {
            let surrounding = surrounding_activities(&window, &busy, options.context_lead);
            slots.push(SharedFreeSlot::from_window(
                window,
                participant_ids.clone(),
                &surrounding,
            ));
        }

        trace!(day = day_name(day), slots = slots.len() - before, "day processed");
    }

    debug!(slots = slots.len(), "shared free times computed");
    Ok(slots)
}

/// The earliest shared slot in week order, if any.
///
/// # Errors
/// Same as [`compute_shared_free_times_with`].
pub fn find_first_shared_slot(
    schedules: &[ParticipantSchedule],
    options: &MatchOptions,
) -> Result<Option<SharedFreeSlot>> {
    Ok(compute_shared_free_times_with(schedules, options)?
        .into_iter()
        .next())
}

/// Pick the schedules for `ids`, in the order given.
///
/// # Errors
/// Returns `MatchError::UnknownParticipant` for the first id with no schedule.
pub fn select_participants<S: AsRef<str>>(
    schedules: &[ParticipantSchedule],
    ids: &[S],
) -> Result<Vec<ParticipantSchedule>> {
    ids.iter()
        .map(|id| {
            let id = id.as_ref();
            schedules
                .iter()
                .find(|s| s.participant_id == id)
                .cloned()
                .ok_or_else(|| MatchError::UnknownParticipant(id.to_string()))
        })
        .collect()
}

/// Run every input check performed by [`compute_shared_free_times_with`] without
/// computing anything.
///
/// # Errors
/// The first validation failure, in the order: participant count, day bounds,
/// durations, then per schedule a duplicate id or an invalid entry.
pub fn validate(schedules: &[ParticipantSchedule], options: &MatchOptions) -> Result<()> {
    if schedules.len() < 2 {
        return Err(MatchError::InsufficientParticipants(schedules.len()));
    }

    options.day_bounds.validate()?;

    if options.min_duration < Duration::zero() {
        return Err(MatchError::InvalidDuration(format!(
            "min_duration must not be negative, got {} min",
            options.min_duration.num_minutes()
        )));
    }
    if options.context_lead < Duration::zero() {
        return Err(MatchError::InvalidDuration(format!(
            "context_lead must not be negative, got {} min",
            options.context_lead.num_minutes()
        )));
    }

    let mut seen = HashSet::with_capacity(schedules.len());
    for schedule in schedules {
        if !seen.insert(schedule.participant_id.as_str()) {
            return Err(MatchError::DuplicateParticipant(
                schedule.participant_id.clone(),
            ));
        }
        schedule.validate()?;
    }

    Ok(())
}
