//! Surrounding-activity context for shared free slots.
//!
//! For a free window, looks at what each participant is doing just before it starts
//! and just after it ends, and renders a one-line summary of the slot.

use chrono::Duration;

use crate::engine::SharedFreeSlot;
use crate::freebusy::BusyInterval;
use crate::schedule::TimeWindow;
use crate::time::{day_name, format_time};

/// Activity labels found around a window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurroundingActivities {
    /// Labels of activities ending within the lead before the window.
    pub before: Vec<String>,
    /// Labels of activities starting within the lead after the window.
    pub after: Vec<String>,
}

impl SurroundingActivities {
    /// All labels, `before` first, without repeats.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::with_capacity(self.before.len() + self.after.len());
        for label in self.before.iter().chain(&self.after) {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
        labels
    }
}

/// Collect labels of activities adjacent to `window`.
///
/// `busy_by_participant` holds each participant's merged busy intervals for the
/// window's day, in participant order. Each merged entry is judged on its own times:
/// it counts as "before" when it ends no more than `lead` before `window.start`, and
/// as "after" when it starts no more than `lead` after `window.end`.
pub fn surrounding_activities(
    window: &TimeWindow,
    busy_by_participant: &[Vec<BusyInterval>],
    lead: Duration,
) -> SurroundingActivities {
    let mut found = SurroundingActivities::default();

    for busy in busy_by_participant {
        for activity in busy.iter().flat_map(|b| &b.activities) {
            if within(window.start - activity.end, lead) {
                push_unique(&mut found.before, &activity.label);
            }
            if within(activity.start - window.end, lead) {
                push_unique(&mut found.after, &activity.label);
            }
        }
    }

    found
}

fn within(gap: Duration, lead: Duration) -> bool {
    gap >= Duration::zero() && gap <= lead
}

fn push_unique(into: &mut Vec<String>, label: &str) {
    if !into.iter().any(|l| l == label) {
        into.push(label.to_string());
    }
}

/// One-line description, e.g.
/// `Monday 10:00-11:00 (60 min): alice, bob are free. Before: CS101. After: Lab.`
pub fn summarize(slot: &SharedFreeSlot, surrounding: &SurroundingActivities) -> String {
    let who: Vec<&str> = slot.participant_ids.iter().map(String::as_str).collect();
    let mut line = format!(
        "{} {}-{} ({} min): {} are free.",
        day_name(slot.day),
        format_time(slot.start),
        format_time(slot.end),
        slot.duration_minutes,
        who.join(", ")
    );
    if !surrounding.before.is_empty() {
        line.push_str(&format!(" Before: {}.", surrounding.before.join(", ")));
    }
    if !surrounding.after.is_empty() {
        line.push_str(&format!(" After: {}.", surrounding.after.join(", ")));
    }
    line
}
