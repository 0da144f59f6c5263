//! Multi-way intersection of free intervals via a sweep over sorted endpoints.

use chrono::{NaiveTime, Weekday};

use crate::schedule::TimeWindow;

/// Windows on `day` during which every participant in `per_participant` is free.
///
/// Each inner list must be one participant's sorted, disjoint free windows (as
/// produced by [`crate::freebusy::free_intervals`]). All endpoints are merged into one
/// sorted event list; a window opens where the running free count reaches the
/// participant count and closes at the next point where it drops.
///
/// Returns windows sorted by start. An empty participant list yields no windows.
pub fn intersect_free_intervals(
    day: Weekday,
    per_participant: &[Vec<TimeWindow>],
) -> Vec<TimeWindow> {
    let required = per_participant.len() as i64;
    if required == 0 {
        return Vec::new();
    }

    let mut events: Vec<(NaiveTime, i64)> = per_participant
        .iter()
        .flatten()
        .flat_map(|w| [(w.start, 1), (w.end, -1)])
        .collect();
    events.sort_by_key(|&(at, _)| at);

    let mut windows = Vec::new();
    let mut free_count = 0i64;
    let mut open: Option<NaiveTime> = None;

    // All deltas at the same instant are applied together before checking the count,
    // so a window ending where another begins never produces a zero-width slot.
    for group in events.chunk_by(|a, b| a.0 == b.0) {
        let at = group[0].0;
        free_count += group.iter().map(|&(_, delta)| delta).sum::<i64>();

        match open {
            None if free_count == required => open = Some(at),
            Some(start) if free_count != required => {
                windows.push(TimeWindow::new(day, start, at));
                open = None;
            }
            _ => {}
        }
    }

    windows
}
