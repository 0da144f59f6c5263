//! Tests for per-participant busy merging and free-gap computation.

use chrono::{NaiveTime, Weekday};
use freetime_engine::freebusy::{free_intervals, merge_busy_intervals, participant_free_times};
use freetime_engine::{DayBounds, ParticipantSchedule, ScheduleEntry, TimeWindow};

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Helper to create a ScheduleEntry from hour/minute ranges on a given day.
fn entry(day: Weekday, sh: u32, sm: u32, eh: u32, em: u32, activity: &str) -> ScheduleEntry {
    ScheduleEntry::new(day, hm(sh, sm), hm(eh, em), activity)
}

fn bounds(start: u32, end: u32) -> DayBounds {
    DayBounds::new(hm(start, 0), hm(end, 0)).unwrap()
}

#[test]
fn overlapping_entries_merge_into_one_busy_interval() {
    // [9:00,10:00) and [9:30,11:00) → [9:00,11:00)
    let entries = vec![
        entry(Weekday::Mon, 9, 0, 10, 0, "Lecture"),
        entry(Weekday::Mon, 9, 30, 11, 0, "Office hours"),
    ];

    let busy = merge_busy_intervals(&entries, Weekday::Mon);

    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].start, hm(9, 0));
    assert_eq!(busy[0].end, hm(11, 0));
    assert_eq!(busy[0].labels(), vec!["Lecture", "Office hours"]);
}

#[test]
fn touching_entries_coalesce() {
    // A.end == B.start → one continuous busy interval.
    let entries = vec![
        entry(Weekday::Tue, 10, 0, 11, 0, "Lab"),
        entry(Weekday::Tue, 9, 0, 10, 0, "Lecture"),
    ];

    let busy = merge_busy_intervals(&entries, Weekday::Tue);

    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].start, hm(9, 0));
    assert_eq!(busy[0].end, hm(11, 0));
    // Sorted by start, so the earlier entry's label comes first.
    assert_eq!(busy[0].labels(), vec!["Lecture", "Lab"]);
    // Each merged entry keeps its own span.
    assert_eq!(busy[0].activities[0].end, hm(10, 0));
    assert_eq!(busy[0].activities[1].start, hm(10, 0));
}

#[test]
fn contained_and_duplicate_entries_do_not_shrink_interval() {
    let entries = vec![
        entry(Weekday::Wed, 8, 0, 12, 0, "Seminar"),
        entry(Weekday::Wed, 9, 0, 10, 0, "Seminar"),
        entry(Weekday::Wed, 8, 0, 12, 0, "Seminar"),
    ];

    let busy = merge_busy_intervals(&entries, Weekday::Wed);

    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].end, hm(12, 0));
    assert_eq!(busy[0].labels(), vec!["Seminar"]);
    // The identical 08:00-12:00 entry is kept once; the nested one keeps its own times.
    assert_eq!(busy[0].activities.len(), 2);
    assert_eq!(
        (busy[0].activities[1].start, busy[0].activities[1].end),
        (hm(9, 0), hm(10, 0))
    );
}

#[test]
fn entries_on_other_days_are_ignored() {
    let entries = vec![
        entry(Weekday::Mon, 9, 0, 10, 0, "Mon class"),
        entry(Weekday::Fri, 9, 0, 10, 0, "Fri class"),
    ];

    let busy = merge_busy_intervals(&entries, Weekday::Fri);

    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].labels(), vec!["Fri class"]);
    assert!(merge_busy_intervals(&entries, Weekday::Sun).is_empty());
}

#[test]
fn blank_labels_are_not_recorded() {
    let entries = vec![entry(Weekday::Mon, 9, 0, 10, 0, "  ")];

    let busy = merge_busy_intervals(&entries, Weekday::Mon);

    assert!(busy[0].activities.is_empty());
}

#[test]
fn single_busy_interval_produces_two_free_windows() {
    // Bounds 08:00-17:00, busy 10:00-11:00 → free 08:00-10:00, 11:00-17:00
    let entries = vec![entry(Weekday::Mon, 10, 0, 11, 0, "Class")];
    let busy = merge_busy_intervals(&entries, Weekday::Mon);

    let free = free_intervals(&busy, Weekday::Mon, bounds(8, 17));

    assert_eq!(
        free,
        vec![
            TimeWindow::new(Weekday::Mon, hm(8, 0), hm(10, 0)),
            TimeWindow::new(Weekday::Mon, hm(11, 0), hm(17, 0)),
        ]
    );
    assert_eq!(free[0].duration_minutes(), 120);
    assert_eq!(free[1].duration_minutes(), 360);
}

#[test]
fn no_busy_intervals_whole_bounds_are_free() {
    let free = free_intervals(&[], Weekday::Thu, bounds(8, 22));

    assert_eq!(free, vec![TimeWindow::new(Weekday::Thu, hm(8, 0), hm(22, 0))]);
    assert_eq!(free[0].duration_minutes(), 14 * 60);
}

#[test]
fn busy_interval_filling_bounds_leaves_nothing_free() {
    let entries = vec![entry(Weekday::Mon, 9, 0, 12, 0, "Exam")];
    let busy = merge_busy_intervals(&entries, Weekday::Mon);

    assert!(free_intervals(&busy, Weekday::Mon, bounds(9, 12)).is_empty());
}

#[test]
fn busy_intervals_outside_bounds_are_clipped() {
    // 06:00-09:00 straddles the start, 21:00-23:00 straddles the end, 23:00-23:30 is outside.
    let entries = vec![
        entry(Weekday::Sat, 6, 0, 9, 0, "Shift"),
        entry(Weekday::Sat, 21, 0, 23, 0, "Party"),
        entry(Weekday::Sat, 23, 0, 23, 30, "Snack"),
    ];
    let busy = merge_busy_intervals(&entries, Weekday::Sat);

    let free = free_intervals(&busy, Weekday::Sat, bounds(8, 22));

    assert_eq!(free, vec![TimeWindow::new(Weekday::Sat, hm(9, 0), hm(21, 0))]);
}

#[test]
fn multiple_gaps_between_busy_intervals() {
    // Bounds 08:00-18:00, busy 09-10, 12-13, 15-16
    let entries = vec![
        entry(Weekday::Mon, 15, 0, 16, 0, "C"),
        entry(Weekday::Mon, 9, 0, 10, 0, "A"),
        entry(Weekday::Mon, 12, 0, 13, 0, "B"),
    ];
    let busy = merge_busy_intervals(&entries, Weekday::Mon);

    let free = free_intervals(&busy, Weekday::Mon, bounds(8, 18));

    let minutes: Vec<i64> = free.iter().map(TimeWindow::duration_minutes).collect();
    assert_eq!(minutes, vec![60, 120, 120, 120]);
}

#[test]
fn participant_free_times_cover_the_week_in_order() {
    let schedule = ParticipantSchedule::new(
        "alice",
        vec![
            entry(Weekday::Sun, 10, 0, 12, 0, "Brunch"),
            entry(Weekday::Mon, 8, 0, 22, 0, "Marathon study"),
        ],
    );

    let free = participant_free_times(&schedule, bounds(8, 22));

    // Monday fully busy; Tue-Sat fully free; Sunday split around brunch.
    let days: Vec<Weekday> = free.iter().map(|w| w.day).collect();
    assert_eq!(
        days,
        vec![
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
            Weekday::Sun,
        ]
    );
    assert_eq!(free[5], TimeWindow::new(Weekday::Sun, hm(8, 0), hm(10, 0)));
    assert_eq!(free[6], TimeWindow::new(Weekday::Sun, hm(12, 0), hm(22, 0)));
}
