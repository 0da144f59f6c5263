//! Benchmarks shared free-time computation on class-sized groups.

use chrono::{NaiveTime, Weekday};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use freetime_engine::time::WEEK;
use freetime_engine::{
    compute_shared_free_times_with, MatchOptions, ParticipantSchedule, ScheduleEntry,
};
use std::hint::black_box;

/// A deterministic timetable: three to five classes per weekday, shifted per student.
fn timetable(student: u32) -> ParticipantSchedule {
    let entries = WEEK
        .iter()
        .filter(|day| !matches!(day, Weekday::Sat | Weekday::Sun))
        .enumerate()
        .flat_map(|(d, &day)| {
            let classes = 3 + (student + d as u32) % 3;
            (0..classes).map(move |c| {
                let start = 8 * 60 + ((student * 7 + c * 131 + d as u32 * 17) % 600);
                let end = (start + 50 + (c % 2) * 30).min(23 * 60);
                ScheduleEntry::new(
                    day,
                    NaiveTime::from_num_seconds_from_midnight_opt(start * 60, 0).unwrap(),
                    NaiveTime::from_num_seconds_from_midnight_opt(end * 60, 0).unwrap(),
                    format!("Course {}", (student + c) % 12),
                )
            })
        })
        .collect();
    ParticipantSchedule::new(format!("student-{student}"), entries)
}

fn bench_shared_free_times(c: &mut Criterion) {
    let options = MatchOptions::default();
    let mut group = c.benchmark_group("shared_free_times");

    for size in [2u32, 8, 32] {
        let schedules: Vec<ParticipantSchedule> = (0..size).map(timetable).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &schedules, |b, schedules| {
            b.iter(|| compute_shared_free_times_with(black_box(schedules), &options).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shared_free_times);
criterion_main!(benches);
