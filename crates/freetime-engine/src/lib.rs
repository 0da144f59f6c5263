//! # freetime-engine
//!
//! Deterministic shared free-time computation for weekly campus schedules.
//!
//! Given two or more participants' weekly timetables, the engine finds every window
//! in which all of them are free at once, inside configurable day bounds, and
//! annotates each window with what the participants are doing right before and
//! after it.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{Duration, NaiveTime, Weekday};
//! use freetime_engine::{compute_shared_free_times, DayBounds, ParticipantSchedule, ScheduleEntry};
//!
//! let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
//! let alice = ParticipantSchedule::new("alice", vec![
//!     ScheduleEntry::new(Weekday::Mon, t(9), t(12), "CS101"),
//! ]);
//! let bob = ParticipantSchedule::new("bob", vec![]);
//! let bounds = DayBounds::new(t(8), t(14)).unwrap();
//!
//! let slots = compute_shared_free_times(&[alice, bob], bounds, Duration::minutes(30)).unwrap();
//! assert_eq!(slots[0].day, Weekday::Mon);
//! assert_eq!(slots[0].end, t(9));
//! ```
//!
//! ## Modules
//!
//! - [`engine`] — the full pipeline (`compute_shared_free_times`)
//! - [`freebusy`] — per-participant busy merging and free gaps
//! - [`intersect`] — sweep over all participants' free intervals
//! - [`context`] — surrounding activity labels and slot summaries
//! - [`schedule`] — input data model
//! - [`time`] — day and time-of-day parsing/formatting
//! - [`config`] — layered, serde-facing options
//! - [`error`] — Error types

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod freebusy;
pub mod intersect;
pub mod schedule;
pub mod time;

pub use config::MatchConfig;
pub use engine::{
    compute_shared_free_times, compute_shared_free_times_with, find_first_shared_slot,
    select_participants, MatchOptions, SharedFreeSlot,
};
pub use error::MatchError;
pub use freebusy::{
    free_intervals, merge_busy_intervals, participant_free_times, Activity, BusyInterval,
};
pub use intersect::intersect_free_intervals;
pub use schedule::{DayBounds, ParticipantSchedule, ScheduleEntry, TimeWindow};
