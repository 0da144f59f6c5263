//! WASM bindings for freetime-engine.
//!
//! Exposes shared free-time computation to the web front end via `wasm-bindgen`.
//! Schedules and options cross the boundary as JSON strings in the same shape the
//! `freetime` CLI reads: participant schedules with `"Monday"` days and `"9:00 AM"`
//! style times, and an optional `MatchConfig` object.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p freetime-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/freetime_engine_wasm.wasm
//! ```

use freetime_engine::{MatchConfig, MatchOptions, ParticipantSchedule};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON helpers (plain Rust so they can be tested off-wasm)
// ---------------------------------------------------------------------------

fn parse_schedules(json: &str) -> Result<Vec<ParticipantSchedule>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid schedules JSON: {}", e))
}

fn parse_schedule(json: &str) -> Result<ParticipantSchedule, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid schedule JSON: {}", e))
}

/// Resolve optional `MatchConfig` JSON; `None` or blank means all defaults.
fn parse_options(json: Option<&str>) -> Result<MatchOptions, String> {
    let config = match json.map(str::trim) {
        Some(raw) if !raw.is_empty() => serde_json::from_str::<MatchConfig>(raw)
            .map_err(|e| format!("Invalid options JSON: {}", e))?,
        _ => MatchConfig::default(),
    };
    config.resolve().map_err(|e| e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn shared_free_times_json(
    schedules_json: &str,
    options_json: Option<&str>,
) -> Result<String, String> {
    let schedules = parse_schedules(schedules_json)?;
    let options = parse_options(options_json)?;
    let slots = freetime_engine::compute_shared_free_times_with(&schedules, &options)
        .map_err(|e| e.to_string())?;
    to_json(&slots)
}

fn first_shared_slot_json(
    schedules_json: &str,
    options_json: Option<&str>,
) -> Result<String, String> {
    let schedules = parse_schedules(schedules_json)?;
    let options = parse_options(options_json)?;
    let slot = freetime_engine::find_first_shared_slot(&schedules, &options)
        .map_err(|e| e.to_string())?;
    to_json(&slot)
}

fn participant_free_times_json(
    schedule_json: &str,
    options_json: Option<&str>,
) -> Result<String, String> {
    let schedule = parse_schedule(schedule_json)?;
    schedule.validate().map_err(|e| e.to_string())?;
    let options = parse_options(options_json)?;
    to_json(&freetime_engine::participant_free_times(
        &schedule,
        options.day_bounds,
    ))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute shared free slots across participant schedules.
///
/// `schedules_json` is a JSON array of `{participant_id, entries}` objects.
/// `options_json` is an optional `{day_start, day_end, min_duration_minutes,
/// context_lead_minutes}` object. Returns a JSON array of slots.
#[wasm_bindgen(js_name = "computeSharedFreeTimes")]
pub fn compute_shared_free_times(
    schedules_json: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    shared_free_times_json(schedules_json, options_json.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

/// The earliest shared slot in week order, or JSON `null` when there is none.
#[wasm_bindgen(js_name = "findFirstSharedSlot")]
pub fn find_first_shared_slot(
    schedules_json: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    first_shared_slot_json(schedules_json, options_json.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

/// One participant's free windows across the week.
///
/// `schedule_json` is a single `{participant_id, entries}` object. Only the day
/// bounds of `options_json` are used.
#[wasm_bindgen(js_name = "participantFreeTimes")]
pub fn participant_free_times(
    schedule_json: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    participant_free_times_json(schedule_json, options_json.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}
