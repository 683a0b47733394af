//! WASM bindings for slot-engine.
//!
//! Exposes slot generation, availability filtering, and schedule draft helpers to
//! the browser app via `wasm-bindgen`. All complex values are passed as JSON
//! strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use slot_engine::{BookedSlotSet, BookedSlotsResponse, ScheduleDraft, TimeOfDay};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

/// Parse the caller's local wall-clock time. Seconds are optional.
fn parse_now(s: &str) -> Result<NaiveDateTime, JsValue> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_booked(json: Option<String>) -> Result<BookedSlotSet, JsValue> {
    match json {
        Some(json) => {
            let response = BookedSlotsResponse::from_json(&json).map_err(js_err)?;
            Ok(BookedSlotSet::from_response(&response))
        }
        None => Ok(BookedSlotSet::new()),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate slots for one working window.
///
/// `start` and `end` are 24-hour "HH:MM" strings. Returns a JSON array of
/// `{startTime, endTime, label}` objects; an empty array when nothing fits.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(
    start: &str,
    end: &str,
    duration_minutes: u32,
    buffer_minutes: u32,
) -> Result<String, JsValue> {
    let start = TimeOfDay::parse_24h(start).map_err(js_err)?;
    let end = TimeOfDay::parse_24h(end).map_err(js_err)?;
    to_json(&slot_engine::generate_slots(
        start,
        end,
        duration_minutes,
        buffer_minutes,
    ))
}

/// Filter a JSON array of range labels down to those bookable on `target_date`.
///
/// `booked_json` is the booked-slots response (`{"slots": [...]}`), bare strings
/// or `{slot_range, is_booked}` objects. `now` is the local wall-clock time.
/// Past dates are rejected.
#[wasm_bindgen(js_name = "filterAvailable")]
pub fn filter_available(
    labels_json: &str,
    booked_json: Option<String>,
    target_date: &str,
    now: &str,
) -> Result<String, JsValue> {
    let labels: Vec<String> = serde_json::from_str(labels_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid labels JSON: {}", e)))?;
    let booked = parse_booked(booked_json)?;
    let date = parse_date(target_date)?;
    let now = parse_now(now)?;

    slot_engine::check_target_date(date, now.date()).map_err(js_err)?;
    to_json(&slot_engine::filter_available(&labels, &booked, date, now))
}

/// Bookable slots a schedule draft produces on `target_date`.
#[wasm_bindgen(js_name = "availableFromDraft")]
pub fn available_from_draft(
    draft_json: &str,
    booked_json: Option<String>,
    target_date: &str,
    now: &str,
) -> Result<String, JsValue> {
    let draft = ScheduleDraft::from_json(draft_json).map_err(js_err)?;
    let booked = parse_booked(booked_json)?;
    let date = parse_date(target_date)?;
    let now = parse_now(now)?;

    slot_engine::check_target_date(date, now.date()).map_err(js_err)?;
    let candidates = draft.slots_on(date);
    to_json(&slot_engine::filter_available(&candidates, &booked, date, now))
}

/// Build the schedule save request body from a draft.
#[wasm_bindgen(js_name = "schedulePayload")]
pub fn schedule_payload(draft_json: &str) -> Result<String, JsValue> {
    let draft = ScheduleDraft::from_json(draft_json).map_err(js_err)?;
    to_json(&draft.to_payload().map_err(js_err)?)
}
