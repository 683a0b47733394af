//! Turn a working-time window into an ordered list of bookable slots.
//!
//! Starting at the window start, each slot occupies `duration` minutes and the
//! next one begins `buffer` minutes after it ends. Generation stops at the first
//! slot that would run past the window end; partial slots are never emitted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::schedule::WorkingWindow;
use crate::time::{format_range, TimeOfDay};

/// Slot length and the idle gap inserted between consecutive slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    pub duration_minutes: u32,
    pub buffer_minutes: u32,
}

impl SlotSpec {
    pub fn new(duration_minutes: u32, buffer_minutes: u32) -> Self {
        Self {
            duration_minutes,
            buffer_minutes,
        }
    }
}

/// A generated, labeled time range within a working day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    start_time: TimeOfDay,
    end_time: TimeOfDay,
    label: String,
}

impl Slot {
    pub fn new(start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            start_time,
            end_time,
            label: format_range(start_time, end_time),
        }
    }

    pub fn start_time(&self) -> TimeOfDay {
        self.start_time
    }

    pub fn end_time(&self) -> TimeOfDay {
        self.end_time
    }

    /// The `"h:mm AM - h:mm PM"` label sent to and received from the booking API.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_time.minutes_since_midnight() - self.start_time.minutes_since_midnight()
    }
}

/// Enumerate slots of `duration_minutes` between `start` and `end`, separated by
/// `buffer_minutes`.
///
/// Returns an empty list when `start >= end`, when the duration is zero, or when a
/// single slot does not fit. Identical inputs always produce identical output.
pub fn generate_slots(
    start: TimeOfDay,
    end: TimeOfDay,
    duration_minutes: u32,
    buffer_minutes: u32,
) -> Vec<Slot> {
    if start >= end || duration_minutes == 0 {
        debug!(%start, %end, duration_minutes, "empty working window");
        return Vec::new();
    }

    let end_minutes = end.minutes_since_midnight();
    let step = duration_minutes.saturating_add(buffer_minutes);
    let mut slots = Vec::new();
    let mut current = start.minutes_since_midnight();

    loop {
        let Some(slot_end) = current.checked_add(duration_minutes) else {
            break;
        };
        if slot_end > end_minutes {
            break;
        }
        // Both bounds are at or before `end`, so they are valid times of day.
        let (Some(from), Some(to)) = (
            TimeOfDay::from_minutes(current),
            TimeOfDay::from_minutes(slot_end),
        ) else {
            break;
        };
        slots.push(Slot::new(from, to));

        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }

    debug!(%start, %end, duration_minutes, buffer_minutes, count = slots.len(), "generated slots");
    slots
}

/// Generate slots for a configured working window.
///
/// A window without both start and end set yields no slots. The window's own
/// interval, when present and non-zero, overrides `spec.duration_minutes`.
pub fn generate_for_window(window: &WorkingWindow, spec: SlotSpec) -> Vec<Slot> {
    match (window.start_time, window.end_time) {
        (Some(start), Some(end)) => {
            let duration = window.effective_duration(spec.duration_minutes);
            generate_slots(start, end, duration, spec.buffer_minutes)
        }
        _ => Vec::new(),
    }
}
