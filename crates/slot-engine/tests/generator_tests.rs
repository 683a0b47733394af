//! Tests for slot generation from a working window.

use slot_engine::generator::{generate_for_window, generate_slots, Slot, SlotSpec};
use slot_engine::schedule::{DayName, WorkingWindow};
use slot_engine::TimeOfDay;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap()
}

fn labels(start: TimeOfDay, end: TimeOfDay, duration: u32, buffer: u32) -> Vec<String> {
    generate_slots(start, end, duration, buffer)
        .iter()
        .map(|s| s.label().to_string())
        .collect()
}

// ── Boundaries ──────────────────────────────────────────────────────────────

#[test]
fn exact_fit_produces_two_slots() {
    let slots = generate_slots(t(9, 0), t(10, 0), 30, 0);
    assert_eq!(slots.len(), 2);
    assert_eq!((slots[0].start_time(), slots[0].end_time()), (t(9, 0), t(9, 30)));
    assert_eq!((slots[1].start_time(), slots[1].end_time()), (t(9, 30), t(10, 0)));
}

#[test]
fn partial_slot_is_not_emitted() {
    // 09:30-10:00 would run past 09:50.
    let slots = generate_slots(t(9, 0), t(9, 50), 30, 0);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].end_time(), t(9, 30));
}

#[test]
fn end_before_start_is_empty() {
    assert!(generate_slots(t(10, 0), t(9, 0), 30, 0).is_empty());
}

#[test]
fn equal_start_and_end_is_empty() {
    assert!(generate_slots(t(10, 0), t(10, 0), 30, 0).is_empty());
}

#[test]
fn duration_longer_than_window_is_empty() {
    assert!(generate_slots(t(9, 0), t(9, 40), 45, 0).is_empty());
}

// ── Buffer ──────────────────────────────────────────────────────────────────

#[test]
fn default_consultation_day() {
    // 45-minute sessions with 15 minutes between them, 09:00-12:00.
    assert_eq!(
        labels(t(9, 0), t(12, 0), 45, 15),
        vec![
            "9:00 AM - 9:45 AM",
            "10:00 AM - 10:45 AM",
            "11:00 AM - 11:45 AM",
        ]
    );
}

#[test]
fn buffer_can_push_last_slot_out() {
    // Without a buffer three 30-minute slots fit in 90 minutes; with 10 minutes
    // between them only two do.
    assert_eq!(generate_slots(t(9, 0), t(10, 30), 30, 0).len(), 3);
    assert_eq!(generate_slots(t(9, 0), t(10, 30), 30, 10).len(), 2);
}

#[test]
fn slots_cross_noon_with_pm_labels() {
    assert_eq!(
        labels(t(11, 0), t(13, 0), 60, 0),
        vec!["11:00 AM - 12:00 PM", "12:00 PM - 1:00 PM"]
    );
}

#[test]
fn midnight_start_labels_as_twelve_am() {
    assert_eq!(labels(t(0, 0), t(0, 30), 30, 0), vec!["12:00 AM - 12:30 AM"]);
}

// ── Windows ─────────────────────────────────────────────────────────────────

#[test]
fn window_without_hours_is_empty() {
    let window = WorkingWindow::new(DayName::Monday);
    assert!(generate_for_window(&window, SlotSpec::new(30, 0)).is_empty());
}

#[test]
fn window_interval_overrides_spec_duration() {
    let window = WorkingWindow::new(DayName::Tuesday).with_hours(t(9, 0), t(11, 0));
    // WorkingWindow::new defaults the interval to 45 minutes.
    let slots = generate_for_window(&window, SlotSpec::new(60, 15));
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].duration_minutes(), 45);
    assert_eq!(slots[1].start_time(), t(10, 0));
}

#[test]
fn window_zero_interval_falls_back_to_spec() {
    let mut window = WorkingWindow::new(DayName::Friday).with_hours(t(9, 0), t(11, 0));
    window.slot_interval = Some(0);
    let slots = generate_for_window(&window, SlotSpec::new(60, 0));
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].duration_minutes(), 60);
}

// ── Edge cases ──────────────────────────────────────────────────────────────

#[test]
fn slot_label_and_duration() {
    let slot = Slot::new(t(11, 30), t(12, 15));
    assert_eq!(slot.label(), "11:30 AM - 12:15 PM");
    assert_eq!(slot.duration_minutes(), 45);
}

#[test]
fn zero_duration_yields_nothing() {
    assert!(generate_slots(t(9, 0), t(17, 0), 0, 15).is_empty());
}

#[test]
fn window_reaching_last_minute_of_day() {
    let slots = generate_slots(t(22, 0), t(23, 59), 60, 0);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].label(), "10:00 PM - 11:00 PM");
}

#[test]
fn huge_buffer_does_not_overflow() {
    let slots = generate_slots(t(9, 0), t(17, 0), 30, u32::MAX);
    assert_eq!(slots.len(), 1);
}

#[test]
fn slot_serializes_camel_case() {
    let json = serde_json::to_value(Slot::new(t(9, 0), t(9, 45))).unwrap();
    assert_eq!(json["startTime"], "09:00");
    assert_eq!(json["endTime"], "09:45");
    assert_eq!(json["label"], "9:00 AM - 9:45 AM");
}
