//! Tests for booked and expired slot filtering.

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::{
    check_target_date, filter_available, generate_slots, BookedSlotSet, DateRelation, RangeLabel,
    SlotError, TimeOfDay,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap()
}

fn t(hour: u32, minute: u32) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap()
}

fn ranges(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

// ── Booked removal ──────────────────────────────────────────────────────────

#[test]
fn booked_label_is_removed() {
    let slots = ranges(&["09:00 AM - 09:30 AM", "09:30 AM - 10:00 AM"]);
    let booked = BookedSlotSet::from_labels(["09:00 AM - 09:30 AM"]);
    let today = date(2026, 3, 16);

    let result = filter_available(&slots, &booked, date(2026, 3, 20), at(today, 8, 0));

    assert_eq!(result, ranges(&["09:30 AM - 10:00 AM"]));
}

#[test]
fn booked_match_is_exact_string_equality() {
    // Same range written differently is not considered booked.
    let slots = generate_slots(t(9, 0), t(10, 0), 30, 0);
    let booked = BookedSlotSet::from_labels(["09:00 AM - 09:30 AM"]);
    let today = date(2026, 3, 16);

    let result = filter_available(&slots, &booked, date(2026, 3, 17), at(today, 8, 0));
    assert_eq!(result.len(), 2);

    let booked = BookedSlotSet::from_labels(["9:00 AM - 9:30 AM"]);
    let result = filter_available(&slots, &booked, date(2026, 3, 17), at(today, 8, 0));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].label(), "9:30 AM - 10:00 AM");
}

// ── Same-day expiry ─────────────────────────────────────────────────────────

#[test]
fn same_day_drops_slots_that_have_ended() {
    let today = date(2026, 3, 16);
    let slots = ranges(&["08:30 AM - 09:00 AM", "09:00 AM - 09:30 AM"]);

    let result = filter_available(&slots, &BookedSlotSet::new(), today, at(today, 9, 15));

    assert_eq!(result, ranges(&["09:00 AM - 09:30 AM"]));
}

#[test]
fn slot_ending_exactly_now_is_expired() {
    let today = date(2026, 3, 16);
    let slots = generate_slots(t(9, 0), t(10, 0), 30, 0);

    let result = filter_available(&slots, &BookedSlotSet::new(), today, at(today, 9, 30));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].start_time(), t(9, 30));
}

#[test]
fn seconds_past_the_end_also_expire() {
    let today = date(2026, 3, 16);
    let slots = generate_slots(t(9, 0), t(9, 30), 30, 0);
    let now = today.and_hms_opt(9, 29, 59).unwrap();

    assert_eq!(filter_available(&slots, &BookedSlotSet::new(), today, now).len(), 1);
}

#[test]
fn future_day_ignores_time_of_day() {
    let today = date(2026, 3, 16);
    let slots = generate_slots(t(9, 0), t(12, 0), 60, 0);

    let result = filter_available(&slots, &BookedSlotSet::new(), date(2026, 3, 17), at(today, 23, 0));

    assert_eq!(result, slots);
}

#[test]
fn past_day_is_left_to_the_caller() {
    let today = date(2026, 3, 16);
    let slots = generate_slots(t(9, 0), t(12, 0), 60, 0);

    let result = filter_available(&slots, &BookedSlotSet::new(), date(2026, 3, 15), at(today, 23, 0));

    assert_eq!(result.len(), 3);
}

// ── Unparsable labels ───────────────────────────────────────────────────────

#[test]
fn unparsable_label_is_kept_on_same_day() {
    let today = date(2026, 3, 16);
    let slots = ranges(&["morning session", "08:00 AM - 08:30 AM"]);

    let result = filter_available(&slots, &BookedSlotSet::new(), today, at(today, 12, 0));

    assert_eq!(result, ranges(&["morning session"]));
}

#[test]
fn unparsable_label_can_still_be_booked() {
    let today = date(2026, 3, 16);
    let slots = ranges(&["morning session", "01:00 PM - 01:30 PM"]);
    let booked = BookedSlotSet::from_labels(["morning session"]);

    let result = filter_available(&slots, &booked, today, at(today, 12, 0));

    assert_eq!(result, ranges(&["01:00 PM - 01:30 PM"]));
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn order_is_preserved() {
    let today = date(2026, 3, 16);
    let slots = ranges(&[
        "03:00 PM - 03:30 PM",
        "10:00 AM - 10:30 AM",
        "01:00 PM - 01:30 PM",
        "11:00 AM - 11:30 AM",
    ]);
    let booked = BookedSlotSet::from_labels(["01:00 PM - 01:30 PM"]);

    let result = filter_available(&slots, &booked, today, at(today, 10, 45));

    assert_eq!(
        result,
        ranges(&["03:00 PM - 03:30 PM", "11:00 AM - 11:30 AM"])
    );
}

#[test]
fn borrowed_labels_filter_too() {
    let today = date(2026, 3, 16);
    let slots = ["09:00 AM - 09:30 AM", "10:00 AM - 10:30 AM"];

    let result = filter_available(&slots, &BookedSlotSet::new(), today, at(today, 9, 45));

    assert_eq!(result, vec!["10:00 AM - 10:30 AM"]);
}

// ── Date policy ─────────────────────────────────────────────────────────────

#[test]
fn target_date_relation() {
    let today = date(2026, 3, 16);
    assert_eq!(check_target_date(today, today).unwrap(), DateRelation::Today);
    assert_eq!(
        check_target_date(date(2026, 3, 17), today).unwrap(),
        DateRelation::Future
    );
    assert!(matches!(
        check_target_date(date(2026, 3, 15), today),
        Err(SlotError::PastDate { .. })
    ));
}

#[test]
fn string_labels_parse_their_end() {
    let label = "9:00 AM - 9:30 AM".to_string();
    assert_eq!(label.range_end(), Some(t(9, 30)));
    assert_eq!("garbage".range_end(), None);
}
