//! # slot-engine
//!
//! Deterministic appointment slot generation and availability filtering for the
//! consultation booking app.
//!
//! A working window (start and end time of day) plus a slot duration and buffer
//! turns into an ordered list of labeled slots. For a specific calendar date,
//! slots already booked or already over are then filtered out. Everything here is
//! pure: the current time and the booked ranges are inputs, never fetched.
//!
//! ## Modules
//!
//! - [`time`]: `TimeOfDay`, 12-hour label formatting and parsing
//! - [`generator`]: window + duration + buffer → list of slots
//! - [`filter`]: drop booked and expired slots for a date
//! - [`booked`]: normalize booked-slot API responses
//! - [`schedule`]: weekly working hours and the persisted schedule draft
//! - [`error`]: Error types

pub mod booked;
pub mod error;
pub mod filter;
pub mod generator;
pub mod schedule;
pub mod time;

pub use booked::{BookedSlotEntry, BookedSlotSet, BookedSlotsResponse};
pub use error::SlotError;
pub use filter::{check_target_date, filter_available, DateRelation, RangeLabel};
pub use generator::{generate_for_window, generate_slots, Slot, SlotSpec};
pub use schedule::{DayName, SchedulePayload, ScheduleDraft, WorkingWindow};
pub use time::TimeOfDay;
