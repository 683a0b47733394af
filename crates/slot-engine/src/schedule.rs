//! Weekly working hours and the persisted schedule draft.
//!
//! A [`ScheduleDraft`] is the editable state of the schedule screen: a date range,
//! default slot duration and buffer, and one [`WorkingWindow`] per weekday. It is a
//! plain value; callers load it from and store it to wherever they keep drafts.
//! Slots are never stored in the draft, they are regenerated on demand.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SlotError};
use crate::generator::{generate_for_window, Slot, SlotSpec};
use crate::time::TimeOfDay;

pub const DEFAULT_SLOT_DURATION: u32 = 45;
pub const DEFAULT_BUFFER_TIME: u32 = 15;
pub const DEFAULT_SLOT_INTERVAL: u32 = 45;

/// A weekday, serialized with its full English name ("Monday").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayName {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayName {
    /// All seven days, Monday first.
    pub const ALL: [DayName; 7] = [
        DayName::Monday,
        DayName::Tuesday,
        DayName::Wednesday,
        DayName::Thursday,
        DayName::Friday,
        DayName::Saturday,
        DayName::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayName::Monday => "Monday",
            DayName::Tuesday => "Tuesday",
            DayName::Wednesday => "Wednesday",
            DayName::Thursday => "Thursday",
            DayName::Friday => "Friday",
            DayName::Saturday => "Saturday",
            DayName::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for DayName {
    fn from(day: Weekday) -> Self {
        DayName::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Working hours for one weekday.
///
/// Either time may be unset, meaning no hours are configured for that day.
/// `slot_interval` overrides the draft's slot duration for this day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingWindow {
    pub day: DayName,
    #[serde(default)]
    pub start_time: Option<TimeOfDay>,
    #[serde(default)]
    pub end_time: Option<TimeOfDay>,
    #[serde(default)]
    pub slot_interval: Option<u32>,
}

impl WorkingWindow {
    pub fn new(day: DayName) -> Self {
        Self {
            day,
            start_time: None,
            end_time: None,
            slot_interval: Some(DEFAULT_SLOT_INTERVAL),
        }
    }

    pub fn with_hours(mut self, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    pub fn has_hours(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// The day's own interval if set and non-zero, else `default`.
    pub fn effective_duration(&self, default: u32) -> u32 {
        match self.slot_interval {
            Some(interval) if interval > 0 => interval,
            _ => default,
        }
    }

    fn clear(&mut self) {
        self.start_time = None;
        self.end_time = None;
    }
}

/// Slots generated for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySlots {
    pub day: DayName,
    pub slots: Vec<Slot>,
}

/// One weekday's entry in the schedule save request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day_name: DayName,
    pub slots: Vec<String>,
}

/// Body of the schedule save request sent to the booking API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePayload {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub schedules: Vec<DaySchedule>,
}

fn default_slot_duration() -> u32 {
    DEFAULT_SLOT_DURATION
}

fn default_buffer_time() -> u32 {
    DEFAULT_BUFFER_TIME
}

fn default_working_hours() -> Vec<WorkingWindow> {
    DayName::ALL.iter().copied().map(WorkingWindow::new).collect()
}

/// Editable weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    #[serde(default = "default_slot_duration")]
    pub slot_duration: u32,
    #[serde(default = "default_buffer_time")]
    pub buffer_time: u32,
    #[serde(default = "default_working_hours")]
    pub working_hours: Vec<WorkingWindow>,
}

impl Default for ScheduleDraft {
    fn default() -> Self {
        Self {
            from_date: None,
            to_date: None,
            slot_duration: DEFAULT_SLOT_DURATION,
            buffer_time: DEFAULT_BUFFER_TIME,
            working_hours: default_working_hours(),
        }
    }
}

impl ScheduleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a stored draft.
    ///
    /// Stored drafts may be stale or hand-edited: a zero slot duration falls back
    /// to the default, and days missing from `workingHours` are filled in so every
    /// weekday appears exactly once, Monday first.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut draft: ScheduleDraft = serde_json::from_str(json)?;
        if draft.slot_duration == 0 {
            warn!("stored draft has zero slot duration; using default");
            draft.slot_duration = DEFAULT_SLOT_DURATION;
        }
        draft.working_hours = DayName::ALL
            .iter()
            .map(|day| {
                draft
                    .working_hours
                    .iter()
                    .find(|w| w.day == *day)
                    .cloned()
                    .unwrap_or_else(|| WorkingWindow::new(*day))
            })
            .collect();
        Ok(draft)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn spec(&self) -> SlotSpec {
        SlotSpec::new(self.slot_duration, self.buffer_time)
    }

    pub fn window(&self, day: DayName) -> Option<&WorkingWindow> {
        self.working_hours.iter().find(|w| w.day == day)
    }

    pub fn window_mut(&mut self, day: DayName) -> Option<&mut WorkingWindow> {
        self.working_hours.iter_mut().find(|w| w.day == day)
    }

    /// Set a day's working hours and interval.
    pub fn set_hours(
        &mut self,
        day: DayName,
        start: Option<TimeOfDay>,
        end: Option<TimeOfDay>,
        slot_interval: Option<u32>,
    ) {
        match self.window_mut(day) {
            Some(window) => {
                window.start_time = start;
                window.end_time = end;
                window.slot_interval = slot_interval;
            }
            None => self.working_hours.push(WorkingWindow {
                day,
                start_time: start,
                end_time: end,
                slot_interval,
            }),
        }
    }

    pub fn slots_for(&self, day: DayName) -> Vec<Slot> {
        self.window(day)
            .map(|window| generate_for_window(window, self.spec()))
            .unwrap_or_default()
    }

    /// Slots for every configured day, in draft order.
    pub fn all_slots(&self) -> Vec<DaySlots> {
        self.working_hours
            .iter()
            .map(|window| DaySlots {
                day: window.day,
                slots: generate_for_window(window, self.spec()),
            })
            .collect()
    }

    /// Whether `date` falls inside the draft's from/to range. Unset bounds are open.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.from_date.is_none_or(|from| date >= from) && self.to_date.is_none_or(|to| date <= to)
    }

    /// Slots for the weekday of a calendar date, or none outside the date range.
    pub fn slots_on(&self, date: NaiveDate) -> Vec<Slot> {
        if !self.covers(date) {
            debug!(%date, "date outside schedule range");
            return Vec::new();
        }
        self.slots_for(DayName::from(date.weekday()))
    }

    pub fn total_slots(&self) -> usize {
        self.all_slots().iter().map(|d| d.slots.len()).sum()
    }

    /// Short status line for the schedule overview.
    pub fn day_status(&self, day: DayName) -> String {
        match self.window(day) {
            Some(window) if window.has_hours() => match self.slots_for(day).len() {
                0 => "Hours set, no slots".to_string(),
                1 => "1 slot generated".to_string(),
                n => format!("{} slots generated", n),
            },
            _ => "No hours configured".to_string(),
        }
    }

    /// Copy hours and interval from the day before `index`. Index 0 is a no-op.
    pub fn copy_from_previous(&mut self, index: usize) -> Result<()> {
        if index >= self.working_hours.len() {
            return Err(SlotError::DayIndex(index));
        }
        if index == 0 {
            return Ok(());
        }
        let prev = self.working_hours[index - 1].clone();
        let current = &mut self.working_hours[index];
        current.start_time = prev.start_time;
        current.end_time = prev.end_time;
        current.slot_interval = prev.slot_interval;
        Ok(())
    }

    pub fn clear_day(&mut self, index: usize) -> Result<()> {
        self.working_hours
            .get_mut(index)
            .ok_or(SlotError::DayIndex(index))?
            .clear();
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the save request. Days without slots are left out.
    pub fn to_payload(&self) -> Result<SchedulePayload> {
        let (Some(from_date), Some(to_date)) = (self.from_date, self.to_date) else {
            return Err(SlotError::MissingDateRange);
        };
        if from_date > to_date {
            return Err(SlotError::InvalidDateRange {
                from: from_date,
                to: to_date,
            });
        }

        let schedules = self
            .all_slots()
            .into_iter()
            .filter(|d| !d.slots.is_empty())
            .map(|d| DaySchedule {
                day_name: d.day,
                slots: d.slots.iter().map(|s| s.label().to_string()).collect(),
            })
            .collect();

        Ok(SchedulePayload {
            from_date,
            to_date,
            schedules,
        })
    }
}
