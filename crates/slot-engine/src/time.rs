//! Wall-clock time of day with 12-hour label formatting and parsing.
//!
//! Slot labels use the "h:mm AM - h:mm PM" shape that the booking API stores,
//! while working hours are entered as 24-hour "HH:MM" strings. Both directions
//! go through [`TimeOfDay`].

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day (hour, minute) with no date or timezone.
///
/// Ordering is chronological. Serialized as a 24-hour `"HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Build a time of day, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Inverse of [`minutes_since_midnight`](Self::minutes_since_midnight).
    /// Returns `None` for values that fall on or after the next midnight.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Some(Self {
            hour: minutes / 60,
            minute: minutes % 60,
        })
    }

    /// Add minutes without wrapping past midnight.
    pub fn checked_add_minutes(&self, minutes: u32) -> Option<Self> {
        self.minutes_since_midnight()
            .checked_add(minutes)
            .and_then(Self::from_minutes)
    }

    /// Parse a 24-hour `"HH:MM"` value as entered in the working-hours form.
    ///
    /// A trailing seconds component (`"09:00:00"`) is accepted and ignored.
    pub fn parse_24h(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTime(s.to_string());
        let mut parts = s.trim().split(':');
        let hour = parse_number(parts.next()).ok_or_else(invalid)?;
        let minute = parse_number(parts.next()).ok_or_else(invalid)?;
        if let Some(seconds) = parts.next() {
            parse_number(Some(seconds)).filter(|s| *s < 60).ok_or_else(invalid)?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Self::new(hour, minute).map_err(|_| invalid())
    }

    /// Parse a 12-hour clock value such as `"9:00 AM"` or `"09:30 pm"`.
    ///
    /// 12 AM is midnight and 12 PM is noon. The hour must be in 1..=12.
    pub fn parse_12h(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTime(s.to_string());
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(invalid)?;
        let (clock, meridian) = trimmed.split_at(split);
        let pm = match meridian.trim() {
            m if m.eq_ignore_ascii_case("AM") => false,
            m if m.eq_ignore_ascii_case("PM") => true,
            _ => return Err(invalid()),
        };

        let (h, m) = clock.trim().split_once(':').ok_or_else(invalid)?;
        let hour = parse_number(Some(h)).filter(|h| (1..=12).contains(h)).ok_or_else(invalid)?;
        let minute = parse_number(Some(m)).ok_or_else(invalid)?;

        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
        Self::new(hour, minute).map_err(|_| invalid())
    }

    /// Format as a 12-hour clock value: `"9:05 AM"`, `"12:00 PM"`.
    pub fn format_12h(&self) -> String {
        let display_hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        let meridian = if self.hour >= 12 { "PM" } else { "AM" };
        format!("{}:{:02} {}", display_hour, self.minute, meridian)
    }
}

/// Split a `"start - end"` range label and parse both halves as 12-hour times.
pub fn parse_range(label: &str) -> Result<(TimeOfDay, TimeOfDay)> {
    let invalid = || SlotError::InvalidLabel(label.to_string());
    let (start, end) = label.split_once('-').ok_or_else(invalid)?;
    let start = TimeOfDay::parse_12h(start).map_err(|_| invalid())?;
    let end = TimeOfDay::parse_12h(end).map_err(|_| invalid())?;
    Ok((start, end))
}

/// Format a range label: `"9:00 AM - 9:45 AM"`.
pub fn format_range(start: TimeOfDay, end: TimeOfDay) -> String {
    format!("{} - {}", start.format_12h(), end.format_12h())
}

fn parse_number(part: Option<&str>) -> Option<u32> {
    let part = part?.trim();
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_24h(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse_24h(&s)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Seconds and sub-second precision are truncated.
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(t.hour, t.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}
