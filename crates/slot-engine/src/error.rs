//! Error types for slot-engine operations.
//!
//! The slot generator and the availability filter never fail; these errors come
//! from parsing user or API input and from validating schedule drafts.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid slot range label: {0}")]
    InvalidLabel(String),

    #[error("Schedule needs both a from date and a to date")]
    MissingDateRange,

    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("Date {target} is in the past (today is {today})")]
    PastDate { target: NaiveDate, today: NaiveDate },

    #[error("No working day at index {0}")]
    DayIndex(usize),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
