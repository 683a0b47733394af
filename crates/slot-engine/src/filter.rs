//! Remove slots that cannot be booked on a given calendar date.
//!
//! Two rules apply, in order: slots whose label is in the booked set are dropped,
//! and when the target date is today, slots that have already ended are dropped.
//! The current time is always passed in; nothing here reads a clock.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::booked::BookedSlotSet;
use crate::error::{Result, SlotError};
use crate::generator::Slot;
use crate::time::{parse_range, TimeOfDay};

/// Anything that carries a `"start - end"` range label.
///
/// Implemented for generated [`Slot`]s and for raw range strings coming from the
/// booking API, so both can go through [`filter_available`].
pub trait RangeLabel {
    fn range_label(&self) -> &str;

    /// End of the range, or `None` when the label cannot be parsed.
    fn range_end(&self) -> Option<TimeOfDay> {
        parse_range(self.range_label()).ok().map(|(_, end)| end)
    }
}

impl RangeLabel for Slot {
    fn range_label(&self) -> &str {
        self.label()
    }

    fn range_end(&self) -> Option<TimeOfDay> {
        Some(self.end_time())
    }
}

impl RangeLabel for String {
    fn range_label(&self) -> &str {
        self
    }
}

impl RangeLabel for &str {
    fn range_label(&self) -> &str {
        self
    }
}

/// Where a target date sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRelation {
    Today,
    Future,
}

/// Reject dates before today; slots are only loaded for today or later.
pub fn check_target_date(target: NaiveDate, today: NaiveDate) -> Result<DateRelation> {
    if target < today {
        return Err(SlotError::PastDate { target, today });
    }
    Ok(if target == today {
        DateRelation::Today
    } else {
        DateRelation::Future
    })
}

/// Whether a slot is still bookable at `now`.
///
/// A slot ending exactly at `now` has expired. Unparsable labels are kept so the
/// anomaly stays visible.
fn ends_after(slot: &impl RangeLabel, now: NaiveTime) -> bool {
    match slot.range_end() {
        Some(end) => NaiveTime::from(end) > now,
        None => {
            warn!(label = slot.range_label(), "cannot parse slot range; keeping it");
            true
        }
    }
}

/// Filter `slots` down to those bookable on `target_date`.
///
/// - Slots whose label exactly matches an entry in `booked` are removed.
/// - If `target_date` is the calendar date of `now`, slots whose end time is not
///   strictly after the wall-clock time of `now` are removed.
///
/// Input order is preserved. Dates before today get no time-based filtering; the
/// caller is expected to reject them with [`check_target_date`].
pub fn filter_available<T>(
    slots: &[T],
    booked: &BookedSlotSet,
    target_date: NaiveDate,
    now: NaiveDateTime,
) -> Vec<T>
where
    T: RangeLabel + Clone,
{
    let same_day = target_date == now.date();
    let now_time = now.time();

    let available: Vec<T> = slots
        .iter()
        .filter(|slot| !booked.contains(slot.range_label()))
        .filter(|slot| !same_day || ends_after(*slot, now_time))
        .cloned()
        .collect();

    debug!(
        %target_date,
        same_day,
        candidates = slots.len(),
        available = available.len(),
        "filtered slots"
    );
    available
}
