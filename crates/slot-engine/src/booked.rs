//! Normalize booked-slot responses from the booking API.
//!
//! Depending on the endpoint, the API returns either bare range strings or
//! objects carrying a `slot_range` and an `is_booked` flag. Both shapes are
//! accepted and reduced to a [`BookedSlotSet`] of range labels.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One entry of a booked-slot response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookedSlotEntry {
    Range(String),
    Detailed {
        slot_range: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_booked: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        day_name: Option<String>,
    },
}

impl BookedSlotEntry {
    pub fn slot_range(&self) -> &str {
        match self {
            BookedSlotEntry::Range(range) => range,
            BookedSlotEntry::Detailed { slot_range, .. } => slot_range,
        }
    }

    /// The explicit booking flag, if the API sent one. Bare strings carry none.
    pub fn is_booked(&self) -> Option<bool> {
        match self {
            BookedSlotEntry::Range(_) => None,
            BookedSlotEntry::Detailed { is_booked, .. } => *is_booked,
        }
    }
}

/// Response body of the booked-slots endpoint for one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSlotsResponse {
    #[serde(default)]
    pub slots: Vec<BookedSlotEntry>,
}

impl BookedSlotsResponse {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Ranges not flagged as booked, in response order.
    ///
    /// Used when the API returns a date's full slot list. Entries without an
    /// `is_booked` flag are open.
    pub fn available_ranges(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter(|entry| entry.is_booked() != Some(true))
            .map(|entry| entry.slot_range().to_string())
            .collect()
    }
}

/// Range labels that are unavailable on a specific calendar date.
///
/// Membership is an exact string comparison against the label the API sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookedSlotSet {
    ranges: HashSet<String>,
}

impl BookedSlotSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ranges: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a booked or deactivated list. Entries without an `is_booked`
    /// flag count as booked; only an explicit `false` is left out.
    pub fn from_response(response: &BookedSlotsResponse) -> Self {
        Self::from_labels(
            response
                .slots
                .iter()
                .filter(|entry| entry.is_booked().unwrap_or(true))
                .map(|entry| entry.slot_range()),
        )
    }

    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.ranges.insert(label.into())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ranges.contains(label)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for BookedSlotSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_labels(iter)
    }
}

impl From<&BookedSlotsResponse> for BookedSlotSet {
    fn from(response: &BookedSlotsResponse) -> Self {
        Self::from_response(response)
    }
}
