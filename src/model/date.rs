//! Event date types: the five shapes a timeline event's display date can take.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The display date of a timeline event, persisted as a JSON blob.
///
/// Tagged on `type` so the stored blob is self-describing:
///
/// ```json
/// { "type": "exact", "year": 520, "month": 3, "era": "SE" }
/// ```
///
/// Fields that belong to another variant are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventDate {
    /// A specific year, optionally narrowed to a month and day.
    Exact {
        year: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        month: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        day: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        era: Option<String>,
        /// Marks a date the author is not fully sure of.
        #[serde(default, skip_serializing_if = "is_false")]
        approximate: bool,
    },

    /// A fuzzy date: a year, a span of years, or only free text.
    Approximate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        year: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        year_range: Option<(i64, i64)>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        era: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        period: Option<Period>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// A span between two partial dates. Only `start` matters for ordering.
    Range {
        start: PartialDate,
        end: PartialDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// A date described relative to something else ("three days after the coup").
    Relative {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reference_event_id: Option<Uuid>,
    },

    /// No date is known.
    Unknown {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

/// One end of a [`EventDate::Range`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialDate {
    pub year: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
}

/// Sub-year position of an approximate date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Early,
    Mid,
    Late,
}

impl Period {
    /// Ordering rank within a year. An unset period ranks as `Mid`.
    pub fn rank(period: Option<Self>) -> u8 {
        match period {
            Some(Self::Early) => 1,
            Some(Self::Mid) | None => 2,
            Some(Self::Late) => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Mid => "mid",
            Self::Late => "late",
        }
    }
}

impl EventDate {
    /// Decode a persisted blob, returning `None` for anything that doesn't fit.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match Self::deserialize(value) {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed event date");
                None
            }
        }
    }

    /// The era tag that anchors this date for ordering.
    pub fn era(&self) -> Option<&str> {
        match self {
            Self::Exact { era, .. } | Self::Approximate { era, .. } => era.as_deref(),
            Self::Range { start, .. } => start.era.as_deref(),
            Self::Relative { .. } | Self::Unknown { .. } => None,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}
