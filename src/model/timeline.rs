//! Timeline records: the entities that own event dates and birth dates.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::date::EventDate;

/// A world's timeline as persisted by the wiki.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub name: String,

    /// Free-form era string, e.g. `"BE, SE"`. Parsed on every read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eras: Option<String>,

    #[serde(default)]
    pub events: Vec<TimelineEvent>,

    #[serde(default)]
    pub characters: Vec<Character>,
}

/// A dated occurrence in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: Uuid,
    pub title: String,

    /// A malformed stored blob decodes as no date rather than failing the timeline.
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<EventDate>,

    /// Characters involved in the event.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub characters: Vec<Uuid>,
}

/// An original character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: Uuid,
    pub name: String,

    /// As typed into the wiki form: `06/15`, `0480-06-15`, `SE 480-06-15`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl Timeline {
    pub fn character(&self, id: Uuid) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<EventDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(EventDate::from_value(&value))
}
