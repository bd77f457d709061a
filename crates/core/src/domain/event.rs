// Event record (persisted)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::validation::required_short;

pub type EventId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: String,
    pub notes: Option<String>,
}

/// Writable fields for create / full update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewEvent {
    /// Required text checks only; `end` may precede `start`.
    pub fn validated(self) -> Result<Self> {
        Ok(Self {
            name: required_short("name", &self.name)?,
            start: self.start,
            end: self.end,
            location: required_short("location", &self.location)?,
            notes: self.notes,
        })
    }
}

/// Partial update; absent fields are left unchanged. `notes` uses a
/// nested option so a client can clear it with an explicit null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    pub name: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub notes: Option<Option<String>>,
}

fn deserialize_some<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl EventPatch {
    pub fn apply(self, event: &Event) -> Result<NewEvent> {
        NewEvent {
            name: self.name.unwrap_or_else(|| event.name.clone()),
            start: self.start.unwrap_or(event.start),
            end: self.end.unwrap_or(event.end),
            location: self.location.unwrap_or_else(|| event.location.clone()),
            notes: self.notes.unwrap_or_else(|| event.notes.clone()),
        }
        .validated()
    }
}
