// Kitchen notes, quick templates, announcements and the whiteboard canvas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{DomainError, Result};
use super::priority::Priority;
use super::validation::required;

pub const DEFAULT_NOTE_CATEGORY: &str = "general";
pub const QUICK_NOTE_AUTHOR: &str = "Kitchen";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub author: String,
}

impl NewNote {
    pub fn into_note(self, id: u32, timestamp: DateTime<Utc>) -> Result<Note> {
        Ok(Note {
            id,
            title: required("title", &self.title)?,
            content: required("content", &self.content)?,
            priority: self.priority,
            author: required("author", &self.author)?,
            timestamp,
            category: DEFAULT_NOTE_CATEGORY.to_string(),
        })
    }
}

/// One-click note templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickNote {
    #[serde(rename = "86 Items")]
    EightySixItems,
    #[serde(rename = "Special Prep")]
    SpecialPrep,
    #[serde(rename = "Station Notes")]
    StationNotes,
}

impl QuickNote {
    pub const ALL: [QuickNote; 3] = [
        QuickNote::EightySixItems,
        QuickNote::SpecialPrep,
        QuickNote::StationNotes,
    ];

    pub fn title(self) -> &'static str {
        match self {
            QuickNote::EightySixItems => "86 Items",
            QuickNote::SpecialPrep => "Special Prep",
            QuickNote::StationNotes => "Station Notes",
        }
    }

    pub fn to_new_note(self) -> NewNote {
        let (content, priority) = match self {
            QuickNote::EightySixItems => ("Items that are out of stock", Priority::Urgent),
            QuickNote::SpecialPrep => ("Special preparation needed", Priority::High),
            QuickNote::StationNotes => ("Notes for specific station", Priority::Medium),
        };
        NewNote {
            title: self.title().to_string(),
            content: content.to_string(),
            priority,
            author: QUICK_NOTE_AUTHOR.to_string(),
        }
    }
}

impl FromStr for QuickNote {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        QuickNote::ALL
            .into_iter()
            .find(|t| t.title().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::invalid("template", format!("unknown template '{}'", wanted)))
    }
}

/// Urgent first, newest first within a priority.
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.timestamp.cmp(&a.timestamp))
            .then_with(|| b.id.cmp(&a.id))
    });
}

pub fn next_note_id(notes: &[Note]) -> u32 {
    notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
}

pub fn announcements(now: DateTime<Utc>) -> Vec<Announcement> {
    let entry = |title: &str, content: &str, priority, hours_ago| Announcement {
        title: title.to_string(),
        content: content.to_string(),
        priority,
        timestamp: now - chrono::Duration::hours(hours_ago),
    };

    vec![
        entry(
            "VIP Table Alert",
            "Food critic expected around 8 PM - Table 12",
            Priority::High,
            2,
        ),
        entry(
            "Dishwasher Maintenance",
            "Dishwasher maintenance at 3 PM - Use backup machine",
            Priority::Medium,
            4,
        ),
        entry(
            "Today's Special",
            "Pan-seared salmon with lemon butter sauce - $28",
            Priority::Low,
            6,
        ),
    ]
}

/// Saved whiteboard drawing; the canvas payload is opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub data: serde_json::Value,
    pub saved_at: DateTime<Utc>,
}

impl Drawing {
    pub fn new(data: serde_json::Value, saved_at: DateTime<Utc>) -> Result<Self> {
        if is_blank_drawing(&data) {
            return Err(DomainError::invalid("drawing", "No drawing to save"));
        }
        Ok(Self { data, saved_at })
    }
}

fn is_blank_drawing(data: &serde_json::Value) -> bool {
    use serde_json::Value;
    match data {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
