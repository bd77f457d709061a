// Task record (persisted)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::validation::required_short;

pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// Set on insert, read-only afterwards
    pub created_at: DateTime<Utc>,
}

/// Writable fields for create / full update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTask {
    pub fn validated(self) -> Result<Self> {
        Ok(Self {
            title: required_short("title", &self.title)?,
            completed: self.completed,
        })
    }
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Merge onto the stored task, producing the full replacement.
    pub fn apply(self, task: &Task) -> Result<NewTask> {
        NewTask {
            title: self.title.unwrap_or_else(|| task.title.clone()),
            completed: self.completed.unwrap_or(task.completed),
        }
        .validated()
    }
}
