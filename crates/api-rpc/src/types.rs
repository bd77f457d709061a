//! RPC Request/Response Types
//!
//! Method parameters are always JSON objects; board views and records are
//! returned as the core types serialize them.

use chrono::NaiveDate;
use kitchen_core::application::BoardCounts;
use kitchen_core::domain::notes::QuickNote;
use kitchen_core::domain::production::ProductionRow;
use kitchen_core::domain::{EventPatch, NewEvent, NewTask, TaskPatch};
use serde::{Deserialize, Serialize};

/// Methods that take no parameters
#[derive(Debug, Default, Deserialize)]
pub struct NoParams {}

/// tasks.get / tasks.delete / events.get / events.delete
#[derive(Debug, Deserialize)]
pub struct RecordIdRequest {
    pub id: i64,
}

/// tasks.update.v1 - full replacement
#[derive(Debug, Deserialize)]
pub struct TaskUpdateRequest {
    pub id: i64,
    pub task: NewTask,
}

/// tasks.patch.v1
#[derive(Debug, Deserialize)]
pub struct TaskPatchRequest {
    pub id: i64,
    pub patch: TaskPatch,
}

/// events.update.v1 - full replacement
#[derive(Debug, Deserialize)]
pub struct EventUpdateRequest {
    pub id: i64,
    pub event: NewEvent,
}

/// events.patch.v1
#[derive(Debug, Deserialize)]
pub struct EventPatchRequest {
    pub id: i64,
    pub patch: EventPatch,
}

/// Date-scoped views; absent means today
#[derive(Debug, Default, Deserialize)]
pub struct DateRequest {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Board item addressed by its string id ("RES-001", "PREP-004", ...)
#[derive(Debug, Deserialize)]
pub struct ItemIdRequest {
    pub id: String,
}

/// production.save.v1
#[derive(Debug, Deserialize)]
pub struct ProductionSaveRequest {
    pub rows: Vec<ProductionRow>,
}

/// production.toggle.v1
#[derive(Debug, Deserialize)]
pub struct ProductionToggleRequest {
    pub index: usize,
}

/// notes.quick.v1
#[derive(Debug, Deserialize)]
pub struct QuickNoteRequest {
    pub template: QuickNote,
}

/// notes.delete.v1
#[derive(Debug, Deserialize)]
pub struct NoteIdRequest {
    pub id: u32,
}

/// whiteboard.save.v1
#[derive(Debug, Deserialize)]
pub struct WhiteboardSaveRequest {
    pub data: serde_json::Value,
}

/// prep.quantity.v1
#[derive(Debug, Deserialize)]
pub struct PrepQuantityRequest {
    pub id: String,
    pub quantity: u32,
}

/// Result of a delete or clear
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub ok: bool,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// prep.complete_all.v1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteAllResponse {
    pub completed: usize,
}

/// admin.stats.v1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub version: String,
    pub tasks: i64,
    pub events: i64,
    pub boards: BoardCounts,
    pub uptime_seconds: u64,
}
