// Inventory, production board, notes and whiteboard use cases

use super::KitchenService;
use crate::domain::inventory::{self, InventoryDashboard};
use crate::domain::notes::{self, Announcement, Drawing, NewNote, Note, QuickNote};
use crate::domain::production::{self, ProductionRow, ProductionSummary, Station};
use crate::domain::validation::required;
use crate::domain::DomainError;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionBoard {
    pub date: NaiveDate,
    pub rows: Vec<ProductionRow>,
    pub summary: ProductionSummary,
    pub stations: Vec<Station>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotesBoard {
    pub notes: Vec<Note>,
    pub announcements: Vec<Announcement>,
    pub templates: Vec<QuickNote>,
}

impl KitchenService {
    pub async fn inventory_dashboard(&self) -> InventoryDashboard {
        let state = self.state.read().await;
        inventory::dashboard(&state.inventory)
    }

    /// Production rows for `date` (defaults to today). Rows are session
    /// scoped, so the date only labels the board.
    pub async fn production_board(&self, date: Option<NaiveDate>) -> ProductionBoard {
        let state = self.state.read().await;
        self.production_view(&state.production, date)
    }

    fn production_view(&self, rows: &[ProductionRow], date: Option<NaiveDate>) -> ProductionBoard {
        ProductionBoard {
            date: date.unwrap_or_else(|| self.time_provider.today()),
            summary: production::summary(rows),
            rows: rows.to_vec(),
            stations: Station::ALL.to_vec(),
        }
    }

    /// Replace the whole table (data-editor save)
    pub async fn save_production(&self, rows: Vec<ProductionRow>) -> Result<ProductionBoard> {
        let rows = rows
            .into_iter()
            .map(|row| {
                Ok(ProductionRow {
                    task: required("task", &row.task)?,
                    ..row
                })
            })
            .collect::<std::result::Result<Vec<_>, DomainError>>()?;

        let mut state = self.state.write().await;
        info!(rows = rows.len(), "Production board saved");
        state.production = rows;
        Ok(self.production_view(&state.production, None))
    }

    pub async fn toggle_production(&self, index: usize) -> Result<ProductionBoard> {
        let mut state = self.state.write().await;
        let done = production::toggle(&mut state.production, index)?;
        debug!(index, done, "Production row toggled");
        Ok(self.production_view(&state.production, None))
    }

    pub async fn notes_board(&self) -> NotesBoard {
        let state = self.state.read().await;
        let mut sorted = state.notes.clone();
        notes::sort_notes(&mut sorted);
        NotesBoard {
            notes: sorted,
            announcements: notes::announcements(self.time_provider.now()),
            templates: QuickNote::ALL.to_vec(),
        }
    }

    pub async fn add_note(&self, req: NewNote) -> Result<Note> {
        let mut state = self.state.write().await;
        let id = notes::next_note_id(&state.notes);
        let note = req.into_note(id, self.time_provider.now())?;
        info!(note_id = id, priority = %note.priority, "Note added");
        state.notes.push(note.clone());
        Ok(note)
    }

    pub async fn quick_note(&self, template: QuickNote) -> Result<Note> {
        self.add_note(template.to_new_note()).await
    }

    pub async fn delete_note(&self, id: u32) -> Result<()> {
        let mut state = self.state.write().await;
        let before = state.notes.len();
        state.notes.retain(|n| n.id != id);
        if state.notes.len() == before {
            return Err(DomainError::not_found("Note", id).into());
        }
        info!(note_id = id, "Note deleted");
        Ok(())
    }

    pub async fn whiteboard(&self) -> Option<Drawing> {
        self.state.read().await.drawing.clone()
    }

    pub async fn save_whiteboard(&self, data: serde_json::Value) -> Result<Drawing> {
        let drawing = Drawing::new(data, self.time_provider.now())?;
        self.state.write().await.drawing = Some(drawing.clone());
        info!("Whiteboard drawing saved");
        Ok(drawing)
    }

    pub async fn clear_whiteboard(&self) {
        self.state.write().await.drawing = None;
        debug!("Whiteboard cleared");
    }
}
