// Kitchen display (tablet) use cases

use super::KitchenService;
use crate::domain::display::{
    self, DisplayAnalytics, DisplayBoard, HousekeepingNote, OrderModification,
};
use crate::domain::error::Result as DomainResult;
use crate::domain::reservation;
use crate::domain::DomainError;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Acknowledgement for a tablet button press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAction {
    pub action: String,
    pub target: Option<String>,
    pub changed: usize,
}

impl DisplayAction {
    fn on(action: &str, target: &str) -> Self {
        Self {
            action: action.to_string(),
            target: Some(target.to_string()),
            changed: 1,
        }
    }
}

impl KitchenService {
    /// Everything the wall tablet shows, reservations limited to today
    pub async fn display_board(&self) -> DisplayBoard {
        let now = self.time_provider.now();
        let today = self.time_provider.today();
        let state = self.state.read().await;
        display::board(
            reservation::for_date(&state.reservations, today),
            &state.prep,
            &state.modifications,
            &state.housekeeping,
            &state.whiteboard,
            now,
        )
    }

    pub async fn display_analytics(&self) -> DisplayAnalytics {
        let state = self.state.read().await;
        display::analytics(&state.prep, &state.modifications)
    }

    pub async fn accept_modification(&self, id: &str) -> Result<DisplayAction> {
        self.resolve_modification(id, "accept", OrderModification::accept)
            .await
    }

    pub async fn decline_modification(&self, id: &str) -> Result<DisplayAction> {
        self.resolve_modification(id, "decline", OrderModification::decline)
            .await
    }

    pub async fn complete_housekeeping(&self, id: &str) -> Result<DisplayAction> {
        let mut state = self.state.write().await;
        let note = state
            .housekeeping
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| DomainError::not_found("HousekeepingNote", id))?;
        HousekeepingNote::complete(note)?;
        info!(housekeeping_id = id, title = %note.title, "Housekeeping done");
        Ok(DisplayAction::on("housekeeping_done", id))
    }

    /// Drop every resolved modification
    pub async fn clear_completed_modifications(&self) -> DisplayAction {
        let mut state = self.state.write().await;
        let removed = display::clear_completed(&mut state.modifications);
        info!(removed, "Resolved modifications cleared");
        DisplayAction {
            action: "clear_completed".to_string(),
            target: None,
            changed: removed,
        }
    }

    async fn resolve_modification(
        &self,
        id: &str,
        action: &str,
        apply: fn(&mut OrderModification) -> DomainResult<()>,
    ) -> Result<DisplayAction> {
        let mut state = self.state.write().await;
        let modification = state
            .modifications
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DomainError::not_found("OrderModification", id))?;
        apply(modification)?;
        info!(
            modification_id = id,
            table = modification.table_number,
            status = %modification.status,
            "Order modification resolved"
        );
        Ok(DisplayAction::on(action, id))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::service;
    use super::*;
    use crate::domain::display::ModificationStatus;
    use crate::domain::staff::WorkStatus;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_board_metrics_from_seed() {
        let board = service().display_board().await;
        assert_eq!(board.reservations.len(), 3);
        assert_eq!(board.metrics.orders_in_queue, 4);
        assert_eq!(board.metrics.prep_completion, 30);
        assert_eq!(board.metrics.average_ticket_time, 6);
        assert_eq!(board.metrics.kitchen_status, "Behind");
        assert_eq!(board.modifications[0].time_ago, "2 min ago");
        assert_eq!(board.whiteboard.len(), 4);
    }

    #[tokio::test]
    async fn test_analytics_follow_queue() {
        let svc = service();
        let analytics = svc.display_analytics().await;
        assert_eq!(analytics.prep_by_category.len(), 5);
        assert!(analytics.prep_by_category.iter().all(|t| t.count == 2));
        assert_eq!(analytics.timeline[0].table_number, 15);

        svc.decline_modification("4").await.unwrap();
        let statuses = svc.display_analytics().await.modifications_by_status;
        assert_eq!(statuses[0].label, "pending");
        assert_eq!(statuses[0].count, 3);
        assert_eq!(statuses[1].label, "declined");
    }

    #[tokio::test]
    async fn test_accept_decline_then_clear() {
        let svc = service();
        svc.accept_modification("1").await.unwrap();
        svc.decline_modification("2").await.unwrap();
        assert!(matches!(
            svc.accept_modification("1").await,
            Err(AppError::InvalidState(_))
        ));

        let cleared = svc.clear_completed_modifications().await;
        assert_eq!(cleared.changed, 2);
        let board = svc.display_board().await;
        assert_eq!(board.metrics.orders_in_queue, 2);
        assert!(board
            .modifications
            .iter()
            .all(|m| m.modification.status == ModificationStatus::Pending));
    }

    #[tokio::test]
    async fn test_housekeeping_done() {
        let svc = service();
        let ack = svc.complete_housekeeping("3").await.unwrap();
        assert_eq!(ack.target.as_deref(), Some("3"));
        let board = svc.display_board().await;
        let note = board.housekeeping.iter().find(|h| h.note.id == "3").unwrap();
        assert_eq!(note.note.status, WorkStatus::Completed);
        assert!(matches!(
            svc.complete_housekeeping("99").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_complete_all_prep_clears_behind_status() {
        let svc = service();
        svc.complete_all_prep().await;
        let metrics = svc.display_board().await.metrics;
        assert_eq!(metrics.kitchen_status, "Operational");
        assert_eq!(metrics.prep_completion, 100);
    }
}
