// Prep checklist use cases

use super::KitchenService;
use crate::domain::prep::{
    self, CategorySummary, NewPrepItem, PrepAnalytics, PrepGroup, PrepItem, PrepOverview,
};
use crate::domain::sequence::next_id;
use crate::domain::DomainError;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepBoard {
    pub overview: PrepOverview,
    pub categories: Vec<PrepGroup>,
    pub summary: Vec<CategorySummary>,
}

impl KitchenService {
    pub async fn prep_board(&self) -> PrepBoard {
        let state = self.state.read().await;
        PrepBoard {
            overview: prep::overview(&state.prep),
            categories: prep::by_category(&state.prep),
            summary: prep::summary(&state.prep),
        }
    }

    pub async fn add_prep_item(&self, req: NewPrepItem) -> Result<PrepItem> {
        let today = self.time_provider.today();
        let mut state = self.state.write().await;
        let id = next_id("PREP", state.prep.iter().map(|p| p.id.as_str()));
        let item = req.into_item(id, today)?;
        info!(prep_id = %item.id, category = %item.category, "Prep item added");
        state.prep.push(item.clone());
        Ok(item)
    }

    /// Set the completed quantity; status follows the quantity
    pub async fn update_prep_quantity(&self, id: &str, quantity: u32) -> Result<PrepItem> {
        let mut state = self.state.write().await;
        let item = find_prep(&mut state.prep, id)?;
        if item.update_quantity(quantity)? {
            info!(prep_id = id, quantity, status = %item.status, "Prep quantity updated");
        } else {
            debug!(prep_id = id, quantity, "Prep quantity unchanged");
        }
        Ok(item.clone())
    }

    pub async fn complete_prep_item(&self, id: &str) -> Result<PrepItem> {
        let mut state = self.state.write().await;
        let item = find_prep(&mut state.prep, id)?;
        item.complete()?;
        info!(prep_id = id, "Prep item completed");
        Ok(item.clone())
    }

    /// Tablet quick action; returns how many items changed
    pub async fn complete_all_prep(&self) -> usize {
        let mut state = self.state.write().await;
        let changed = prep::mark_all_complete(&mut state.prep);
        info!(changed, "All prep marked complete");
        changed
    }

    pub async fn prep_analytics(&self) -> PrepAnalytics {
        prep::analytics(&self.state.read().await.prep)
    }
}

fn find_prep<'a>(items: &'a mut [PrepItem], id: &str) -> Result<&'a mut PrepItem> {
    items
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| DomainError::not_found("PrepItem", id).into())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::service;
    use super::*;
    use crate::domain::prep::{PrepCategory, PrepStatus};
    use crate::error::AppError;
    use serde_json::json;

    #[tokio::test]
    async fn test_board_groups_behind_first() {
        let board = service().prep_board().await;
        assert_eq!(board.overview.total, 10);
        assert_eq!(board.overview.completed, 3);
        assert_eq!(board.overview.behind, 2);
        assert_eq!(board.overview.completion_percentage, 30.0);

        assert_eq!(board.categories[0].category, PrepCategory::MiseEnPlace);
        let protein = &board.categories[1];
        assert_eq!(protein.items[0].item.id, "PREP-004");
        assert_eq!(protein.items[1].progress, 0.8);
    }

    #[tokio::test]
    async fn test_quantity_drives_status() {
        let svc = service();
        let item = svc.update_prep_quantity("PREP-005", 1).await.unwrap();
        assert_eq!(item.status, PrepStatus::Completed);

        let item = svc.update_prep_quantity("PREP-004", 1).await.unwrap();
        assert_eq!(item.status, PrepStatus::InProgress);

        let err = svc.update_prep_quantity("PREP-004", 7).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(matches!(
            svc.update_prep_quantity("PREP-404", 1).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_complete_twice_is_invalid_state() {
        let svc = service();
        let item = svc.complete_prep_item("PREP-010").await.unwrap();
        assert_eq!(item.quantity_completed, 50);
        assert!(matches!(
            svc.complete_prep_item("PREP-010").await,
            Err(AppError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn test_complete_all_counts_changes() {
        let svc = service();
        assert_eq!(svc.complete_all_prep().await, 7);
        assert_eq!(svc.complete_all_prep().await, 0);
        assert_eq!(svc.prep_board().await.overview.completion_percentage, 100.0);
    }

    #[tokio::test]
    async fn test_add_item_gets_next_id() {
        let svc = service();
        let req: NewPrepItem = serde_json::from_value(json!({
            "name": "Shallots brunoise",
            "quantity_needed": 2,
            "unit": "cups",
            "assigned_to": "Chef Alex",
        }))
        .unwrap();
        let item = svc.add_prep_item(req).await.unwrap();
        assert_eq!(item.id, "PREP-011");
        assert_eq!(item.quantity_completed, 0);
        assert_eq!(svc.prep_analytics().await.by_status.len(), 4);
    }
}
