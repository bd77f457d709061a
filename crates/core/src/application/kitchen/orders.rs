// Order guide use cases

use super::KitchenService;
use crate::domain::orders::{
    self, NewOrderItem, OrderAnalytics, OrderFilter, OrderItem, OrderOverview, OrderRow, Supplier,
    SupplierOrder,
};
use crate::domain::sequence::next_id;
use crate::domain::DomainError;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersBoard {
    pub overview: OrderOverview,
    pub items: Vec<OrderRow>,
    pub suppliers: Vec<Supplier>,
}

impl KitchenService {
    pub async fn orders_board(&self, filter: OrderFilter) -> OrdersBoard {
        let today = self.time_provider.today();
        let state = self.state.read().await;
        OrdersBoard {
            overview: orders::overview(&state.orders),
            items: orders::list(&state.orders, &filter, today),
            suppliers: state.suppliers.clone(),
        }
    }

    pub async fn add_order_item(&self, req: NewOrderItem) -> Result<OrderItem> {
        let today = self.time_provider.today();
        let mut state = self.state.write().await;
        let id = next_id("ORD", state.orders.iter().map(|o| o.id.as_str()));
        let item = req.into_item(id, &state.suppliers, today)?;
        info!(
            order_id = %item.id,
            supplier = %item.supplier,
            estimated_cost = item.estimated_cost,
            "Order item added"
        );
        state.orders.push(item.clone());
        Ok(item)
    }

    /// pending -> ordered -> received -> completed
    pub async fn advance_order(&self, id: &str) -> Result<OrderItem> {
        let mut state = self.state.write().await;
        let item = state
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| DomainError::not_found("OrderItem", id))?;
        let status = item.advance()?;
        info!(order_id = id, status = %status, "Order advanced");
        Ok(item.clone())
    }

    pub async fn orders_by_supplier(&self) -> Vec<SupplierOrder> {
        orders::by_supplier(&self.state.read().await.orders)
    }

    pub async fn order_analytics(&self) -> OrderAnalytics {
        orders::analytics(&self.state.read().await.orders)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{service, today};
    use super::*;
    use crate::domain::orders::OrderStatus;
    use crate::domain::Priority;
    use crate::error::AppError;
    use chrono::Duration;
    use serde_json::json;

    #[tokio::test]
    async fn test_board_sorted_and_costed() {
        let board = service().orders_board(OrderFilter::default()).await;
        assert_eq!(board.overview.total, 6);
        assert_eq!(board.overview.pending, 6);
        assert_eq!(board.overview.urgent, 1);
        assert_eq!(board.overview.pending_cost, 701.0);
        let ids: Vec<&str> = board.items.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-004", "ORD-001", "ORD-006", "ORD-005", "ORD-002", "ORD-003"]);
        assert_eq!(board.suppliers.len(), 6);
    }

    #[tokio::test]
    async fn test_filter_by_priority() {
        let board = service()
            .orders_board(OrderFilter {
                priority: Some(Priority::High),
                ..Default::default()
            })
            .await;
        assert_eq!(board.items.len(), 2);
    }

    #[tokio::test]
    async fn test_advance_through_lifecycle() {
        let svc = service();
        for expected in [OrderStatus::Ordered, OrderStatus::Received, OrderStatus::Completed] {
            assert_eq!(svc.advance_order("ORD-003").await.unwrap().status, expected);
        }
        assert!(matches!(
            svc.advance_order("ORD-003").await,
            Err(AppError::InvalidState(_))
        ));
        // only pending items are grouped for ordering
        let groups = svc.orders_by_supplier().await;
        assert!(groups.iter().all(|g| g.supplier != "Local Farm"));
        assert_eq!(groups.len(), 5);
    }

    #[tokio::test]
    async fn test_add_defaults_needed_date_to_tomorrow() {
        let svc = service();
        let req: NewOrderItem = serde_json::from_value(json!({
            "item_name": "Heavy Cream",
            "category": "Dairy",
            "quantity": 4,
            "unit": "quarts",
            "supplier": "Fresh Farms",
            "estimated_cost": 18.5,
        }))
        .unwrap();
        let item = svc.add_order_item(req).await.unwrap();
        assert_eq!(item.id, "ORD-007");
        assert_eq!(item.needed_date, today() + Duration::days(1));
        assert_eq!(item.status, OrderStatus::Pending);

        let analytics = svc.order_analytics().await;
        assert_eq!(analytics.pending_cost_by_category.len(), 4);
    }

    #[tokio::test]
    async fn test_add_unknown_supplier_rejected() {
        let req: NewOrderItem = serde_json::from_value(json!({
            "item_name": "Saffron",
            "quantity": 1,
            "unit": "oz",
            "supplier": "Nowhere Co",
        }))
        .unwrap();
        let err = service().add_order_item(req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
