//! Service-level flows that cross kitchen boards

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use kitchen_core::application::KitchenService;
use kitchen_core::domain::orders::{OrderFilter, OrderStatus};
use kitchen_core::domain::prep::{NewPrepItem, PrepCategory, PrepStatus};
use kitchen_core::domain::reservation::ReservationStatus;
use kitchen_core::domain::Priority;
use kitchen_core::port::FixedTimeProvider;
use kitchen_core::AppError;

fn kitchen() -> KitchenService {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 17, 0, 0).unwrap();
    KitchenService::new(Arc::new(FixedTimeProvider::new(now)))
}

#[tokio::test]
async fn test_evening_service_reservations() {
    let kitchen = kitchen();

    let seated = kitchen.seat_reservation("RES-001").await.unwrap();
    assert_eq!(seated.status, ReservationStatus::Seated);
    assert_eq!(kitchen.reservation_overview().await.seated_today, 2);

    kitchen.complete_reservation("RES-001").await.unwrap();
    let overview = kitchen.reservation_overview().await;
    assert_eq!(overview.seated_today, 1);
    assert_eq!(overview.confirmed_today, 0);

    // Pending parties must be confirmed before seating
    let err = kitchen.seat_reservation("RES-002").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    let err = kitchen.seat_reservation("RES-404").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_finished_prep_clears_behind_status_on_display() {
    let kitchen = kitchen();
    assert_eq!(kitchen.display_board().await.metrics.kitchen_status, "Behind");

    let completed = kitchen.complete_all_prep().await;
    assert_eq!(completed, 7);

    let metrics = kitchen.display_board().await.metrics;
    assert_eq!(metrics.prep_completion, 100);
    assert_eq!(metrics.kitchen_status, "Operational");
    assert_eq!(kitchen.prep_board().await.overview.completion_percentage, 100.0);
}

#[tokio::test]
async fn test_new_prep_item_lowers_completion() {
    let kitchen = kitchen();
    let item = kitchen
        .add_prep_item(NewPrepItem {
            name: "Pickled shallots".to_string(),
            category: PrepCategory::Garnish,
            quantity_needed: 2,
            unit: "quarts".to_string(),
            assigned_to: "Garnish Station".to_string(),
            priority: Priority::Low,
            status: PrepStatus::Pending,
            notes: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(item.id, "PREP-011");
    assert_eq!(kitchen.counts().await.prep_items, 11);

    // 3 of 11 complete
    assert_eq!(kitchen.display_board().await.metrics.prep_completion, 27);
}

#[tokio::test]
async fn test_modification_queue() {
    let kitchen = kitchen();

    kitchen.accept_modification("1").await.unwrap();
    kitchen.decline_modification("2").await.unwrap();
    let err = kitchen.accept_modification("2").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    assert_eq!(kitchen.display_board().await.metrics.orders_in_queue, 2);
    assert_eq!(kitchen.counts().await.pending_modifications, 2);

    let cleared = kitchen.clear_completed_modifications().await;
    assert_eq!(cleared.changed, 2);
    assert_eq!(kitchen.display_board().await.modifications.len(), 2);

    let err = kitchen.accept_modification("1").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_order_moves_through_every_status() {
    let kitchen = kitchen();
    assert_eq!(kitchen.orders_board(OrderFilter::default()).await.overview.pending_cost, 701.0);

    let mut statuses = Vec::new();
    for _ in 0..3 {
        statuses.push(kitchen.advance_order("ORD-004").await.unwrap().status);
    }
    assert_eq!(
        statuses,
        [OrderStatus::Ordered, OrderStatus::Received, OrderStatus::Completed]
    );

    let err = kitchen.advance_order("ORD-004").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    let board = kitchen.orders_board(OrderFilter::default()).await;
    assert_eq!(board.overview.pending, 5);
    assert_eq!(board.overview.pending_cost, 626.0);

    let completed = kitchen
        .orders_board(OrderFilter {
            status: Some(OrderStatus::Completed),
            ..Default::default()
        })
        .await;
    assert_eq!(completed.items.len(), 1);
    assert_eq!(completed.items[0].item.id, "ORD-004");
}
