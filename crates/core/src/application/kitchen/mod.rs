// Kitchen Service - Session-held board state and its use cases
//
// Every dashboard page works on an in-memory list seeded at startup.
// Reads take the shared lock, mutations the exclusive one; nothing here
// outlives the process.

mod display;
mod front;
mod orders;
mod prep;
mod reservations;
mod staff;

pub use display::DisplayAction;
pub use front::{NotesBoard, ProductionBoard};
pub use orders::OrdersBoard;
pub use prep::PrepBoard;
pub use reservations::ReservationDay;
pub use staff::StaffBoard;

use crate::domain::display::{HousekeepingNote, OrderModification, WhiteboardNote};
use crate::domain::inventory::InventoryItem;
use crate::domain::notes::{Drawing, Note};
use crate::domain::orders::{OrderItem, Supplier};
use crate::domain::prep::PrepItem;
use crate::domain::production::ProductionRow;
use crate::domain::reservation::Reservation;
use crate::domain::sample;
use crate::domain::staff::{Employee, EmployeeTask};
use crate::port::TimeProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Board contents for one running daemon
#[derive(Debug, Clone)]
pub(crate) struct KitchenState {
    pub inventory: Vec<InventoryItem>,
    pub production: Vec<ProductionRow>,
    pub notes: Vec<Note>,
    pub drawing: Option<Drawing>,
    pub reservations: Vec<Reservation>,
    pub employees: Vec<Employee>,
    pub staff_tasks: Vec<EmployeeTask>,
    pub prep: Vec<PrepItem>,
    pub suppliers: Vec<Supplier>,
    pub orders: Vec<OrderItem>,
    pub modifications: Vec<OrderModification>,
    pub housekeeping: Vec<HousekeepingNote>,
    pub whiteboard: Vec<WhiteboardNote>,
}

impl KitchenState {
    fn seeded(clock: &dyn TimeProvider) -> Self {
        let now = clock.now();
        let today = clock.today();
        Self {
            inventory: sample::inventory(now),
            production: sample::production(),
            notes: Vec::new(),
            drawing: None,
            reservations: sample::reservations(today),
            employees: sample::employees(),
            staff_tasks: sample::employee_tasks(today),
            prep: sample::prep_items(today),
            suppliers: sample::suppliers(),
            orders: sample::order_items(today),
            modifications: sample::modifications(now),
            housekeeping: sample::housekeeping(now),
            whiteboard: sample::whiteboard_notes(now),
        }
    }
}

/// Item counts per board (admin stats)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCounts {
    pub inventory_items: usize,
    pub production_rows: usize,
    pub notes: usize,
    pub reservations: usize,
    pub staff_tasks: usize,
    pub prep_items: usize,
    pub order_items: usize,
    pub pending_modifications: usize,
}

/// Kitchen boards service
///
/// ```
/// use std::sync::Arc;
/// use kitchen_core::application::KitchenService;
/// use kitchen_core::port::SystemTimeProvider;
///
/// # tokio_test::block_on(async {
/// let kitchen = KitchenService::new(Arc::new(SystemTimeProvider));
/// let prep = kitchen.prep_board().await;
/// assert_eq!(prep.overview.total, 10);
/// # });
/// ```
pub struct KitchenService {
    state: RwLock<KitchenState>,
    time_provider: Arc<dyn TimeProvider>,
}

impl KitchenService {
    /// Create the service with the sample boards anchored to the provider's clock
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        let state = KitchenState::seeded(time_provider.as_ref());
        info!(
            reservations = state.reservations.len(),
            prep_items = state.prep.len(),
            order_items = state.orders.len(),
            "Kitchen boards seeded"
        );
        Self {
            state: RwLock::new(state),
            time_provider,
        }
    }

    pub async fn counts(&self) -> BoardCounts {
        let state = self.state.read().await;
        BoardCounts {
            inventory_items: state.inventory.len(),
            production_rows: state.production.len(),
            notes: state.notes.len(),
            reservations: state.reservations.len(),
            staff_tasks: state.staff_tasks.len(),
            prep_items: state.prep.len(),
            order_items: state.orders.len(),
            pending_modifications: state
                .modifications
                .iter()
                .filter(|m| m.status == crate::domain::display::ModificationStatus::Pending)
                .count(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::service;

    #[tokio::test]
    async fn test_seeded_counts() {
        let counts = service().counts().await;
        assert_eq!(counts.inventory_items, 8);
        assert_eq!(counts.production_rows, 3);
        assert_eq!(counts.notes, 0);
        assert_eq!(counts.reservations, 5);
        assert_eq!(counts.staff_tasks, 5);
        assert_eq!(counts.prep_items, 10);
        assert_eq!(counts.order_items, 6);
        assert_eq!(counts.pending_modifications, 4);
    }
}
