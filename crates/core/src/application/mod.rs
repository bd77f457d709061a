// Application Layer - Use Cases and Business Logic

pub mod kitchen;
pub mod records;

// Re-exports
pub use kitchen::{
    BoardCounts, DisplayAction, KitchenService, NotesBoard, OrdersBoard, PrepBoard,
    ProductionBoard, ReservationDay, StaffBoard,
};
pub use records::{EventService, TaskService};
