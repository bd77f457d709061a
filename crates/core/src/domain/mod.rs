// Domain Layer - Records, boards and their pure business rules

pub mod display;
pub mod error;
pub mod event;
pub mod inventory;
pub mod labels;
pub mod notes;
pub mod orders;
pub mod prep;
pub mod priority;
pub mod production;
pub mod reservation;
pub mod sample;
pub mod sequence;
pub mod staff;
pub mod task;
pub mod validation;

// Re-exports
pub use error::DomainError;
pub use event::{Event, EventId, EventPatch, NewEvent};
pub use priority::Priority;
pub use task::{NewTask, Task, TaskId, TaskPatch};
