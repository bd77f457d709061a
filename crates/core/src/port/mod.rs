// Port Layer - Interfaces for external dependencies

pub mod event_repository;
pub mod task_repository;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use event_repository::EventRepository;
pub use task_repository::TaskRepository;
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
