// Kitchen Infrastructure - SQLite Adapter
// Implements: TaskRepository, EventRepository

mod connection;
mod error;
mod event_repository;
mod migration;
mod task_repository;

pub use connection::create_pool;
pub use event_repository::SqliteEventRepository;
pub use migration::run_migrations;
pub use task_repository::SqliteTaskRepository;

// sqlx::Error cannot convert into AppError via From here (orphan rule),
// so every query maps through error::map_sqlx_error
