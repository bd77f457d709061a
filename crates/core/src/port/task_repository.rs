// Task Repository Port (Interface)

use crate::domain::{NewTask, Task, TaskId};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for Task persistence
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks, newest first
    async fn list(&self) -> Result<Vec<Task>>;

    /// Find task by ID
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>>;

    /// Insert a validated task, stamping `created_at`
    async fn insert(&self, task: &NewTask, created_at: DateTime<Utc>) -> Result<Task>;

    /// Replace writable fields; `None` when the task does not exist
    async fn update(&self, id: TaskId, task: &NewTask) -> Result<Option<Task>>;

    /// Delete by ID; returns whether a row was removed
    async fn delete(&self, id: TaskId) -> Result<bool>;

    /// Row count (admin stats)
    async fn count(&self) -> Result<i64>;
}

#[cfg(test)]
pub(crate) mod mocks {
    use super::*;
    use tokio::sync::Mutex;

    /// In-memory task store
    #[derive(Default)]
    pub struct InMemoryTaskRepository {
        rows: Mutex<Vec<Task>>,
    }

    #[async_trait]
    impl TaskRepository for InMemoryTaskRepository {
        async fn list(&self) -> Result<Vec<Task>> {
            let mut rows = self.rows.lock().await.clone();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(rows)
        }

        async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>> {
            Ok(self.rows.lock().await.iter().find(|t| t.id == id).cloned())
        }

        async fn insert(&self, task: &NewTask, created_at: DateTime<Utc>) -> Result<Task> {
            let mut rows = self.rows.lock().await;
            let id = rows.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            let stored = Task {
                id,
                title: task.title.clone(),
                completed: task.completed,
                created_at,
            };
            rows.push(stored.clone());
            Ok(stored)
        }

        async fn update(&self, id: TaskId, task: &NewTask) -> Result<Option<Task>> {
            let mut rows = self.rows.lock().await;
            Ok(rows.iter_mut().find(|t| t.id == id).map(|stored| {
                stored.title = task.title.clone();
                stored.completed = task.completed;
                stored.clone()
            }))
        }

        async fn delete(&self, id: TaskId) -> Result<bool> {
            let mut rows = self.rows.lock().await;
            let before = rows.len();
            rows.retain(|t| t.id != id);
            Ok(rows.len() != before)
        }

        async fn count(&self) -> Result<i64> {
            Ok(self.rows.lock().await.len() as i64)
        }
    }
}
