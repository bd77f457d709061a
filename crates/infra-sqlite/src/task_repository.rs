// SQLite TaskRepository Implementation

use crate::error::{from_millis, map_sqlx_error};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kitchen_core::domain::{NewTask, Task, TaskId};
use kitchen_core::error::Result;
use kitchen_core::port::TaskRepository;
use sqlx::SqlitePool;
use tracing::debug;

const SELECT_TASK: &str = "SELECT id, title, completed, created_at FROM tasks";

pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list(&self) -> Result<Vec<Task>> {
        let rows: Vec<TaskRow> =
            sqlx::query_as(&format!("{} ORDER BY created_at DESC, id DESC", SELECT_TASK))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        rows.into_iter().map(TaskRow::into_task).collect()
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        let row: Option<TaskRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_TASK))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(TaskRow::into_task).transpose()
    }

    async fn insert(&self, task: &NewTask, created_at: DateTime<Utc>) -> Result<Task> {
        let row: TaskRow = sqlx::query_as(
            r#"
            INSERT INTO tasks (title, completed, created_at)
            VALUES (?, ?, ?)
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(&task.title)
        .bind(task.completed)
        .bind(created_at.timestamp_millis())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(task_id = row.id, "Task row inserted");
        row.into_task()
    }

    async fn update(&self, id: TaskId, task: &NewTask) -> Result<Option<Task>> {
        let row: Option<TaskRow> = sqlx::query_as(
            r#"
            UPDATE tasks SET title = ?, completed = ?
            WHERE id = ?
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(&task.title)
        .bind(task.completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(TaskRow::into_task).transpose()
    }

    async fn delete(&self, id: TaskId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: i64,
    title: String,
    completed: bool,
    created_at: i64,
}

impl TaskRow {
    fn into_task(self) -> Result<Task> {
        Ok(Task {
            id: self.id,
            title: self.title,
            completed: self.completed,
            created_at: from_millis(self.created_at)?,
        })
    }
}
