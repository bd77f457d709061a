// Records Service - CRUD use cases for persisted tasks and events

use crate::domain::{DomainError, Event, EventId, EventPatch, NewEvent, NewTask, Task, TaskId, TaskPatch};
use crate::error::{AppError, Result};
use crate::port::{EventRepository, TaskRepository, TimeProvider};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Task CRUD (list / retrieve / create / update / partial update / delete)
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
    time_provider: Arc<dyn TimeProvider>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            repo,
            time_provider,
        }
    }

    pub async fn list(&self) -> Result<Vec<Task>> {
        self.repo.list().await
    }

    pub async fn get(&self, id: TaskId) -> Result<Task> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| task_not_found(id))
    }

    pub async fn create(&self, req: NewTask) -> Result<Task> {
        let task = req.validated()?;
        let created = self.repo.insert(&task, self.time_provider.now()).await?;
        info!(task_id = created.id, "Task created");
        Ok(created)
    }

    /// Full replacement of the writable fields
    pub async fn update(&self, id: TaskId, req: NewTask) -> Result<Task> {
        let task = req.validated()?;
        let updated = self
            .repo
            .update(id, &task)
            .await?
            .ok_or_else(|| task_not_found(id))?;
        debug!(task_id = id, completed = updated.completed, "Task updated");
        Ok(updated)
    }

    pub async fn patch(&self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        let current = self.get(id).await?;
        let merged = patch.apply(&current)?;
        self.repo
            .update(id, &merged)
            .await?
            .ok_or_else(|| task_not_found(id))
    }

    pub async fn delete(&self, id: TaskId) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(task_not_found(id));
        }
        info!(task_id = id, "Task deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        self.repo.count().await
    }
}

fn task_not_found(id: TaskId) -> AppError {
    DomainError::not_found("Task", id).into()
}

/// Event CRUD plus the "today" view
pub struct EventService {
    repo: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        self.repo.list().await
    }

    /// Events starting on `date` (UTC day), earliest first
    pub async fn on_date(&self, date: NaiveDate) -> Result<Vec<Event>> {
        let from = date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .ok_or_else(|| AppError::Validation(format!("invalid date {}", date)))?;
        self.repo.list_between(from, from + Duration::days(1)).await
    }

    pub async fn get(&self, id: EventId) -> Result<Event> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| event_not_found(id))
    }

    pub async fn create(&self, req: NewEvent) -> Result<Event> {
        let event = req.validated()?;
        let created = self.repo.insert(&event).await?;
        info!(event_id = created.id, name = %created.name, "Event created");
        Ok(created)
    }

    pub async fn update(&self, id: EventId, req: NewEvent) -> Result<Event> {
        let event = req.validated()?;
        self.repo
            .update(id, &event)
            .await?
            .ok_or_else(|| event_not_found(id))
    }

    pub async fn patch(&self, id: EventId, patch: EventPatch) -> Result<Event> {
        let current = self.get(id).await?;
        let merged = patch.apply(&current)?;
        self.repo
            .update(id, &merged)
            .await?
            .ok_or_else(|| event_not_found(id))
    }

    pub async fn delete(&self, id: EventId) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(event_not_found(id));
        }
        info!(event_id = id, "Event deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        self.repo.count().await
    }
}

fn event_not_found(id: EventId) -> AppError {
    DomainError::not_found("Event", id).into()
}
