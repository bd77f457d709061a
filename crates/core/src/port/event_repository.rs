// Event Repository Port (Interface)

use crate::domain::{Event, EventId, NewEvent};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for Event persistence
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events, earliest start first
    async fn list(&self) -> Result<Vec<Event>>;

    /// Events starting in `[from, to)`, earliest first
    async fn list_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Event>>;

    /// Find event by ID
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>>;

    /// Insert a validated event
    async fn insert(&self, event: &NewEvent) -> Result<Event>;

    /// Replace writable fields; `None` when the event does not exist
    async fn update(&self, id: EventId, event: &NewEvent) -> Result<Option<Event>>;

    /// Delete by ID; returns whether a row was removed
    async fn delete(&self, id: EventId) -> Result<bool>;

    /// Row count (admin stats)
    async fn count(&self) -> Result<i64>;
}

#[cfg(test)]
pub(crate) mod mocks {
    use super::*;
    use tokio::sync::Mutex;

    /// In-memory event store
    #[derive(Default)]
    pub struct InMemoryEventRepository {
        rows: Mutex<Vec<Event>>,
    }

    fn sorted(mut rows: Vec<Event>) -> Vec<Event> {
        rows.sort_by(|a, b| a.start.cmp(&b.start).then(a.id.cmp(&b.id)));
        rows
    }

    fn build(id: EventId, event: &NewEvent) -> Event {
        Event {
            id,
            name: event.name.clone(),
            start: event.start,
            end: event.end,
            location: event.location.clone(),
            notes: event.notes.clone(),
        }
    }

    #[async_trait]
    impl EventRepository for InMemoryEventRepository {
        async fn list(&self) -> Result<Vec<Event>> {
            Ok(sorted(self.rows.lock().await.clone()))
        }

        async fn list_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Event>> {
            let rows = self.rows.lock().await;
            Ok(sorted(
                rows.iter()
                    .filter(|e| e.start >= from && e.start < to)
                    .cloned()
                    .collect(),
            ))
        }

        async fn find_by_id(&self, id: EventId) -> Result<Option<Event>> {
            Ok(self.rows.lock().await.iter().find(|e| e.id == id).cloned())
        }

        async fn insert(&self, event: &NewEvent) -> Result<Event> {
            let mut rows = self.rows.lock().await;
            let id = rows.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            let stored = build(id, event);
            rows.push(stored.clone());
            Ok(stored)
        }

        async fn update(&self, id: EventId, event: &NewEvent) -> Result<Option<Event>> {
            let mut rows = self.rows.lock().await;
            Ok(rows.iter_mut().find(|e| e.id == id).map(|stored| {
                *stored = build(id, event);
                stored.clone()
            }))
        }

        async fn delete(&self, id: EventId) -> Result<bool> {
            let mut rows = self.rows.lock().await;
            let before = rows.len();
            rows.retain(|e| e.id != id);
            Ok(rows.len() != before)
        }

        async fn count(&self) -> Result<i64> {
            Ok(self.rows.lock().await.len() as i64)
        }
    }
}
