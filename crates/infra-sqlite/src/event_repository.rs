// SQLite EventRepository Implementation

use crate::error::{from_millis, map_sqlx_error};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kitchen_core::domain::{Event, EventId, NewEvent};
use kitchen_core::error::Result;
use kitchen_core::port::EventRepository;
use sqlx::SqlitePool;
use tracing::debug;

const SELECT_EVENT: &str = "SELECT id, name, start_at, end_at, location, notes FROM events";

pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn list(&self) -> Result<Vec<Event>> {
        let rows: Vec<EventRow> =
            sqlx::query_as(&format!("{} ORDER BY start_at ASC, id ASC", SELECT_EVENT))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        rows.into_iter().map(EventRow::into_event).collect()
    }

    async fn list_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(&format!(
            "{} WHERE start_at >= ? AND start_at < ? ORDER BY start_at ASC, id ASC",
            SELECT_EVENT
        ))
        .bind(from.timestamp_millis())
        .bind(to.timestamp_millis())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(EventRow::into_event).collect()
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>> {
        let row: Option<EventRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_EVENT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(EventRow::into_event).transpose()
    }

    async fn insert(&self, event: &NewEvent) -> Result<Event> {
        let row: EventRow = sqlx::query_as(
            r#"
            INSERT INTO events (name, start_at, end_at, location, notes)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, start_at, end_at, location, notes
            "#,
        )
        .bind(&event.name)
        .bind(event.start.timestamp_millis())
        .bind(event.end.timestamp_millis())
        .bind(&event.location)
        .bind(&event.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(event_id = row.id, "Event row inserted");
        row.into_event()
    }

    async fn update(&self, id: EventId, event: &NewEvent) -> Result<Option<Event>> {
        let row: Option<EventRow> = sqlx::query_as(
            r#"
            UPDATE events SET name = ?, start_at = ?, end_at = ?, location = ?, notes = ?
            WHERE id = ?
            RETURNING id, name, start_at, end_at, location, notes
            "#,
        )
        .bind(&event.name)
        .bind(event.start.timestamp_millis())
        .bind(event.end.timestamp_millis())
        .bind(&event.location)
        .bind(&event.notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(EventRow::into_event).transpose()
    }

    async fn delete(&self, id: EventId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: i64,
    name: String,
    start_at: i64,
    end_at: i64,
    location: String,
    notes: Option<String>,
}

impl EventRow {
    fn into_event(self) -> Result<Event> {
        Ok(Event {
            id: self.id,
            name: self.name,
            start: from_millis(self.start_at)?,
            end: from_millis(self.end_at)?,
            location: self.location,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use chrono::{Duration, TimeZone};

    async fn setup_test_db() -> SqliteEventRepository {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteEventRepository::new(pool)
    }

    fn new_event(name: &str, start: DateTime<Utc>) -> NewEvent {
        NewEvent {
            name: name.to_string(),
            start,
            end: start + Duration::hours(3),
            location: "Patio".to_string(),
            notes: Some("40 covers".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_roundtrips_fields() {
        let repo = setup_test_db().await;
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap();
        let event = repo.insert(&new_event("Wine dinner", start)).await.unwrap();

        let found = repo.find_by_id(event.id).await.unwrap().unwrap();
        assert_eq!(found.start, start);
        assert_eq!(found.end, start + Duration::hours(3));
        assert_eq!(found.notes.as_deref(), Some("40 covers"));
    }

    #[tokio::test]
    async fn test_list_between_is_half_open() {
        let repo = setup_test_db().await;
        let midnight = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        repo.insert(&new_event("Breakfast", midnight)).await.unwrap();
        repo.insert(&new_event("Next day", midnight + Duration::days(1)))
            .await
            .unwrap();

        let day = repo
            .list_between(midnight, midnight + Duration::days(1))
            .await
            .unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].name, "Breakfast");
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_clears_notes() {
        let repo = setup_test_db().await;
        let start = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap();
        let event = repo.insert(&new_event("Lunch", start)).await.unwrap();

        let mut changed = new_event("Lunch", start);
        changed.notes = None;
        let updated = repo.update(event.id, &changed).await.unwrap().unwrap();
        assert_eq!(updated.notes, None);

        assert!(repo.delete(event.id).await.unwrap());
        assert!(repo.update(event.id, &changed).await.unwrap().is_none());
    }
}
