//! Repository for the `events` table.

use accredo_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{Event, UpdateEvent};

/// Column list for events queries.
const COLUMNS: &str = "id, event_code, event_name, description, created_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// List all events ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY event_code ASC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Find an event by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        event_code: &str,
        event_name: &str,
        description: Option<&str>,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (event_code, event_name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_code)
            .bind(event_name)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Update an event by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                event_code = COALESCE($2, event_code),
                event_name = COALESCE($3, event_name),
                description = COALESCE($4, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.event_code)
            .bind(&input.event_name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete events by ID list, returning the number of rows removed.
    pub async fn delete_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
