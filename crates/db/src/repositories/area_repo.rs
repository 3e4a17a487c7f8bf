//! Repository for the `areas` table.
//!
//! Areas are soft-deleted: `deactivate` clears `is_active` and every list
//! operation filters on it.

use accredo_core::types::DbId;
use sqlx::PgPool;

use crate::models::area::Area;

/// Column list for areas queries.
const COLUMNS: &str =
    "id, event_id, area_code, area_name, description, sort_order, is_active, created_at";

/// Provides CRUD operations for areas.
pub struct AreaRepo;

impl AreaRepo {
    /// List all active areas, ordered for display.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Area>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM areas
             WHERE is_active = TRUE
             ORDER BY sort_order ASC, area_code ASC"
        );
        sqlx::query_as::<_, Area>(&query).fetch_all(pool).await
    }

    /// List active areas belonging to an event, ordered for display.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Area>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM areas
             WHERE event_id = $1 AND is_active = TRUE
             ORDER BY sort_order ASC, area_code ASC"
        );
        sqlx::query_as::<_, Area>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Find an area by its ID regardless of active state.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Area>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM areas WHERE id = $1");
        sqlx::query_as::<_, Area>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new area, returning the created row.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        area_code: &str,
        area_name: &str,
        description: Option<&str>,
        sort_order: Option<i32>,
    ) -> Result<Area, sqlx::Error> {
        let query = format!(
            "INSERT INTO areas (event_id, area_code, area_name, description, sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Area>(&query)
            .bind(event_id)
            .bind(area_code)
            .bind(area_name)
            .bind(description)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// Soft-delete an area. Returns `true` if an active row was deactivated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE areas SET is_active = FALSE WHERE id = $1 AND is_active = TRUE")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
