//! Repository for the `criteria` table.

use accredo_core::types::DbId;
use sqlx::PgPool;

use crate::models::criteria::{Criteria, CriteriaWithEvent};

/// Column list for criteria queries.
const COLUMNS: &str = "id, event_id, area_id, parent_criteria_id, criteria_code, \
    criteria_name, description, is_active, created_at";

/// Provides CRUD operations and tree lookups for criteria.
pub struct CriteriaRepo;

impl CriteriaRepo {
    /// List all criteria of an event joined with the event's name and code,
    /// ordered by criteria code.
    pub async fn list_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<CriteriaWithEvent>, sqlx::Error> {
        sqlx::query_as::<_, CriteriaWithEvent>(
            "SELECT c.id, c.event_id, c.area_id, c.parent_criteria_id, c.criteria_code,
                    c.criteria_name, c.description, c.is_active, c.created_at,
                    e.event_name, e.event_code
             FROM criteria c
             JOIN events e ON e.id = c.event_id
             WHERE c.event_id = $1
             ORDER BY c.criteria_code ASC",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }

    /// List active criteria assigned to an area.
    pub async fn list_by_area(pool: &PgPool, area_id: DbId) -> Result<Vec<Criteria>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM criteria
             WHERE area_id = $1 AND is_active = TRUE
             ORDER BY criteria_code ASC"
        );
        sqlx::query_as::<_, Criteria>(&query)
            .bind(area_id)
            .fetch_all(pool)
            .await
    }

    /// Find a criteria by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Criteria>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM criteria WHERE id = $1");
        sqlx::query_as::<_, Criteria>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new criteria, returning the created row.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        area_id: Option<DbId>,
        parent_criteria_id: Option<DbId>,
        criteria_code: &str,
        criteria_name: &str,
        description: &str,
    ) -> Result<Criteria, sqlx::Error> {
        let query = format!(
            "INSERT INTO criteria
                (event_id, area_id, parent_criteria_id, criteria_code, criteria_name, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Criteria>(&query)
            .bind(event_id)
            .bind(area_id)
            .bind(parent_criteria_id)
            .bind(criteria_code)
            .bind(criteria_name)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Replace a criteria's fields by ID, returning the updated row.
    ///
    /// The legacy update endpoint resubmits the full field set, so this is
    /// a full replace rather than a COALESCE patch.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        event_id: DbId,
        area_id: Option<DbId>,
        parent_criteria_id: Option<DbId>,
        criteria_code: &str,
        criteria_name: &str,
        description: &str,
    ) -> Result<Option<Criteria>, sqlx::Error> {
        let query = format!(
            "UPDATE criteria SET
                event_id = $2,
                area_id = $3,
                parent_criteria_id = $4,
                criteria_code = $5,
                criteria_name = $6,
                description = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Criteria>(&query)
            .bind(id)
            .bind(event_id)
            .bind(area_id)
            .bind(parent_criteria_id)
            .bind(criteria_code)
            .bind(criteria_name)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete criteria by ID list, returning the number of rows removed.
    /// Subtrees and owned requirements go with them via FK cascades.
    pub async fn delete_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM criteria WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Walk the ancestor chain upward from `start_id`, reporting whether
    /// `node_id` appears. Used to reject parent assignments that would make
    /// a criteria its own ancestor.
    pub async fn is_ancestor(
        pool: &PgPool,
        node_id: DbId,
        start_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut current = Some(start_id);
        while let Some(id) = current {
            if id == node_id {
                return Ok(true);
            }
            current = sqlx::query_scalar::<_, Option<DbId>>(
                "SELECT parent_criteria_id FROM criteria WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(pool)
            .await?
            .flatten();
        }
        Ok(false)
    }
}
