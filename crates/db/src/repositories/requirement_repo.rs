//! Repository for the `requirements` table.
//!
//! Requirement rows always come back with the parent's code joined in
//! (`LEFT JOIN requirements p`), since `ParentRequirementCode` is part of
//! the wire contract while the storage link is the `parent_requirement_id`
//! foreign key.

use accredo_core::types::DbId;
use sqlx::PgPool;

use crate::models::requirement::{Requirement, RequirementWithContext};

/// Column list for joined requirement queries (`r` = row, `p` = parent).
const COLUMNS: &str = "r.id, r.requirement_code, r.description, r.criteria_id, \
    r.parent_requirement_id, p.requirement_code AS parent_requirement_code, r.created_at";

/// Column list for the full hierarchy join (criteria, area, event context).
const CONTEXT_COLUMNS: &str = "r.id, r.requirement_code, r.description, r.criteria_id, \
    r.parent_requirement_id, p.requirement_code AS parent_requirement_code, \
    c.criteria_code, c.criteria_name, \
    a.id AS area_id, a.area_code, a.area_name, \
    e.id AS event_id, e.event_code, e.event_name";

/// Provides CRUD operations and tree lookups for requirements.
pub struct RequirementRepo;

impl RequirementRepo {
    /// Find a requirement by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Requirement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM requirements r
             LEFT JOIN requirements p ON p.id = r.parent_requirement_id
             WHERE r.id = $1"
        );
        sqlx::query_as::<_, Requirement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a requirement by code within a criteria.
    pub async fn find_by_code(
        pool: &PgPool,
        criteria_id: DbId,
        requirement_code: &str,
    ) -> Result<Option<Requirement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM requirements r
             LEFT JOIN requirements p ON p.id = r.parent_requirement_id
             WHERE r.criteria_id = $1 AND r.requirement_code = $2"
        );
        sqlx::query_as::<_, Requirement>(&query)
            .bind(criteria_id)
            .bind(requirement_code)
            .fetch_optional(pool)
            .await
    }

    /// List all requirements under a criteria, ordered by code.
    pub async fn list_by_criteria(
        pool: &PgPool,
        criteria_id: DbId,
    ) -> Result<Vec<Requirement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM requirements r
             LEFT JOIN requirements p ON p.id = r.parent_requirement_id
             WHERE r.criteria_id = $1
             ORDER BY r.requirement_code ASC"
        );
        sqlx::query_as::<_, Requirement>(&query)
            .bind(criteria_id)
            .fetch_all(pool)
            .await
    }

    /// List the codes of a parent's direct children, lexicographically
    /// descending. Code derivation scans these for the numeric maximum.
    pub async fn list_codes_by_parent(
        pool: &PgPool,
        parent_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT requirement_code FROM requirements
             WHERE parent_requirement_id = $1
             ORDER BY requirement_code DESC",
        )
        .bind(parent_id)
        .fetch_all(pool)
        .await
    }

    /// List an event's requirements joined up the hierarchy
    /// (criteria, optional area, event), in display order.
    pub async fn list_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<RequirementWithContext>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTEXT_COLUMNS} FROM requirements r
             JOIN criteria c ON c.id = r.criteria_id
             JOIN events e ON e.id = c.event_id
             LEFT JOIN requirements p ON p.id = r.parent_requirement_id
             LEFT JOIN areas a ON a.id = c.area_id
             WHERE e.id = $1
             ORDER BY a.sort_order ASC NULLS LAST, c.criteria_code ASC, r.requirement_code ASC"
        );
        sqlx::query_as::<_, RequirementWithContext>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// List every requirement with hierarchy context, optionally filtered
    /// by event.
    pub async fn list_all(
        pool: &PgPool,
        event_id: Option<DbId>,
    ) -> Result<Vec<RequirementWithContext>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTEXT_COLUMNS} FROM requirements r
             JOIN criteria c ON c.id = r.criteria_id
             JOIN events e ON e.id = c.event_id
             LEFT JOIN requirements p ON p.id = r.parent_requirement_id
             LEFT JOIN areas a ON a.id = c.area_id
             WHERE $1::BIGINT IS NULL OR e.id = $1
             ORDER BY a.sort_order ASC NULLS LAST, c.criteria_code ASC, r.requirement_code ASC"
        );
        sqlx::query_as::<_, RequirementWithContext>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new requirement, returning the created row with its parent
    /// code joined in.
    pub async fn create(
        pool: &PgPool,
        criteria_id: DbId,
        requirement_code: &str,
        description: &str,
        parent_requirement_id: Option<DbId>,
    ) -> Result<Requirement, sqlx::Error> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO requirements
                (criteria_id, requirement_code, description, parent_requirement_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(criteria_id)
        .bind(requirement_code)
        .bind(description)
        .bind(parent_requirement_id)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Replace a requirement's fields by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        criteria_id: DbId,
        requirement_code: &str,
        description: &str,
        parent_requirement_id: Option<DbId>,
    ) -> Result<Option<Requirement>, sqlx::Error> {
        let updated = sqlx::query_scalar::<_, DbId>(
            "UPDATE requirements SET
                criteria_id = $2,
                requirement_code = $3,
                description = $4,
                parent_requirement_id = $5
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(criteria_id)
        .bind(requirement_code)
        .bind(description)
        .bind(parent_requirement_id)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(id) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Delete requirements by ID list, returning the number of rows
    /// removed. Child subtrees go with them via the FK cascade.
    pub async fn delete_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM requirements WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Walk the ancestor chain upward from `start_id`, reporting whether
    /// `node_id` appears.
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
                "SELECT parent_requirement_id FROM requirements WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(pool)
            .await?
            .flatten();
        }
        Ok(false)
    }
}
