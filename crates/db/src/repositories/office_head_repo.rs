//! Repository for the `office_heads` table.

use accredo_core::types::DbId;
use sqlx::PgPool;

use crate::models::office_head::{OfficeHead, UpdateOfficeHead};

/// Column list for office_heads queries.
const COLUMNS: &str = "id, office_id, head_name, email, position, created_at";

/// Provides CRUD operations for office heads.
pub struct OfficeHeadRepo;

impl OfficeHeadRepo {
    /// List all office heads ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<OfficeHead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM office_heads ORDER BY head_name ASC");
        sqlx::query_as::<_, OfficeHead>(&query).fetch_all(pool).await
    }

    /// Find an office head by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OfficeHead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM office_heads WHERE id = $1");
        sqlx::query_as::<_, OfficeHead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new office head, returning the created row. A duplicate
    /// email violates `uq_office_heads_email` and surfaces as a conflict.
    pub async fn create(
        pool: &PgPool,
        office_id: DbId,
        head_name: &str,
        email: &str,
        position: Option<&str>,
    ) -> Result<OfficeHead, sqlx::Error> {
        let query = format!(
            "INSERT INTO office_heads (office_id, head_name, email, position)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OfficeHead>(&query)
            .bind(office_id)
            .bind(head_name)
            .bind(email)
            .bind(position)
            .fetch_one(pool)
            .await
    }

    /// Update an office head by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOfficeHead,
    ) -> Result<Option<OfficeHead>, sqlx::Error> {
        let query = format!(
            "UPDATE office_heads SET
                office_id = COALESCE($2, office_id),
                head_name = COALESCE($3, head_name),
                email = COALESCE($4, email),
                position = COALESCE($5, position)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OfficeHead>(&query)
            .bind(id)
            .bind(input.office_id)
            .bind(&input.head_name)
            .bind(&input.email)
            .bind(&input.position)
            .fetch_optional(pool)
            .await
    }

    /// Delete office heads by ID list, returning the number of rows removed.
    pub async fn delete_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM office_heads WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
