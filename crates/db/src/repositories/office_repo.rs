//! Repository for the `offices` table.

use accredo_core::types::DbId;
use sqlx::PgPool;

use crate::models::office::{Office, UpdateOffice};

/// Column list for offices queries.
const COLUMNS: &str = "id, office_name, office_type, description, created_at";

/// Provides CRUD operations for offices.
pub struct OfficeRepo;

impl OfficeRepo {
    /// List all offices ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Office>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM offices ORDER BY office_name ASC");
        sqlx::query_as::<_, Office>(&query).fetch_all(pool).await
    }

    /// Find an office by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Office>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM offices WHERE id = $1");
        sqlx::query_as::<_, Office>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new office, returning the created row.
    pub async fn create(
        pool: &PgPool,
        office_name: &str,
        office_type: Option<&str>,
        description: Option<&str>,
    ) -> Result<Office, sqlx::Error> {
        let query = format!(
            "INSERT INTO offices (office_name, office_type, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Office>(&query)
            .bind(office_name)
            .bind(office_type)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Update an office by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOffice,
    ) -> Result<Option<Office>, sqlx::Error> {
        let query = format!(
            "UPDATE offices SET
                office_name = COALESCE($2, office_name),
                office_type = COALESCE($3, office_type),
                description = COALESCE($4, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Office>(&query)
            .bind(id)
            .bind(&input.office_name)
            .bind(&input.office_type)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an office by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM offices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
