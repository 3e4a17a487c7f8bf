//! Transactional creation of a whole compliance framework.
//!
//! This is the one multi-statement write in the system: the setup wizard's
//! Event -> Area -> Criteria -> Requirement chain runs in a single
//! transaction, so a failure at any step leaves no partial framework
//! behind.

use accredo_core::types::DbId;
use sqlx::PgPool;

use crate::models::setup::{FrameworkCreated, ResolvedFramework};

pub struct SetupRepo;

impl SetupRepo {
    /// Persist a resolved framework plan atomically, returning the IDs
    /// assigned at each level.
    pub async fn create_framework(
        pool: &PgPool,
        plan: &ResolvedFramework,
    ) -> Result<FrameworkCreated, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let event_id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO events (event_code, event_name, description)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&plan.event_code)
        .bind(&plan.event_name)
        .bind(&plan.description)
        .fetch_one(&mut *tx)
        .await?;

        let mut area_ids = Vec::with_capacity(plan.areas.len());
        let mut criteria_ids = Vec::new();
        let mut requirement_ids = Vec::new();

        for area in &plan.areas {
            let area_id = sqlx::query_scalar::<_, DbId>(
                "INSERT INTO areas (event_id, area_code, area_name, description, sort_order)
                 VALUES ($1, $2, $3, $4, COALESCE($5, 1))
                 RETURNING id",
            )
            .bind(event_id)
            .bind(&area.area_code)
            .bind(&area.area_name)
            .bind(&area.description)
            .bind(area.sort_order)
            .fetch_one(&mut *tx)
            .await?;
            area_ids.push(area_id);

            for criteria in &area.criteria {
                let criteria_id = sqlx::query_scalar::<_, DbId>(
                    "INSERT INTO criteria
                        (event_id, area_id, criteria_code, criteria_name, description)
                     VALUES ($1, $2, $3, $4, $5)
                     RETURNING id",
                )
                .bind(event_id)
                .bind(area_id)
                .bind(&criteria.criteria_code)
                .bind(&criteria.criteria_name)
                .bind(&criteria.description)
                .fetch_one(&mut *tx)
                .await?;
                criteria_ids.push(criteria_id);

                for requirement in &criteria.requirements {
                    let requirement_id = sqlx::query_scalar::<_, DbId>(
                        "INSERT INTO requirements (criteria_id, requirement_code, description)
                         VALUES ($1, $2, $3)
                         RETURNING id",
                    )
                    .bind(criteria_id)
                    .bind(&requirement.requirement_code)
                    .bind(&requirement.description)
                    .fetch_one(&mut *tx)
                    .await?;
                    requirement_ids.push(requirement_id);
                }
            }
        }

        tx.commit().await?;

        Ok(FrameworkCreated {
            event_id,
            area_ids,
            criteria_ids,
            requirement_ids,
        })
    }
}
