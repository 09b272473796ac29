use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::repair::{Repair, RepairStatus};
use crate::utils::errors::AppError;
use crate::utils::validation::optional_like;

pub struct RepairRepository {
    pool: SqlitePool,
}

impl RepairRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, repair: &Repair) -> Result<Repair, AppError> {
        let result = sqlx::query_as::<_, Repair>(
            r#"
            INSERT INTO repairs (id, mechanic_id, vehicle_id, description, status, start_date, finish_date, created_at, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, NULL)
            RETURNING *
            "#,
        )
        .bind(repair.id)
        .bind(repair.mechanic_id)
        .bind(repair.vehicle_id)
        .bind(&repair.description)
        .bind(repair.status)
        .bind(repair.start_date)
        .bind(repair.finish_date)
        .bind(repair.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Repair>, AppError> {
        let result = sqlx::query_as::<_, Repair>(
            "SELECT * FROM repairs WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Filtros combinables: matrícula, nombre del cliente y estado.
    pub async fn search(
        &self,
        license_plate: Option<&str>,
        client_name: Option<&str>,
        status: Option<RepairStatus>,
        limit: i64,
    ) -> Result<Vec<Repair>, AppError> {
        let plate_pattern = optional_like(license_plate);
        let name_pattern = optional_like(client_name);

        let result = sqlx::query_as::<_, Repair>(
            r#"
            SELECT r.* FROM repairs r
            JOIN vehicles v ON v.id = r.vehicle_id
            JOIN clients c ON c.id = v.client_id
            WHERE r.deleted_at IS NULL
              AND (? IS NULL OR LOWER(v.license_plate) LIKE LOWER(?) ESCAPE '\')
              AND (? IS NULL OR LOWER(c.name) LIKE LOWER(?) ESCAPE '\')
              AND (? IS NULL OR r.status = ?)
            ORDER BY r.start_date ASC
            LIMIT ?
            "#,
        )
        .bind(&plate_pattern)
        .bind(&plate_pattern)
        .bind(&name_pattern)
        .bind(&name_pattern)
        .bind(status)
        .bind(status)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Repair>, AppError> {
        let result = sqlx::query_as::<_, Repair>(
            r#"
            SELECT * FROM repairs
            WHERE vehicle_id = ? AND deleted_at IS NULL
            ORDER BY start_date DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_mechanic(&self, mechanic_id: Uuid) -> Result<Vec<Repair>, AppError> {
        let result = sqlx::query_as::<_, Repair>(
            r#"
            SELECT * FROM repairs
            WHERE mechanic_id = ? AND deleted_at IS NULL
            ORDER BY start_date DESC
            "#,
        )
        .bind(mechanic_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn update(&self, repair: &Repair) -> Result<Option<Repair>, AppError> {
        let result = sqlx::query_as::<_, Repair>(
            r#"
            UPDATE repairs
            SET description = ?, status = ?, start_date = ?, finish_date = ?
            WHERE id = ? AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(&repair.description)
        .bind(repair.status)
        .bind(repair.start_date)
        .bind(repair.finish_date)
        .bind(repair.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE repairs SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
