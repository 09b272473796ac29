use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::{conflict_error, map_unique_violation, AppError};
use crate::utils::validation::optional_like;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let result = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, client_id, license_plate, brand, model, year, created_at, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, NULL)
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(vehicle.client_id)
        .bind(&vehicle.license_plate)
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                conflict_error("Vehicle", "license_plate", &vehicle.license_plate)
            })
        })?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let result = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = ? AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn license_plate_exists(
        &self,
        license_plate: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM vehicles
                WHERE license_plate = ? AND deleted_at IS NULL AND (? IS NULL OR id != ?)
            )
            "#,
        )
        .bind(license_plate)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Busca por nombre del cliente y/o matrícula, ordenado por cliente.
    /// Quien llama decide qué hacer sin filtros.
    pub async fn search(
        &self,
        client_name: Option<&str>,
        license_plate: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Vehicle>, AppError> {
        let name_pattern = optional_like(client_name);
        let plate_pattern = optional_like(license_plate);

        let result = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT v.* FROM vehicles v
            JOIN clients c ON c.id = v.client_id
            WHERE v.deleted_at IS NULL
              AND c.deleted_at IS NULL
              AND (? IS NULL OR LOWER(c.name) LIKE LOWER(?) ESCAPE '\')
              AND (? IS NULL OR LOWER(v.license_plate) LIKE LOWER(?) ESCAPE '\')
            ORDER BY c.name COLLATE NOCASE, v.license_plate
            LIMIT ?
            "#,
        )
        .bind(&name_pattern)
        .bind(&name_pattern)
        .bind(&plate_pattern)
        .bind(&plate_pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_client(&self, client_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let result = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE client_id = ? AND deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn update(&self, vehicle: &Vehicle) -> Result<Option<Vehicle>, AppError> {
        let result = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET license_plate = ?, brand = ?, model = ?, year = ?
            WHERE id = ? AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(&vehicle.license_plate)
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                conflict_error("Vehicle", "license_plate", &vehicle.license_plate)
            })
        })?;

        Ok(result)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE vehicles SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
