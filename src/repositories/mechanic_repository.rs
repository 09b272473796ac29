use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::mechanic::Mechanic;
use crate::utils::errors::{conflict_error, map_unique_violation, AppError};
use crate::utils::validation::optional_like;

pub struct MechanicRepository {
    pool: SqlitePool,
}

impl MechanicRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, mechanic: &Mechanic) -> Result<Mechanic, AppError> {
        let result = sqlx::query_as::<_, Mechanic>(
            r#"
            INSERT INTO mechanics (id, name, email, password_hash, phone, created_at, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?, NULL)
            RETURNING *
            "#,
        )
        .bind(mechanic.id)
        .bind(&mechanic.name)
        .bind(&mechanic.email)
        .bind(&mechanic.password_hash)
        .bind(&mechanic.phone)
        .bind(mechanic.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || conflict_error("Mechanic", "email", &mechanic.email))
        })?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Mechanic>, AppError> {
        let result = sqlx::query_as::<_, Mechanic>(
            "SELECT * FROM mechanics WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Mechanic>, AppError> {
        let result = sqlx::query_as::<_, Mechanic>(
            "SELECT * FROM mechanics WHERE email = ? AND deleted_at IS NULL",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// ¿Hay otro mecánico activo con ese email? (`exclude_id` ignora al propio)
    pub async fn email_exists(&self, email: &str, exclude_id: Option<Uuid>) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM mechanics
                WHERE email = ? AND deleted_at IS NULL AND (? IS NULL OR id != ?)
            )
            "#,
        )
        .bind(email)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn search(&self, name: Option<&str>, limit: i64) -> Result<Vec<Mechanic>, AppError> {
        let pattern = optional_like(name);

        let result = sqlx::query_as::<_, Mechanic>(
            r#"
            SELECT * FROM mechanics
            WHERE deleted_at IS NULL
              AND (? IS NULL OR LOWER(name) LIKE LOWER(?) ESCAPE '\')
            ORDER BY name COLLATE NOCASE
            LIMIT ?
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn update(&self, mechanic: &Mechanic) -> Result<Option<Mechanic>, AppError> {
        let result = sqlx::query_as::<_, Mechanic>(
            r#"
            UPDATE mechanics
            SET name = ?, email = ?, phone = ?
            WHERE id = ? AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(&mechanic.name)
        .bind(&mechanic.email)
        .bind(&mechanic.phone)
        .bind(mechanic.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || conflict_error("Mechanic", "email", &mechanic.email))
        })?;

        Ok(result)
    }

    /// Marca el mecánico como borrado; `false` si no existía o ya estaba borrado
    pub async fn soft_delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE mechanics SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
