use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::client::Client;
use crate::utils::errors::AppError;
use crate::utils::validation::optional_like;

pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, client: &Client) -> Result<Client, AppError> {
        let result = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (id, name, phone, email, created_at, deleted_at)
            VALUES (?, ?, ?, ?, ?, NULL)
            RETURNING *
            "#,
        )
        .bind(client.id)
        .bind(&client.name)
        .bind(&client.phone)
        .bind(&client.email)
        .bind(client.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let result = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE id = ? AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Búsqueda por nombre; sin término lista todos (acotado por `limit`)
    pub async fn search(&self, name: Option<&str>, limit: i64) -> Result<Vec<Client>, AppError> {
        let pattern = optional_like(name);

        let result = sqlx::query_as::<_, Client>(
            r#"
            SELECT * FROM clients
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

    pub async fn update(&self, client: &Client) -> Result<Option<Client>, AppError> {
        let result = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = ?, phone = ?, email = ?
            WHERE id = ? AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(&client.name)
        .bind(&client.phone)
        .bind(&client.email)
        .bind(client.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE clients SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
