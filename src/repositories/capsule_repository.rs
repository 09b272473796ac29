use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::capsule::Capsule;
use crate::utils::errors::AppError;

pub struct CapsuleRepository {
    pool: SqlitePool,
}

impl CapsuleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, capsule: &Capsule) -> Result<Capsule, AppError> {
        let result = sqlx::query_as::<_, Capsule>(
            r#"
            INSERT INTO capsules (id, sender_id, email, content, created_at, unlock_date)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(capsule.id)
        .bind(capsule.sender_id)
        .bind(&capsule.email)
        .bind(&capsule.content)
        .bind(capsule.created_at)
        .bind(capsule.unlock_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Capsule>, AppError> {
        let result = sqlx::query_as::<_, Capsule>("SELECT * FROM capsules WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }
}
