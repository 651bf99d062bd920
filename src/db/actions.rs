use async_trait::async_trait;
use sqlx::PgPool;

use super::Repository;
use crate::models::Action;

#[derive(Clone)]
pub struct ActionRepository {
    pool: PgPool,
}

impl ActionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Action> for ActionRepository {
    async fn save(&self, action: &Action) -> Result<Action, sqlx::Error> {
        sqlx::query_as::<_, Action>(
            "INSERT INTO actions (id, name, description) VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE
             SET name = EXCLUDED.name, description = EXCLUDED.description
             RETURNING id, name, description",
        )
        .bind(&action.id)
        .bind(&action.name)
        .bind(&action.description)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, action: &Action) -> Result<Option<Action>, sqlx::Error> {
        sqlx::query_as::<_, Action>(
            "UPDATE actions SET name = $2, description = $3
             WHERE id = $1 RETURNING id, name, description",
        )
        .bind(&action.id)
        .bind(&action.name)
        .bind(&action.description)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Action>, sqlx::Error> {
        sqlx::query_as::<_, Action>("SELECT id, name, description FROM actions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_all(&self) -> Result<Vec<Action>, sqlx::Error> {
        sqlx::query_as::<_, Action>("SELECT id, name, description FROM actions")
            .fetch_all(&self.pool)
            .await
    }
}
