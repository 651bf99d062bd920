use async_trait::async_trait;
use sqlx::PgPool;

use super::Repository;
use crate::models::ActionHistory;

#[derive(Clone)]
pub struct ActionHistoryRepository {
    pool: PgPool,
}

impl ActionHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// History entries recorded for one action. Empty when there are none.
    pub async fn find_by_action_id(
        &self,
        action_id: &str,
    ) -> Result<Vec<ActionHistory>, sqlx::Error> {
        sqlx::query_as::<_, ActionHistory>(
            "SELECT id, action_id, created FROM actions_history WHERE action_id = $1",
        )
        .bind(action_id)
        .fetch_all(&self.pool)
        .await
    }
}

#[async_trait]
impl Repository<ActionHistory> for ActionHistoryRepository {
    async fn save(&self, history: &ActionHistory) -> Result<ActionHistory, sqlx::Error> {
        sqlx::query_as::<_, ActionHistory>(
            "INSERT INTO actions_history (id, action_id, created) VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE
             SET action_id = EXCLUDED.action_id, created = EXCLUDED.created
             RETURNING id, action_id, created",
        )
        .bind(&history.id)
        .bind(&history.action_id)
        .bind(history.created)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, history: &ActionHistory) -> Result<Option<ActionHistory>, sqlx::Error> {
        sqlx::query_as::<_, ActionHistory>(
            "UPDATE actions_history SET action_id = $2, created = $3
             WHERE id = $1 RETURNING id, action_id, created",
        )
        .bind(&history.id)
        .bind(&history.action_id)
        .bind(history.created)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actions_history WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ActionHistory>, sqlx::Error> {
        sqlx::query_as::<_, ActionHistory>(
            "SELECT id, action_id, created FROM actions_history WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_all(&self) -> Result<Vec<ActionHistory>, sqlx::Error> {
        sqlx::query_as::<_, ActionHistory>("SELECT id, action_id, created FROM actions_history")
            .fetch_all(&self.pool)
            .await
    }
}
