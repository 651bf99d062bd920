pub mod action_history;
pub mod actions;

pub use action_history::ActionHistoryRepository;
pub use actions::ActionRepository;

use async_trait::async_trait;

use crate::models::Entity;

/// Persistence access for one entity type, keyed by its string id.
///
/// Every write is a single statement; there is no transaction spanning
/// calls, so `save_all` is not atomic across its elements.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Entity + Send + Sync + 'static,
{
    /// Insert the entity under its own id, or overwrite every non-id column
    /// if a row with that id already exists. Returns the stored row.
    async fn save(&self, entity: &T) -> Result<T, sqlx::Error>;

    /// Overwrite an existing row. Returns `None`, without writing, when the
    /// id is unknown.
    async fn update(&self, entity: &T) -> Result<Option<T>, sqlx::Error>;

    /// Remove the row if present. Returns whether a row was removed.
    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error>;

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, sqlx::Error>;

    /// Full table scan in no particular order.
    async fn find_all(&self) -> Result<Vec<T>, sqlx::Error>;

    /// Save each entity independently, then return the whole table (not just
    /// the saved subset).
    async fn save_all(&self, entities: &[T]) -> Result<Vec<T>, sqlx::Error> {
        for entity in entities {
            tracing::debug!(id = entity.id(), "saving batch element");
            self.save(entity).await?;
        }
        self.find_all().await
    }
}
