use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::db::{ActionHistoryRepository, ActionRepository};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub actions: ActionRepository,
    pub history: ActionHistoryRepository,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self {
            config,
            actions: ActionRepository::new(pool.clone()),
            history: ActionHistoryRepository::new(pool),
        }
    }
}
