use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{new_id, Entity};
use crate::validation::Payload;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionHistory {
    pub id: String,
    pub action_id: String,
    pub created: DateTime<Utc>,
}

impl ActionHistory {
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            action_id: action_id.into(),
            created: Utc::now(),
        }
    }
}

impl Entity for ActionHistory {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActionHistoryPayload {
    #[validate(length(min = 1, max = 64, message = "id must be between 1 and 64 characters"))]
    pub id: Option<String>,
    #[validate(
        required(message = "actionId must not be null"),
        length(min = 1, max = 64, message = "actionId must be between 1 and 64 characters")
    )]
    pub action_id: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

impl Payload for ActionHistoryPayload {
    const ENTITY: &'static str = "ActionHistory";
}

impl ActionHistoryPayload {
    pub fn into_history(self) -> ActionHistory {
        let mut history = ActionHistory::new(self.action_id.unwrap_or_default());
        if let Some(id) = self.id {
            history.id = id;
        }
        if let Some(created) = self.created {
            history.created = created;
        }
        history
    }

    /// Builds the entity under `id`; a missing `created` is stamped with the current time.
    pub fn into_history_with_id(self, id: String) -> ActionHistory {
        ActionHistory {
            id,
            action_id: self.action_id.unwrap_or_default(),
            created: self.created.unwrap_or_else(Utc::now),
        }
    }
}
