use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{new_id, Entity};
use crate::validation::Payload;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl Action {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            description,
        }
    }
}

impl Entity for Action {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for creating or replacing an action.
#[derive(Debug, Deserialize, Validate)]
pub struct ActionPayload {
    #[validate(length(min = 1, max = 64, message = "id must be between 1 and 64 characters"))]
    pub id: Option<String>,
    #[validate(
        required(message = "name must not be null"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Payload for ActionPayload {
    const ENTITY: &'static str = "Action";
}

impl ActionPayload {
    /// Builds the entity, keeping a caller-supplied id and generating one otherwise.
    pub fn into_action(self) -> Action {
        let mut action = Action::new(self.name.unwrap_or_default(), self.description);
        if let Some(id) = self.id {
            action.id = id;
        }
        action
    }

    /// Builds the entity under `id`, ignoring any id in the body.
    pub fn into_action_with_id(self, id: String) -> Action {
        Action {
            id,
            name: self.name.unwrap_or_default(),
            description: self.description,
        }
    }
}
