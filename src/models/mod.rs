pub mod action;
pub mod action_history;

pub use action::{Action, ActionPayload};
pub use action_history::{ActionHistory, ActionHistoryPayload};

/// A persisted record keyed by a string id.
pub trait Entity {
    fn id(&self) -> &str;
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
