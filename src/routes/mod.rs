pub mod action_history;
pub mod actions;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Actions
        .route("/api/actions", get(actions::list).post(actions::create))
        .route(
            "/api/actions/{id}",
            get(actions::get)
                .put(actions::update)
                .delete(actions::delete),
        )
        .route("/api/actions/{id}/history", get(actions::history))
        // Action history
        .route(
            "/api/action-history",
            get(action_history::list).post(action_history::create),
        )
        .route(
            "/api/action-history/{id}",
            get(action_history::get)
                .put(action_history::update)
                .delete(action_history::delete),
        )
}

/// Absolute `Location` for a newly created resource. The id is encoded as a
/// single path segment.
fn location(base_url: &str, collection: &str, id: &str) -> Result<HeaderValue, AppError> {
    let segment = urlencoding::encode(id);
    HeaderValue::from_str(&format!("{base_url}/api/{collection}/{segment}"))
        .map_err(|e| AppError::Internal(format!("Invalid location for {collection}/{id}: {e}")))
}
