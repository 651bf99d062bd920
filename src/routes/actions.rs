use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::Json;

use crate::db::Repository;
use crate::error::AppError;
use crate::models::{Action, ActionHistory, ActionPayload};
use crate::state::SharedState;
use crate::validation::ValidatedJson;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Action>>, AppError> {
    let actions = state.actions.find_all().await?;
    Ok(Json(actions))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Action>, AppError> {
    let action = state
        .actions
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(action))
}

/// History of one action. An action without entries (or an unknown id)
/// yields an empty list.
pub async fn history(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ActionHistory>>, AppError> {
    let entries = state.history.find_by_action_id(&id).await?;
    Ok(Json(entries))
}

pub async fn create(
    State(state): State<SharedState>,
    ValidatedJson(req): ValidatedJson<ActionPayload>,
) -> Result<(StatusCode, [(header::HeaderName, HeaderValue); 1], Json<Action>), AppError> {
    let action = state.actions.save(&req.into_action()).await?;
    let location = super::location(&state.config.base_url, "actions", &action.id)?;

    tracing::info!(id = %action.id, "action created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(action),
    ))
}

/// Replace an existing action. Unknown ids are rejected, never inserted.
pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<ActionPayload>,
) -> Result<Json<Action>, AppError> {
    let action = state
        .actions
        .update(&req.into_action_with_id(id))
        .await?
        .ok_or(AppError::NotFound)?;

    tracing::info!(id = %action.id, "action updated");

    Ok(Json(action))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state.actions.delete(&id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(%id, "action deleted");

    Ok(StatusCode::NO_CONTENT)
}
