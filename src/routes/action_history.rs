use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::Json;

use crate::db::Repository;
use crate::error::AppError;
use crate::models::{ActionHistory, ActionHistoryPayload};
use crate::state::SharedState;
use crate::validation::ValidatedJson;

pub async fn list(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ActionHistory>>, AppError> {
    let entries = state.history.find_all().await?;
    Ok(Json(entries))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ActionHistory>, AppError> {
    let entry = state
        .history
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(entry))
}

pub async fn create(
    State(state): State<SharedState>,
    ValidatedJson(req): ValidatedJson<ActionHistoryPayload>,
) -> Result<(StatusCode, [(header::HeaderName, HeaderValue); 1], Json<ActionHistory>), AppError> {
    let entry = state.history.save(&req.into_history()).await?;
    let location = super::location(&state.config.base_url, "action-history", &entry.id)?;

    tracing::info!(id = %entry.id, action_id = %entry.action_id, "action history recorded");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(entry),
    ))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<ActionHistoryPayload>,
) -> Result<Json<ActionHistory>, AppError> {
    let entry = state
        .history
        .update(&req.into_history_with_id(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(entry))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state.history.delete(&id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
