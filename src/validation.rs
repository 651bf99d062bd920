use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// Request body carrying field-level rules.
pub trait Payload: DeserializeOwned + Validate + Send {
    /// Entity name used in the failure summary.
    const ENTITY: &'static str;
}

/// Error body returned for rejected payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub message: String,
    pub validation_errors: Vec<String>,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            validation_errors: Vec::new(),
        }
    }

    pub fn add(&mut self, error: impl Into<String>) {
        self.validation_errors.push(error.into());
    }

    /// One summary line plus one message per failed rule, ordered by field name.
    pub fn from_errors(entity: &str, errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages: Vec<String> = fields
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();

        let mut failure = Self::new(format!(
            "{entity} validation failed. {} error(s)",
            messages.len()
        ));
        for msg in messages {
            failure.add(msg);
        }
        failure
    }
}

/// JSON body extractor that runs the payload's rules before the handler.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Payload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
                _ => AppError::BadRequest(rejection.body_text()),
            })?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(ValidationFailure::from_errors(T::ENTITY, &errors)))?;

        Ok(ValidatedJson(value))
    }
}
