use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use alunos_core::AppError;

/// Joins field errors into one readable message, ordered by field name.
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut field_errors: Vec<_> = errors.field_errors().into_iter().collect();
    field_errors.sort_by(|(a, _), (b, _)| a.cmp(b));

    field_errors
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maps validation failures to a 400 response.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    AppError::bad_request(anyhow!("{}", format_errors(&errors)))
}

/// JSON body extractor that runs `Validate` after deserializing.
///
/// Both malformed bodies and rule violations are rejected with 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => AppError::bad_request(anyhow!(
                    "Missing 'Content-Type: application/json' header"
                )),
                JsonRejection::JsonDataError(_) => {
                    AppError::bad_request(anyhow!("Invalid field type in request"))
                }
                JsonRejection::JsonSyntaxError(_) => {
                    AppError::bad_request(anyhow!("Malformed JSON in request body"))
                }
                _ => AppError::bad_request(anyhow!("Invalid request body")),
            })?;

        value.validate().map_err(validation_error)?;

        Ok(ValidatedJson(value))
    }
}
