use crate::state::AppState;
use crate::validator::ValidatedJson;
use alunos_core::AppError;
use axum::Json;
use axum::extract::State;
use tracing::instrument;

use super::model::{LoginRequest, LoginResponse};
use super::service::AuthService;

/// Exchange a CPF/RG pair for a bearer token.
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(state.credentials.as_ref(), dto, &state.jwt_config)?;
    Ok(Json(response))
}
