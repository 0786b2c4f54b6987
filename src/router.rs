use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::greeting::router::init_greeting_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;
use alunos_config::CorsConfig;
use alunos_core::AppError;
use anyhow::anyhow;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

async fn not_found() -> AppError {
    AppError::not_found(anyhow!("Route not found"))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Builds the full application: public reads, bearer-gated writes, the login
/// endpoint and the greeting, wrapped in CORS and request logging.
pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(init_auth_router())
        .nest("/alunos", init_students_router())
        .merge(init_greeting_router())
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
