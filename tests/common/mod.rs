#![allow(dead_code)]

use std::sync::Arc;

use alunos::router::init_router;
use alunos::state::AppState;
use alunos_auth::{StaticCredentials, create_token};
use alunos_config::{CorsConfig, JwtConfig};
use alunos_db::MemoryStudentStore;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const LOGIN_CPF: &str = "12345678901";
pub const LOGIN_RG: &str = "123456789";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiry: None,
    }
}

/// Router wired to a fresh in-memory store, which is returned for direct
/// inspection.
pub fn setup_test_app() -> (Router, Arc<MemoryStudentStore>) {
    let store = Arc::new(MemoryStudentStore::new());
    let state = AppState {
        store: store.clone(),
        credentials: Arc::new(StaticCredentials::new(LOGIN_CPF, LOGIN_RG)),
        jwt_config: jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:8080".to_string()],
        },
    };
    (init_router(state), store)
}

pub fn valid_token() -> String {
    create_token(LOGIN_CPF, LOGIN_RG, &jwt_config()).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Sends one request through a clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}
