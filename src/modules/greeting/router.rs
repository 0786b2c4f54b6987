use crate::modules::greeting::controller::greet;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_greeting_router() -> Router<AppState> {
    Router::new().route("/{name}", get(greet))
}
