use axum::{Json, extract::Path};
use serde_json::{Value, json};

fn greeting(name: &str) -> Json<Value> {
    Json(json!({ "API diz": format!("E ai {}, Tudo beleza?", name) }))
}

/// Greets whoever is named in the path.
pub async fn greet(Path(name): Path<String>) -> Json<Value> {
    greeting(&name)
}

/// `GET /login`: the static login route shadows `/{name}`, so the greeting
/// for that name is served here.
pub async fn greet_login() -> Json<Value> {
    greeting("login")
}
