//! Login request and response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credential pair submitted to `POST /login`.
///
/// Missing fields deserialize as empty strings so that an incomplete body
/// is rejected by the credential check (401) rather than as malformed (400).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub rg: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
