//! JWT (JSON Web Token) utilities for authentication.
//!
//! Tokens are HS256-signed with the shared secret from [`JwtConfig`] and
//! carry the CPF/RG pair of the principal that logged in.
//!
//! # Expiry
//!
//! When `JwtConfig::expiry` is `None` no `exp` claim is written and
//! verification does not require one, so tokens stay valid until the secret
//! changes. When a token does carry `exp`, it is enforced.
//!
//! # Example
//!
//! ```ignore
//! use alunos_auth::{create_token, verify_token};
//! use alunos_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = create_token("12345678901", "123456789", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.cpf, "12345678901");
//! ```

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use alunos_config::JwtConfig;
use alunos_core::AppError;

use crate::claims::Claims;

/// Signs a token for the given credential pair.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_token(cpf: &str, rg: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        cpf: cpf.to_string(),
        rg: rg.to_string(),
        iat: now,
        exp: jwt_config.expiry.map(|secs| now + secs as usize),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies a token's signature (and expiry, if present) and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if:
/// - The token is malformed
/// - The signature does not match the configured secret
/// - The token was signed with an algorithm other than HS256
/// - The token carries an `exp` claim in the past
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}
