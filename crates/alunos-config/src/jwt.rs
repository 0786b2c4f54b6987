use std::env;

use crate::required_var;

/// Token signing configuration.
///
/// `expiry` is the token lifetime in seconds. When it is `None` issued tokens
/// carry no `exp` claim and stay valid until the secret changes.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry: Option<i64>,
}

impl JwtConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            secret: required_var("JWT_SECRET")?,
            expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|secs: &i64| *secs > 0),
        })
    }
}
