//! # Alunos Config
//!
//! Configuration types for the Alunos API, loaded from environment variables:
//!
//! - [`jwt`]: Token signing secret and optional lifetime
//! - [`credentials`]: The credential pair accepted at login
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address
//!
//! # Example
//!
//! ```ignore
//! use alunos_config::{CorsConfig, CredentialsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let credentials = CredentialsConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod credentials;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use credentials::CredentialsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads a variable that must be present and non-empty.
pub(crate) fn required_var(name: &str) -> anyhow::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => anyhow::bail!("{} must be set", name),
    }
}
