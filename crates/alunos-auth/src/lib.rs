//! # Alunos Auth
//!
//! The token half of the API:
//!
//! - [`claims`]: JWT claim structure carried by bearer tokens
//! - [`jwt`]: Token creation and verification
//! - [`credentials`]: Pluggable credential verification for login
//!
//! # Example
//!
//! ```ignore
//! use alunos_auth::{CredentialVerifier, StaticCredentials, create_token, verify_token};
//! use alunos_config::{CredentialsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let verifier = StaticCredentials::from(CredentialsConfig::from_env()?);
//!
//! if verifier.verify("12345678901", "123456789") {
//!     let token = create_token("12345678901", "123456789", &jwt_config)?;
//!     let claims = verify_token(&token, &jwt_config)?;
//! }
//! ```

pub mod claims;
pub mod credentials;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use credentials::{CredentialVerifier, StaticCredentials};
pub use jwt::{create_token, verify_token};
