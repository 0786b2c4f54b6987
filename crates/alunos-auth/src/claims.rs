//! JWT claim structure for bearer tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in tokens issued at login.
///
/// # Fields
///
/// - `cpf`: National id of the authenticated principal
/// - `rg`: Secondary id of the authenticated principal
/// - `iat`: Issued-at timestamp, `0` when the token does not carry one
/// - `exp`: Expiration timestamp, only present when a lifetime is configured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub cpf: String,
    pub rg: String,
    #[serde(default)]
    pub iat: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}
