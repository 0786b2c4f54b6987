//! Credential verification for the login endpoint.
//!
//! Login only needs a yes/no answer for a CPF/RG pair, so the check sits
//! behind [`CredentialVerifier`]. The shipped implementation,
//! [`StaticCredentials`], accepts exactly one configured pair.

use std::fmt::Debug;

use alunos_config::CredentialsConfig;

pub trait CredentialVerifier: Send + Sync + Debug {
    /// Returns `true` when the pair identifies a known principal.
    fn verify(&self, cpf: &str, rg: &str) -> bool;
}

/// Accepts a single CPF/RG pair.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    cpf: String,
    rg: String,
}

impl StaticCredentials {
    pub fn new(cpf: impl Into<String>, rg: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            rg: rg.into(),
        }
    }
}

impl From<CredentialsConfig> for StaticCredentials {
    fn from(config: CredentialsConfig) -> Self {
        Self::new(config.cpf, config.rg)
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, cpf: &str, rg: &str) -> bool {
        self.cpf == cpf && self.rg == rg
    }
}
