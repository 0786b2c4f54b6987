use crate::required_var;

/// The single credential pair accepted by the login endpoint.
#[derive(Clone, Debug)]
pub struct CredentialsConfig {
    pub cpf: String,
    pub rg: String,
}

impl CredentialsConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            cpf: required_var("LOGIN_CPF")?,
            rg: required_var("LOGIN_RG")?,
        })
    }
}
