use alunos_auth::{CredentialVerifier, create_token};
use alunos_config::JwtConfig;
use alunos_core::AppError;
use tracing::{info, instrument, warn};

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Checks the credential pair and, on a match, signs a token for it.
    #[instrument(skip_all)]
    pub fn login(
        credentials: &dyn CredentialVerifier,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        if !credentials.verify(&dto.cpf, &dto.rg) {
            warn!("Login rejected: credentials did not match");
            return Err(AppError::unauthorized("Invalid credentials".to_string()));
        }

        let token = create_token(&dto.cpf, &dto.rg, jwt_config)?;
        info!("Login succeeded, token issued");

        Ok(LoginResponse { token })
    }
}
