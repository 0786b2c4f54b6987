use std::sync::Arc;

use alunos_auth::{CredentialVerifier, StaticCredentials};
use alunos_config::{CorsConfig, CredentialsConfig, JwtConfig};
use alunos_db::{MemoryStudentStore, PgStudentStore, StudentStore, init_db_pool, run_migrations};
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env()?;
    let credentials = StaticCredentials::from(CredentialsConfig::from_env()?);

    Ok(AppState {
        store: init_store().await?,
        credentials: Arc::new(credentials),
        jwt_config,
        cors_config: CorsConfig::from_env(),
    })
}

async fn init_store() -> anyhow::Result<Arc<dyn StudentStore>> {
    match std::env::var("DATABASE_URL") {
        Ok(database_url) if !database_url.is_empty() => {
            let pool = init_db_pool(&database_url).await?;
            run_migrations(&pool).await?;
            info!("Using PostgreSQL student store");
            Ok(Arc::new(PgStudentStore::new(pool)))
        }
        _ => {
            warn!("DATABASE_URL not set, records are kept in memory and lost on restart");
            Ok(Arc::new(MemoryStudentStore::new()))
        }
    }
}
