//! # Alunos DB
//!
//! The student store used by the record service.
//!
//! - [`store`]: The [`StudentStore`] trait and [`StudentFilter`]
//! - [`postgres`]: PostgreSQL implementation on a SQLx pool
//! - [`memory`]: In-memory implementation for tests and database-less runs
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use alunos_db::{PgStudentStore, StudentStore, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&database_url).await?;
//! run_migrations(&pool).await?;
//! let store: Arc<dyn StudentStore> = Arc::new(PgStudentStore::new(pool));
//! ```

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryStudentStore;
pub use postgres::PgStudentStore;
pub use store::{StudentFilter, StudentStore};

use anyhow::Context;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Initializes a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable; call this once at startup.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn init_db_pool(database_url: &str) -> anyhow::Result<PgPool> {
    PgPool::connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Applies the migrations under `migrations/` at the workspace root.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")
}
