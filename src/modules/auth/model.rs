//! Authentication models.
//!
//! Re-exports the login DTOs from the `alunos-models` crate.

pub use alunos_models::auth::*;
