//! Student models.
//!
//! Re-exports the student entity and DTOs from the `alunos-models` crate,
//! along with the pagination query they are listed with.

pub use alunos_core::PageQuery;
pub use alunos_models::students::*;
