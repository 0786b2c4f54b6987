//! # Alunos Core
//!
//! Core types, errors, and utilities for the Alunos API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Lenient `page`/`limit` query parsing
//!
//! # Example
//!
//! ```ignore
//! use alunos_core::errors::AppError;
//! use alunos_core::pagination::PageQuery;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Aluno não encontrado"));
//!
//! let query = PageQuery::new(Some("2"), Some("10"));
//! let window = query.window(); // Some(PageWindow { offset: 10, limit: 10 })
//! ```

pub mod errors;
pub mod pagination;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{PageQuery, PageWindow};
