//! # Alunos Models
//!
//! Domain models and DTOs for the Alunos API.
//!
//! - [`auth`]: Login request and response bodies
//! - [`students`]: The student entity and its create/update DTOs

pub mod auth;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, LoginResponse};
pub use students::{CreateStudentDto, DeleteStudentResponse, Student, UpdateStudentDto};
