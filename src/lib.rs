//! # Alunos API
//!
//! A small REST API, built with Axum, for keeping student ("aluno") records.
//! Reads are public; writes require a bearer token issued by `POST /login`.
//!
//! ## Layout
//!
//! ```text
//! src/
//! ├── middleware/       # Bearer-token extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login and token issuing
//! │   ├── students/    # Student records
//! │   └── greeting/    # GET /{name}
//! ├── logging.rs        # Subscriber setup and request logging
//! ├── router.rs         # Route table, CORS and fallback
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validated JSON extractor
//! ```
//!
//! Each feature module splits into `controller.rs` (handlers), `service.rs`
//! (logic), `model.rs` (DTOs) and `router.rs`.
//!
//! ## Routes
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | POST | `/login` | none |
//! | GET | `/{name}` | none |
//! | GET | `/alunos?page=&limit=` | none |
//! | POST | `/alunos` | bearer |
//! | GET | `/alunos/{id}` | none |
//! | PATCH | `/alunos/{id}` | bearer |
//! | DELETE | `/alunos/{id}` | bearer |
//! | GET | `/alunos/cpf/{cpf}` | none |
//!
//! ## Environment
//!
//! ```bash
//! JWT_SECRET=change-me          # required
//! LOGIN_CPF=12345678901         # required
//! LOGIN_RG=123456789            # required
//! JWT_EXPIRY=3600               # optional, seconds
//! DATABASE_URL=postgres://...   # optional, in-memory store when unset
//! HOST=0.0.0.0 PORT=8080
//! ALLOWED_ORIGINS=http://localhost:8080
//! LOG_DIR=storage/logs
//! ```

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use alunos_auth;
pub use alunos_config;
pub use alunos_core;
pub use alunos_db;
pub use alunos_models;
