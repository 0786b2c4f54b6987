//! Middleware and extractors for cross-cutting request concerns.
//!
//! - [`auth`]: Bearer token verification for protected routes
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. The `AuthUser` extractor verifies the token signature
//! 3. Handler executes if the token is valid; otherwise the request ends in 401
//!
//! Because `AuthUser` is extracted before the JSON body, an unauthenticated
//! request is rejected without its body ever being parsed.

pub mod auth;
