//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Registration and login use cases, the auth gate
//! - `infra/` - PostgreSQL and in-memory user stores
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration with email, password, first and last name
//! - Login that sets a signed, one-hour `auth_token` cookie
//! - A gate that admits or rejects requests to protected routes
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (cost 10) off the async runtime
//! - Stateless HS256 tokens; the signing secret is injected at startup
//! - Cookie is HttpOnly, and Secure in production
//! - Raw tokens are only logged when token logging is switched on

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::gate::{AuthContext, AuthGate, GateOutcome, GateRejection};
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::handlers::AuthAppState;
pub use presentation::middleware::require_auth;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
