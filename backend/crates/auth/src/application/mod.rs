//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod gate;
pub mod login;
pub mod register;

// Re-exports
pub use config::AuthConfig;
pub use gate::{AuthContext, AuthGate, GateOutcome, GateRejection};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
