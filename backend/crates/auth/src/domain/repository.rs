//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user.
    ///
    /// Email uniqueness is enforced atomically by the store; a second insert
    /// with the same email fails with `AuthError::DuplicateEmail`.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by (canonical) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}
