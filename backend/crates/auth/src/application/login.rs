//! Login Use Case
//!
//! Checks credentials and issues a signed session token.

use std::sync::Arc;

use platform::token::{IssuedToken, TokenService};

use crate::domain::entity::session::SessionClaims;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: UserId,
    pub token: IssuedToken,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = input
            .email
            .ok_or_else(|| AuthError::Validation("email is required".to_string()))?;
        let password = input
            .password
            .ok_or_else(|| AuthError::Validation("password is required".to_string()))?;

        // A malformed email cannot belong to anyone.
        let Ok(email) = Email::new(email) else {
            return Err(AuthError::UserNotFound);
        };

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let matches = user
            .password_hash
            .verify(RawPassword::new(password))
            .await?;
        if !matches {
            return Err(AuthError::InvalidPassword);
        }

        let token = self
            .tokens
            .issue(&SessionClaims::new(user.user_id))
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            user_id = %user.user_id,
            expires_at = %token.expires_at,
            "User logged in"
        );

        Ok(LoginOutput {
            user_id: user.user_id,
            token,
        })
    }
}
