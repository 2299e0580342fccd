//! Register Use Case
//!
//! Creates a new user account. All input is validated before the password
//! is hashed.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    person_name::PersonName,
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input. `None` means the field was absent from the request.
pub struct RegisterInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let email = required(input.email, "email")?;
        let password = required(input.password, "password")?;
        let first_name = required(input.first_name, "firstName")?;
        let last_name = required(input.last_name, "lastName")?;

        let email = Email::new(email).map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let first_name = PersonName::new(first_name, "firstName")
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let last_name = PersonName::new(last_name, "lastName")
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let password_hash =
            UserPassword::from_raw(RawPassword::new(password), self.config.bcrypt_cost)
                .await
                .map_err(AuthError::RegistrationFailed)?;

        let user = User::new(email, password_hash, first_name, last_name);

        match self.user_repo.create(&user).await {
            Ok(()) => {}
            Err(AuthError::Store(e)) => return Err(AuthError::RegistrationFailed(e)),
            Err(e) => return Err(e),
        }

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}

fn required(value: Option<String>, field: &str) -> AuthResult<String> {
    value.ok_or_else(|| AuthError::Validation(format!("{field} is required")))
}
