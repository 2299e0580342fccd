//! User Entity
//!
//! A registered account: identity, credentials and profile in one record.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, person_name::PersonName, user_id::UserId, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, carried in session tokens
    pub user_id: UserId,
    /// Unique, canonical (lowercase)
    pub email: Email,
    /// bcrypt hash, never the clear text
    pub password_hash: UserPassword,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(
        email: Email,
        password_hash: UserPassword,
        first_name: PersonName,
        last_name: PersonName,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            first_name,
            last_name,
            created_at: Utc::now(),
        }
    }
}
