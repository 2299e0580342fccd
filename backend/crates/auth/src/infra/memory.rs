//! In-Memory Repository Implementation
//!
//! Keyed by canonical email. The write lock makes check-and-insert atomic,
//! so concurrent registrations of one email yield exactly one success.
//! Contents are lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;

        if users.contains_key(user.email.as_str()) {
            return Err(AuthError::DuplicateEmail);
        }
        users.insert(user.email.as_str().to_string(), user.clone());

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(email.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        person_name::PersonName,
        user_password::{RawPassword, UserPassword},
    };

    async fn user(email: &str) -> User {
        User::new(
            Email::new(email).unwrap(),
            UserPassword::from_raw(RawPassword::new("pw1"), 4).await.unwrap(),
            PersonName::new("A", "firstName").unwrap(),
            PersonName::new("B", "lastName").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryUserRepository::new();
        let created = user("a@x.com").await;
        repo.create(&created).await.unwrap();

        let found = repo
            .find_by_email(&Email::new("A@X.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.user_id, created.user_id);

        let missing = repo
            .find_by_email(&Email::new("b@x.com").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_rejected() {
        let repo = MemoryUserRepository::new();
        repo.create(&user("a@x.com").await).await.unwrap();

        let err = repo.create(&user("a@x.com").await).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_registrations_one_wins() {
        let repo = MemoryUserRepository::new();
        let mut handles = Vec::new();

        for _ in 0..8 {
            let repo = repo.clone();
            let candidate = user("race@x.com").await;
            handles.push(tokio::spawn(async move { repo.create(&candidate).await }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.len().await, 1);
    }
}
