//! Password Hashing and Verification
//!
//! bcrypt-based password handling with:
//! - Per-hash random salt embedded in the stored value
//! - Configurable work factor (cost)
//! - Zeroization of clear text input
//! - Background-thread variants so async callers never block the runtime
//!
//! No length or complexity policy is applied here. bcrypt only reads the
//! first 72 bytes of its input; longer passwords are truncated.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Work factor used when nothing else is configured.
pub const DEFAULT_COST: u32 = 10;

/// Length of a bcrypt modular-crypt string (`$2b$10$` + 22 salt + 31 hash).
const BCRYPT_HASH_LEN: usize = 60;

const BCRYPT_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2x$", "$2y$"];

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed (e.g. cost out of range)
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored value is not a bcrypt hash
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// The blocking worker panicked or was cancelled
    #[error("Password worker failed: {0}")]
    WorkerFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone`
/// - Debug output is redacted
///
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("pw1");
/// let hashed = password.hash(4).unwrap();
/// assert!(hashed.verify(&password));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap user input. Empty input is accepted.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with a fresh random salt.
    ///
    /// Deliberately slow; prefer [`Self::hash_in_background`] from async code.
    pub fn hash(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(self.as_bytes(), cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword { hash })
    }

    /// Hash on tokio's blocking pool.
    pub async fn hash_in_background(self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        tokio::task::spawn_blocking(move || self.hash(cost))
            .await
            .map_err(|e| PasswordHashError::WorkerFailed(e.to_string()))?
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt hash in modular-crypt format (`$2b$<cost>$<salt><digest>`).
///
/// The salt and the cost travel inside the string, so verification needs
/// nothing else.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Accept a value read back from the store
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        let known_prefix = BCRYPT_PREFIXES.iter().any(|p| hash.starts_with(p));
        if !known_prefix || hash.len() != BCRYPT_HASH_LEN || hash.as_bytes()[6] != b'$' {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash })
    }

    /// The string to persist
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Work factor recorded in the hash
    pub fn cost(&self) -> Option<u32> {
        self.hash.get(4..6)?.parse().ok()
    }

    /// Verify a password against this hash.
    ///
    /// A hash that bcrypt cannot parse never verifies.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        bcrypt::verify(password.as_bytes(), &self.hash).unwrap_or(false)
    }

    /// [`Self::verify`] on tokio's blocking pool.
    pub async fn verify_in_background(
        &self,
        password: ClearTextPassword,
    ) -> Result<bool, PasswordHashError> {
        let hashed = self.clone();
        tokio::task::spawn_blocking(move || hashed.verify(&password))
            .await
            .map_err(|e| PasswordHashError::WorkerFailed(e.to_string()))
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the suite fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("pw1");
        let hashed = password.hash(TEST_COST).unwrap();

        assert!(hashed.verify(&password));
        assert!(!hashed.verify(&ClearTextPassword::new("pw2")));
        assert!(!hashed.verify(&ClearTextPassword::new("PW1")));
    }

    #[test]
    fn test_hash_is_salted() {
        let password = ClearTextPassword::new("same input");
        let first = password.hash(TEST_COST).unwrap();
        let second = password.hash(TEST_COST).unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify(&password));
        assert!(second.verify(&password));
    }

    #[test]
    fn test_default_cost_is_recorded() {
        let hashed = ClearTextPassword::new("pw1").hash(DEFAULT_COST).unwrap();
        assert_eq!(hashed.cost(), Some(10));
        assert!(hashed.as_str().starts_with("$2b$10$"));
    }

    #[test]
    fn test_empty_password_still_hashes() {
        let empty = ClearTextPassword::new("");
        let hashed = empty.hash(TEST_COST).unwrap();

        assert!(hashed.verify(&empty));
        assert!(!hashed.verify(&ClearTextPassword::new(" ")));
    }

    #[test]
    fn test_cost_out_of_range() {
        let result = ClearTextPassword::new("pw1").hash(3);
        assert!(matches!(result, Err(PasswordHashError::HashingFailed(_))));
    }

    #[test]
    fn test_stored_roundtrip() {
        let password = ClearTextPassword::new("pw1");
        let hashed = password.hash(TEST_COST).unwrap();

        let restored = HashedPassword::from_stored(hashed.as_str()).unwrap();
        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_stored_value() {
        assert!(HashedPassword::from_stored("not_a_valid_hash").is_err());
        assert!(HashedPassword::from_stored("").is_err());
        // Argon2 PHC strings are not accepted
        assert!(HashedPassword::from_stored("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash(TEST_COST).unwrap();
        assert!(!format!("{:?}", hashed).contains(hashed.as_str()));
    }

    #[tokio::test]
    async fn test_background_hash_and_verify() {
        let hashed = ClearTextPassword::new("pw1")
            .hash_in_background(TEST_COST)
            .await
            .unwrap();

        assert!(
            hashed
                .verify_in_background(ClearTextPassword::new("pw1"))
                .await
                .unwrap()
        );
        assert!(
            !hashed
                .verify_in_background(ClearTextPassword::new("nope"))
                .await
                .unwrap()
        );
    }
}
