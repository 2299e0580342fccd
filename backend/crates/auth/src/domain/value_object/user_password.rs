//! User Password Value Object
//!
//! Domain wrapper around `platform::password`. bcrypt work happens on the
//! blocking pool, so both directions are async.
//!
//! No length or complexity rules: any present password is accepted,
//! including the empty string.

use kernel::error::{
    app_error::{AppError, AppResult, ResultExt},
    kind::ErrorKind,
};
use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Password as submitted. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    fn into_inner(self) -> ClearTextPassword {
        self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// bcrypt hash for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash `raw` with the given bcrypt cost.
    pub async fn from_raw(raw: RawPassword, cost: u32) -> AppResult<Self> {
        let hashed = raw
            .into_inner()
            .hash_in_background(cost)
            .await
            .map_err(|e| match e {
                PasswordHashError::HashingFailed(msg) => {
                    AppError::internal(format!("Password hashing failed: {}", msg))
                }
                other => AppError::internal("Password hashing worker failed").with_source(other),
            })?;

        Ok(Self(hashed))
    }

    /// Accept a hash read from the database
    pub fn from_stored(hash: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_stored(hash).map_app_err(
            ErrorKind::InternalServerError,
            "Invalid password hash in database",
        )?;

        Ok(Self(hashed))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// `Ok(false)` on mismatch; `Err` only if the worker itself failed.
    pub async fn verify(&self, raw: RawPassword) -> AppResult<bool> {
        self.0
            .verify_in_background(raw.into_inner())
            .await
            .map_app_err(
                ErrorKind::InternalServerError,
                "Password verification worker failed",
            )
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

// ============================================================================
// Tests
// ============================================================================
