//! Person Name Value Object
//!
//! First or last name as entered at registration. Trimmed; otherwise kept
//! as typed (no case folding, any script).

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

/// Maximum length in characters
pub const PERSON_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct PersonName(String);

impl PersonName {
    /// `field` names the input in error messages (e.g. `"firstName"`).
    pub fn new(value: impl Into<String>, field: &str) -> AppResult<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(AppError::bad_request(format!("{field} cannot be empty")));
        }

        if value.chars().count() > PERSON_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "{field} must be at most {PERSON_NAME_MAX_LENGTH} characters"
            )));
        }

        if value.chars().any(char::is_control) {
            return Err(AppError::bad_request(format!(
                "{field} contains invalid characters"
            )));
        }

        Ok(Self(value))
    }

    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
