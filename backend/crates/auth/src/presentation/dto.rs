//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so a missing field reaches validation as a
//! 400 with a readable message instead of a JSON rejection.

use serde::{Deserialize, Serialize};

use crate::application::{LoginInput, RegisterInput};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

/// Login response. The token travels only in the cookie.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_camel_case() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@x.com","password":"pw1","firstName":"A","lastName":"B"}"#,
        )
        .unwrap();
        assert_eq!(req.first_name.as_deref(), Some("A"));
        assert_eq!(req.last_name.as_deref(), Some("B"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert!(req.password.is_none());
        assert!(req.first_name.is_none());
    }

    #[test]
    fn test_login_response_shape() {
        let body = serde_json::to_value(LoginResponse {
            message: "Logged in successfully",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Logged in successfully" }));
    }
}
