//! Auth Gate
//!
//! Decides whether a request may reach a protected resource, purely from
//! its headers. No store access: a token that verifies is enough.
//!
//! ```text
//! no cookie ───────────────────────────────► Rejected(MissingToken)   401
//! cookie ──► verify ──┬─ ok ───────────────► Admitted(AuthContext)
//!                     └─ bad sig / expired ─► Rejected(InvalidToken)  400
//! ```

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use platform::cookie::extract_cookie;
use platform::token::{TokenError, TokenService};

use crate::application::config::AuthConfig;
use crate::domain::entity::session::SessionClaims;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthError;

/// Identity of the caller, valid for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateRejection {
    MissingToken,
    InvalidToken(TokenError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Admitted(AuthContext),
    Rejected(GateRejection),
}

impl From<GateRejection> for AuthError {
    fn from(rejection: GateRejection) -> Self {
        match rejection {
            GateRejection::MissingToken => AuthError::MissingToken,
            GateRejection::InvalidToken(e) => AuthError::InvalidToken(e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthGate {
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self { tokens, config }
    }

    pub fn inspect(&self, headers: &HeaderMap) -> GateOutcome {
        self.inspect_at(headers, Utc::now())
    }

    pub fn inspect_at(&self, headers: &HeaderMap, now: DateTime<Utc>) -> GateOutcome {
        let token = extract_cookie(headers, &self.config.token_cookie_name)
            .filter(|value| !value.is_empty());

        let Some(token) = token else {
            return GateOutcome::Rejected(GateRejection::MissingToken);
        };

        if self.config.log_token_values {
            tracing::debug!(token = %token, "Verifying auth token");
        }

        match self.tokens.verify_at::<SessionClaims>(&token, now) {
            Ok(verified) => GateOutcome::Admitted(AuthContext {
                user_id: verified.payload.user_id,
            }),
            Err(e) => GateOutcome::Rejected(GateRejection::InvalidToken(e)),
        }
    }
}
