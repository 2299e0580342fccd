//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use platform::cookie::set_cookie_header;
use platform::token::TokenService;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::gate::AuthGate;
use crate::application::{LoginUseCase, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, tokens: Arc<TokenService>, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            tokens,
            config: Arc::new(config),
        }
    }

    /// Gate sharing this state's token service and cookie name
    pub fn gate(&self) -> AuthGate {
        AuthGate::new(self.tokens.clone(), self.config.clone())
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(invalid_body)?;
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    use_case.execute(req.into()).await?;

    Ok((StatusCode::CREATED, "User registered successfully"))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(invalid_body)?;
    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case.execute(req.into()).await?;

    let cookie = set_cookie_header(&state.config.cookie(), &output.token.token)
        .map_err(|e| AuthError::Internal(format!("Invalid cookie header: {}", e)))?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Logged in successfully",
        }),
    ))
}

/// Malformed JSON, a wrong field type or a missing content type. axum's
/// rejection text names serde internals, so it goes to the log only.
fn invalid_body(rejection: JsonRejection) -> AuthError {
    tracing::debug!(
        status = %rejection.status(),
        error = %rejection.body_text(),
        "Rejected request body"
    );
    AuthError::Validation("Invalid request body".to_string())
}
