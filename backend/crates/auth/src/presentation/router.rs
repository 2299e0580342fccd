//! Auth Router

use axum::{Router, routing::post};

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// `POST /register` and `POST /login` for any repository implementation
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
