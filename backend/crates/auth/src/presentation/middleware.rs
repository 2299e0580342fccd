//! Auth Middleware
//!
//! `require_auth` puts the gate in front of protected routes. Handlers
//! behind it take [`AuthContext`] as an extractor.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::gate::{AuthContext, AuthGate, GateOutcome};
use crate::error::AuthError;

/// Admit the request or answer with the gate's rejection.
///
/// Install with `route_layer(from_fn_with_state(gate, require_auth))`.
pub async fn require_auth(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> Response {
    match gate.inspect(req.headers()) {
        GateOutcome::Admitted(context) => {
            req.extensions_mut().insert(context);
            next.run(req).await
        }
        GateOutcome::Rejected(rejection) => AuthError::from(rejection).into_response(),
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}
