//! Router Composition
//!
//! Auth endpoints, pages and static assets on one router, wrapped in the
//! request-wide layers.

use std::path::PathBuf;
use std::time::Duration;

use auth::{AuthAppState, auth_router, domain::repository::UserRepository};
use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::pages;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub public_dir: PathBuf,
    pub request_timeout: Duration,
    pub frontend_origins: Vec<String>,
}

impl From<&Settings> for AppOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            public_dir: settings.public_dir.clone(),
            request_timeout: settings.request_timeout,
            frontend_origins: settings.frontend_origins.clone(),
        }
    }
}

pub fn build_app<R>(state: AuthAppState<R>, options: &AppOptions) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let gate = state.gate();

    let app = auth_router(state)
        .merge(pages::router(&options.public_dir, gate))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            options.request_timeout,
        ));

    match cors_layer(&options.frontend_origins) {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

/// Credentialed CORS for separately hosted frontends. Same-origin pages
/// need none.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if allowed_origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
            .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
            .allow_credentials(true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_only_with_origins() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&["not a header\u{7f}".to_string()]).is_none());
        assert!(cors_layer(&["http://localhost:5173".to_string()]).is_some());
    }
}
