//! HTML Pages and Static Assets
//!
//! Fixed page routes map to files under the public directory. Protected
//! pages sit behind the auth gate. Everything else in the directory is
//! served as-is, except the protected page files themselves, which are
//! only reachable through their gated routes.

use std::path::{Path, PathBuf};

use auth::{AuthContext, AuthGate, require_auth};
use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

/// A GET route answered with one file
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub path: &'static str,
    /// Relative to the public directory
    pub file: &'static str,
}

pub const PUBLIC_PAGES: &[Page] = &[
    Page {
        path: "/",
        file: "Welcome1.HTML",
    },
    Page {
        path: "/login",
        file: "Chef Data/login.html",
    },
    Page {
        path: "/register",
        file: "Chef Data/registration.html",
    },
];

pub const PROTECTED_PAGES: &[Page] = &[
    Page {
        path: "/dashboard",
        file: "Chef Data/chefdetails.html",
    },
    Page {
        path: "/userDashboard",
        file: "User Data/usermenu.html",
    },
    Page {
        path: "/user-in-hotel",
        file: "User Data/In-Hotel.html",
    },
    Page {
        path: "/vegMenu",
        file: "User Data/uservegmenu.html",
    },
];

/// Page routes plus the static fallback.
///
/// Routes are `MethodRouter`s so that `GET /login` here and `POST /login`
/// from the auth router merge onto one path.
pub fn router(public_dir: &Path, gate: AuthGate) -> Router {
    let mut protected = Router::new();
    for page in PROTECTED_PAGES {
        let file = public_dir.join(page.file);
        protected = protected.route(
            page.path,
            get(move |context: AuthContext, req: Request| {
                tracing::debug!(
                    user_id = %context.user_id,
                    path = %req.uri().path(),
                    "Serving protected page"
                );
                serve_file(file.clone(), req)
            }),
        );
    }
    let protected = protected.route_layer(from_fn_with_state(gate, require_auth));

    let mut public = Router::new();
    for page in PUBLIC_PAGES {
        let file = public_dir.join(page.file);
        public = public.route(page.path, get(move |req: Request| serve_file(file.clone(), req)));
    }

    let assets = public_dir.to_path_buf();
    public
        .merge(protected)
        .fallback(move |req: Request| serve_asset(assets.clone(), req))
}

async fn serve_asset(public_dir: PathBuf, req: Request) -> Response {
    if is_protected_file(req.uri().path()) {
        tracing::warn!(path = %req.uri().path(), "Direct request for a protected page file");
        return StatusCode::NOT_FOUND.into_response();
    }

    match ServeDir::new(public_dir).oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Whether a request path would resolve to one of the protected page files.
///
/// Decodes and normalizes the path the way the static file service does.
/// Comparison ignores ASCII case for case-insensitive filesystems. A path
/// that does not decode is treated as protected.
fn is_protected_file(uri_path: &str) -> bool {
    let Ok(decoded) = urlencoding::decode(uri_path) else {
        return true;
    };

    let relative = decoded
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/");

    PROTECTED_PAGES
        .iter()
        .any(|page| page.file.eq_ignore_ascii_case(&relative))
}

async fn serve_file(path: PathBuf, req: Request) -> Response {
    match ServeFile::new(path).oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
