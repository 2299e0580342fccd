//! End-to-end flow against the composed router: register, log in, then
//! visit gated and public pages. Uses the in-memory store and a temporary
//! public directory, so no database is needed.

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use auth::{AuthAppState, AuthConfig, MemoryUserRepository};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use platform::token::{DEFAULT_TOKEN_TTL, SigningSecret, TokenService};
use portal::{AppOptions, build_app};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    // Keeps the public directory alive for the test's duration
    _public: TempDir,
}

fn write_page(root: &TempDir, relative: &str, body: &str) {
    let path = root.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

fn test_app() -> TestApp {
    let public = tempfile::tempdir().unwrap();
    write_page(&public, "Welcome1.HTML", "<h1>welcome</h1>");
    write_page(&public, "Chef Data/login.html", "<h1>login</h1>");
    write_page(&public, "Chef Data/registration.html", "<h1>register</h1>");
    write_page(&public, "Chef Data/chefdetails.html", "<h1>chef dashboard</h1>");
    write_page(&public, "User Data/usermenu.html", "<h1>user menu</h1>");
    write_page(&public, "User Data/In-Hotel.html", "<h1>in hotel</h1>");
    write_page(&public, "User Data/uservegmenu.html", "<h1>veg menu</h1>");
    write_page(&public, "css/site.css", "body { margin: 0; }");

    let secret = SigningSecret::new("flow-test-secret-that-is-long-enough").unwrap();
    let tokens = Arc::new(TokenService::new(&secret, DEFAULT_TOKEN_TTL));
    let config = AuthConfig {
        bcrypt_cost: 4,
        ..AuthConfig::development()
    };
    let state = AuthAppState::new(MemoryUserRepository::new(), tokens, config);

    let options = AppOptions {
        public_dir: public.path().to_path_buf(),
        request_timeout: Duration::from_secs(10),
        frontend_origins: Vec::new(),
    };

    TestApp {
        router: build_app(state, &options),
        _public: public,
    }
}

impl TestApp {
    async fn send(&self, req: Request<Body>) -> Response {
        self.router.clone().oneshot(req).await.unwrap()
    }

    async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut req = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.send(req.body(Body::empty()).unwrap()).await
    }

    async fn register(&self, email: &str, password: &str) -> Response {
        self.post_json(
            "/register",
            serde_json::json!({
                "email": email,
                "password": password,
                "firstName": "A",
                "lastName": "B",
            }),
        )
        .await
    }

    async fn login(&self, email: &str, password: &str) -> Response {
        self.post_json(
            "/login",
            serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `name=value` pair from a Set-Cookie header, ready to send back
fn cookie_pair(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set a cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().trim().to_string()
}

#[tokio::test]
async fn test_register_login_and_visit_dashboard() {
    let app = test_app();

    let response = app.register("a@x.com", "pw1").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_text(response).await, "User registered successfully");

    let response = app.login("a@x.com", "pw1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=3600"));
    assert!(set_cookie.contains("SameSite=Lax"));
    // Development mode
    assert!(!set_cookie.contains("Secure"));

    let cookie = cookie_pair(&response);
    let token = cookie.trim_start_matches("auth_token=").to_string();
    let body = body_text(response).await;
    assert_eq!(body, r#"{"message":"Logged in successfully"}"#);
    assert!(!body.contains(&token));

    let response = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<h1>chef dashboard</h1>");

    let response = app.get("/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "Access denied: No token provided");

    let response = app.get("/dashboard", Some("auth_token=garbage")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Invalid token");
}

#[tokio::test]
async fn test_every_protected_page_is_gated() {
    let app = test_app();
    app.register("a@x.com", "pw1").await;
    let cookie = cookie_pair(&app.login("a@x.com", "pw1").await);

    for (path, expected) in [
        ("/dashboard", "<h1>chef dashboard</h1>"),
        ("/userDashboard", "<h1>user menu</h1>"),
        ("/user-in-hotel", "<h1>in hotel</h1>"),
        ("/vegMenu", "<h1>veg menu</h1>"),
    ] {
        let response = app.get(path, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");

        let response = app.get(path, Some("auth_token=")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");

        let response = app.get(path, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(body_text(response).await, expected);
    }
}

#[tokio::test]
async fn test_public_pages_share_paths_with_auth_endpoints() {
    let app = test_app();

    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<h1>welcome</h1>");

    let response = app.get("/login", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<h1>login</h1>");

    let response = app.get("/register", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<h1>register</h1>");

    let response = app.get("/css/site.css", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "body { margin: 0; }");

    let response = app.get("/missing.html", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_protected_page_files_are_not_served_directly() {
    let app = test_app();
    app.register("a@x.com", "pw1").await;
    let cookie = cookie_pair(&app.login("a@x.com", "pw1").await);

    for uri in [
        "/Chef%20Data/chefdetails.html",
        "/User%20Data/usermenu.html",
        "/User%20Data/In-Hotel.html",
        "/User%20Data/./uservegmenu.html",
    ] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");

        // The gated route is the only way in, even with a valid token
        let response = app.get(uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    // Public page files stay reachable by their static path
    let response = app.get("/Chef%20Data/login.html", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<h1>login</h1>");
}

#[tokio::test]
async fn test_duplicate_registration_in_any_case() {
    let app = test_app();
    assert_eq!(app.register("a@x.com", "pw1").await.status(), StatusCode::CREATED);

    let response = app.register("A@X.COM", "pw2").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Email already registered");

    // The first password still works; the second was never stored
    assert_eq!(app.login("a@x.com", "pw1").await.status(), StatusCode::OK);
    assert_eq!(
        app.login("a@x.com", "pw2").await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_login_failures_set_no_cookie() {
    let app = test_app();
    app.register("a@x.com", "pw1").await;

    let response = app.login("nobody@x.com", "pw1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_text(response).await, "User not found");

    let response = app.login("a@x.com", "wrong").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_text(response).await, "Invalid password");
}

#[tokio::test]
async fn test_empty_password_round_trip() {
    let app = test_app();
    assert_eq!(app.register("e@x.com", "").await.status(), StatusCode::CREATED);
    assert_eq!(app.login("e@x.com", "").await.status(), StatusCode::OK);
    assert_eq!(
        app.login("e@x.com", "x").await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_token_from_other_secret_is_invalid() {
    let app = test_app();
    let other_secret = SigningSecret::new("some-other-deployment-secret").unwrap();
    let other = TokenService::new(&other_secret, DEFAULT_TOKEN_TTL);
    let forged = other
        .issue(&serde_json::json!({ "userId": "6f1c1a4e-3f57-4d0c-9a7e-2a1b5c9d0e11" }))
        .unwrap()
        .token;

    let response = app
        .get("/vegMenu", Some(&format!("auth_token={forged}")))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
