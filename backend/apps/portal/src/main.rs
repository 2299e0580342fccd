//! Portal Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors go through
//! `auth::AuthError` and `kernel::error::AppError`.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use auth::{AuthAppState, PgUserRepository};
use platform::token::{DEFAULT_TOKEN_TTL, SigningSecret, TokenService};
use portal::{AppOptions, Settings, build_app};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DATABASE_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(environment = %settings.environment, "Settings loaded");

    if settings.token_secret.is_weak() {
        tracing::warn!(
            min_len = SigningSecret::RECOMMENDED_MIN_LEN,
            "AUTH_TOKEN_SECRET is shorter than recommended"
        );
    }

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .acquire_timeout(DATABASE_ACQUIRE_TIMEOUT)
        .connect(&settings.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let tokens = Arc::new(TokenService::new(&settings.token_secret, DEFAULT_TOKEN_TTL));
    let state = AuthAppState::new(
        PgUserRepository::new(pool),
        tokens,
        settings.auth_config(),
    );

    if !settings.public_dir.is_dir() {
        tracing::warn!(
            public_dir = %settings.public_dir.display(),
            "Public directory not found, pages will answer 404"
        );
    }

    let app = build_app(state, &AppOptions::from(&settings));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
