//! Startup Settings
//!
//! Everything the binary reads from the environment, parsed once in
//! [`Settings::from_env`]. Any missing or malformed value stops startup.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use auth::AuthConfig;
use platform::token::{SecretError, SigningSecret};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("AUTH_TOKEN_SECRET is unusable: {0}")]
    Secret(#[from] SecretError),
}

/// Deployment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

pub struct Settings {
    pub database_url: String,
    pub token_secret: SigningSecret,
    pub port: u16,
    pub environment: Environment,
    pub public_dir: PathBuf,
    pub request_timeout: Duration,
    pub database_max_connections: u32,
    /// Extra origins allowed to call the API with credentials
    pub frontend_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(SettingsError::Missing("DATABASE_URL"))?;
        let token_secret = get("AUTH_TOKEN_SECRET")
            .ok_or(SettingsError::Missing("AUTH_TOKEN_SECRET"))
            .and_then(|secret| Ok(SigningSecret::new(secret)?))?;

        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let environment = parse_or(get("APP_ENV"), "APP_ENV", Environment::default())?;
        let request_timeout_secs = parse_or(
            get("REQUEST_TIMEOUT_SECS"),
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        let database_max_connections = parse_or(
            get("DATABASE_MAX_CONNECTIONS"),
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;

        let public_dir = get("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));

        let frontend_origins = get("FRONTEND_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            token_secret,
            port,
            environment,
            public_dir,
            request_timeout: Duration::from_secs(request_timeout_secs),
            database_max_connections,
            frontend_origins,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn auth_config(&self) -> AuthConfig {
        match self.environment {
            Environment::Production => AuthConfig::default(),
            Environment::Development => AuthConfig::development(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &"[REDACTED]")
            .field("token_secret", &self.token_secret)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("public_dir", &self.public_dir)
            .field("request_timeout", &self.request_timeout)
            .field("database_max_connections", &self.database_max_connections)
            .field("frontend_origins", &self.frontend_origins)
            .finish()
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, SettingsError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| SettingsError::Invalid { name, value: raw }),
    }
}
