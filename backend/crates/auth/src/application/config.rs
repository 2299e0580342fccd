//! Application Configuration
//!
//! Configuration for the Auth application layer. The signing secret is not
//! held here; it lives inside the injected `TokenService`.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::password::DEFAULT_COST;
use platform::token::DEFAULT_TOKEN_TTL;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub token_cookie_name: String,
    /// Token lifetime, also the cookie Max-Age
    pub token_ttl: Duration,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// bcrypt work factor for new hashes
    pub bcrypt_cost: u32,
    /// Log raw token values at debug level (development only)
    pub log_token_values: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_cookie_name: "auth_token".to_string(),
            token_ttl: DEFAULT_TOKEN_TTL,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            bcrypt_cost: DEFAULT_COST,
            log_token_values: false,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie, token logging on)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            log_token_values: true,
            ..Default::default()
        }
    }

    /// Attributes of the `Set-Cookie` header sent on login
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.token_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl.as_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_cookie() {
        let cookie = AuthConfig::default().cookie().build_set_cookie("t");
        assert!(cookie.starts_with("auth_token=t"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_development_cookie_is_not_secure() {
        let config = AuthConfig::development();
        assert!(config.log_token_values);
        assert!(!config.cookie().build_set_cookie("t").contains("Secure"));
    }
}
