//! Signed Session Tokens
//!
//! Stateless, self-contained tokens: a caller-defined payload plus `iat` and
//! `exp` claims, serialized as a compact JWT and signed with HMAC-SHA256.
//!
//! A token is valid iff its signature verifies against the shared secret and
//! the current time is strictly before `exp`. Nothing is stored server-side,
//! so there is no revocation.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Lifetime of a session token.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

// ============================================================================
// Signing Secret
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error("Token signing secret must not be empty")]
    Empty,
}

/// Shared HMAC key. Zeroized on drop, never printed.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Secrets shorter than this are accepted but should be flagged.
    pub const RECOMMENDED_MIN_LEN: usize = 32;

    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SecretError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self(bytes))
    }

    pub fn is_weak(&self) -> bool {
        self.0.len() < Self::RECOMMENDED_MIN_LEN
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningSecret").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Why a token was refused (or could not be produced)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a decodable HS256 token, or required claims are missing
    #[error("token is malformed")]
    Malformed,

    #[error("token signature does not match")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    #[error("token could not be signed: {0}")]
    Signing(String),
}

impl TokenError {
    fn from_decode(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::InvalidSignature => TokenError::BadSignature,
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    }

    /// Short, log-friendly reason code
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed",
            TokenError::BadSignature => "bad_signature",
            TokenError::Expired => "expired",
            TokenError::Signing(_) => "signing_failed",
        }
    }
}

// ============================================================================
// Claims
// ============================================================================

#[derive(Serialize, Deserialize)]
struct Claims<P> {
    #[serde(flatten)]
    payload: P,
    iat: i64,
    exp: i64,
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Payload recovered from a token that passed every check
#[derive(Debug, Clone)]
pub struct VerifiedToken<P> {
    pub payload: P,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Token Service
// ============================================================================

/// Issues and verifies tokens with one secret and one TTL.
///
/// Cheap to share behind an `Arc`; holds no mutable state.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &SigningSecret, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `verify_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue<P: Serialize>(&self, payload: &P) -> Result<IssuedToken, TokenError> {
        self.issue_at(payload, Utc::now())
    }

    /// Sign `payload` as if the current time were `now`.
    pub fn issue_at<P: Serialize>(
        &self,
        payload: &P,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| TokenError::Signing(format!("invalid ttl: {e}")))?;
        let expires_at = now + ttl;

        let claims = Claims {
            payload,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            token,
            issued_at: now,
            expires_at,
        })
    }

    pub fn verify<P: DeserializeOwned>(&self, token: &str) -> Result<VerifiedToken<P>, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify signature and structure, then require `now < exp`.
    pub fn verify_at<P: DeserializeOwned>(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<VerifiedToken<P>, TokenError> {
        let data = jsonwebtoken::decode::<Claims<P>>(token, &self.decoding, &self.validation)
            .map_err(TokenError::from_decode)?;
        let claims = data.claims;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or(TokenError::Malformed)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::Malformed)?;

        Ok(VerifiedToken {
            payload: claims.payload,
            issued_at,
            expires_at,
        })
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &"HS256")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
