use chrono::Duration;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::session::SessionClaims;
use crate::session::SessionCodec;
use crate::session::TokenError;

/// Authentication coordinator combining password verification and session
/// token issuance.
///
/// Built once at startup and shared read-only between requests; the signing
/// secret never changes for the lifetime of the process.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    session_codec: SessionCodec,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed session token
    pub session_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Fixed lifetime of a session.
    pub const DEFAULT_SESSION_HOURS: i64 = 24;

    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `session_secret` - Secret key for session token signing
    /// * `session_ttl` - Lifetime of every issued session
    pub fn new(session_secret: &[u8], session_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            session_codec: SessionCodec::new(session_secret, session_ttl),
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_codec.ttl()
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash, failing closed.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a session for `identity`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or the hash is unusable)
    /// * `Token` - Token issuance failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        identity: &T,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let session_token = self.session_codec.issue(identity)?;

        Ok(AuthenticationResult { session_token })
    }

    /// Validate a session token and decode its claims.
    ///
    /// # Errors
    /// * `Invalid` - Signature, structure or expiry check failed
    pub fn validate_session<T: DeserializeOwned>(
        &self,
        token: &str,
    ) -> Result<SessionClaims<T>, TokenError> {
        self.session_codec.validate(token)
    }
}
