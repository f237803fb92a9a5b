use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::SessionClaims;
use super::errors::TokenError;

/// Issues and validates signed, time-bounded session tokens.
///
/// Tokens are HS256 JWTs whose payload is a [`SessionClaims`] wrapping the
/// caller's identity type. Nothing is stored server-side: a token is valid as
/// long as its signature verifies against the secret and its `exp` has not
/// passed.
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl SessionCodec {
    /// Create a codec signing with `secret`.
    ///
    /// # Arguments
    /// * `secret` - Process-wide signing secret (at least 32 bytes for HS256)
    /// * `ttl` - Fixed lifetime of every issued token
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `identity`, expiring `ttl` from now.
    pub fn issue<T: Serialize>(&self, identity: &T) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - The identity could not be serialized or signed
    pub fn issue_at<T: Serialize>(
        &self,
        identity: &T,
        issued_at: i64,
    ) -> Result<String, TokenError> {
        let claims = SessionClaims::new(identity, issued_at, self.ttl.num_seconds());

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token against the current time.
    pub fn validate<T: DeserializeOwned>(
        &self,
        token: &str,
    ) -> Result<SessionClaims<T>, TokenError> {
        self.validate_at(token, Utc::now().timestamp())
    }

    /// Validate a token as if the current time were `now`.
    ///
    /// Signature, structure (including the identity shape) and expiry are all
    /// checked; every failure is reported as `TokenError::Invalid`.
    pub fn validate_at<T: DeserializeOwned>(
        &self,
        token: &str,
        now: i64,
    ) -> Result<SessionClaims<T>, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against `now`, with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        let claims = decode::<SessionClaims<T>>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Session token rejected");
                TokenError::Invalid
            })?
            .claims;

        if claims.is_expired(now) {
            tracing::debug!(exp = claims.exp, now, "Session token expired");
            return Err(TokenError::Invalid);
        }

        Ok(claims)
    }
}
