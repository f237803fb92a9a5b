use serde::Deserialize;
use serde::Serialize;

/// Signed session payload.
///
/// The identity fields are flattened next to the registered `iat` and `exp`
/// claims (Unix timestamps, seconds).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims<T> {
    #[serde(flatten)]
    pub identity: T,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,
}

impl<T> SessionClaims<T> {
    pub fn new(identity: T, issued_at: i64, ttl_seconds: i64) -> Self {
        Self {
            identity,
            iat: issued_at,
            exp: issued_at + ttl_seconds,
        }
    }

    /// A session is still valid at its exact expiry second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp > self.exp
    }

    pub fn into_identity(self) -> T {
        self.identity
    }
}
