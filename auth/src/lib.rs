//! Authentication utilities library
//!
//! Provides the authentication building blocks for the catalog backend:
//! - Password hashing (Argon2id)
//! - Signed, time-bounded session tokens (HS256 JWT)
//! - Authentication coordination
//!
//! Nothing here knows about HTTP or storage. The service decides which
//! identity fields go into a session and how the token travels.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{SessionClaims, SessionCodec};
//! use chrono::Duration;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Identity {
//!     username: String,
//! }
//!
//! let codec = SessionCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let token = codec.issue(&Identity { username: "alice".to_string() }).unwrap();
//! let claims: SessionClaims<Identity> = codec.validate(&token).unwrap();
//! assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, SessionClaims};
//! use chrono::Duration;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Identity {
//!     id: i64,
//!     username: String,
//! }
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a session
//! let identity = Identity { id: 1, username: "alice".to_string() };
//! let result = auth.authenticate("password123", &hash, &identity).unwrap();
//!
//! // Every later request: validate the session
//! let claims: SessionClaims<Identity> = auth.validate_session(&result.session_token).unwrap();
//! assert_eq!(claims.identity.username, "alice");
//! ```

pub mod authenticator;
pub mod password;
pub mod session;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::SessionClaims;
pub use session::SessionCodec;
pub use session::TokenError;
