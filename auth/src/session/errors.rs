use thiserror::Error;

/// Error type for session token operations.
///
/// Validation failures collapse into the single `Invalid` variant so that a
/// caller cannot learn whether the signature, the expiry or the structure
/// was at fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to issue session token: {0}")]
    EncodingFailed(String),

    #[error("Invalid or expired session token")]
    Invalid,
}
