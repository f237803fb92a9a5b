use thiserror::Error;

/// Error type for password operations.
///
/// Verification never produces an error: a stored hash that cannot be parsed
/// simply does not match.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
