use thiserror::Error;

/// Error for ServiceName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceNameError {
    #[error("Service name must not be blank")]
    Blank,

    #[error("Service name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for ServiceCategory parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Unknown category '{0}' (expected one of: motor, bor, sipil, izin)")]
    Unknown(String),
}

/// Error for Price validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Price must be a finite, non-negative amount, got {0}")]
    OutOfRange(f64),
}

/// Error for DurationDays validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("Duration must be at least 1 day, got {0}")]
    TooShort(i64),

    #[error("Duration too long: maximum {max} days, got {actual}")]
    TooLong { max: i64, actual: i64 },
}

/// Top-level error for catalog operations
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid service name: {0}")]
    InvalidName(#[from] ServiceNameError),

    #[error("Invalid category: {0}")]
    InvalidCategory(#[from] CategoryError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Invalid duration: {0}")]
    InvalidDuration(#[from] DurationError),

    // Domain-level errors
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Service not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
