use thiserror::Error;

/// Simplified error enum for common use cases
#[derive(Error, Debug)]
pub enum ParokiError {
    /// Network communication errors
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server configuration errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Feature gate lookup errors
    #[error("Feature gate error: {0}")]
    GateError(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Paroki operations
pub type Result<T> = std::result::Result<T, ParokiError>;

/// Async logging function for errors
pub async fn log_error(context: &str, error: &ParokiError) {
    tracing::error!(
        context = context,
        error = %error,
        "Paroki error occurred"
    );
}
