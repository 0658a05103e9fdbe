//! Error handling module for the statistics service.
//!
//! Errors never reach HTTP callers: the aggregation cycle logs and moves on,
//! and the query endpoint degrades to an empty result. Startup failures bubble
//! up to `main` and terminate the process.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed configuration value
    Config(String),
    /// Store error
    Database(String),
    /// Transport failure or non-success status from the content API
    Upstream(String),
    /// Content API payload did not match the expected shape
    Decode(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => codes::CONFIG_ERROR,
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::Upstream(_) => codes::UPSTREAM_ERROR,
            AppError::Decode(_) => codes::DECODE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Config(msg)
            | AppError::Database(msg)
            | AppError::Upstream(msg)
            | AppError::Decode(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::debug!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::debug!("Upstream decode error: {:?}", err);
            AppError::Decode(format!("Decode error: {}", err))
        } else {
            tracing::debug!("Upstream request error: {:?}", err);
            AppError::Upstream(format!("Upstream error: {}", err))
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("JSON error: {:?}", err);
        AppError::Decode(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = AppError::Upstream("connection refused".to_string());
        assert_eq!(err.to_string(), "UPSTREAM_ERROR: connection refused");
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err: AppError = serde_json::from_str::<Vec<i64>>("{").unwrap_err().into();
        assert_eq!(err.error_code(), codes::DECODE_ERROR);
    }
}
