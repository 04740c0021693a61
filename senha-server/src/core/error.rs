//! Unified error handling
//!
//! Error kinds follow the issuing workflow's failure surface:
//!
//! | Kind | Meaning |
//! |------|---------|
//! | Configuration | missing required column, store id or credentials |
//! | Validation | malformed phone, empty name, empty area selection |
//! | Persistence | store read/write failure, unparseable append ack |
//!
//! Quota violations are deliberately *not* an error kind: the registration
//! write has already happened when a quota is detected, so they travel as
//! data in the submission outcome.

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or inconsistent external configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rejected attendee input; raised before any store mutation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Row-store read/write failure
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper Constructors ==========

impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Persistence(e.to_string())
    }
}
