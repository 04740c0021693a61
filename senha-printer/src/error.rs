//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Network connection error
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for the print relay
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid printer configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The relay accepted the connection but rejected the job
    #[error("Relay rejected job: {0}")]
    Rejected(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
