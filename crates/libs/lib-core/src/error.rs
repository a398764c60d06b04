//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used by the
//! configuration layer, the persistence layer and the frontend. Libraries with a
//! narrower concern (RPC, wallet session) keep their own `thiserror` enums and
//! convert into `AppError` at the application boundary.
//!
//! ## Error Categories
//!
//! 1. **Setup Errors** - fatal to the caller, not recoverable locally
//!    - [`Config`](AppError::Config) - missing/invalid settings, missing wallet context
//!
//! 2. **External Errors** - a collaborator failed
//!    - [`Storage`](AppError::Storage) - key-value persistence
//!    - [`Rpc`](AppError::Rpc) - Solana JSON-RPC transport or protocol
//!    - [`Wallet`](AppError::Wallet) - wallet handle or session
//!
//! 3. **Input Errors**
//!    - [`InvalidInput`](AppError::InvalidInput)
//!    - [`Decoding`](AppError::Decoding)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_endpoint(url: &str) -> Result<String> {
//!     if !url.starts_with("http") {
//!         return Err(AppError::InvalidInput(format!("not an http(s) url: {url}")));
//!     }
//!     Ok(url.to_string())
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
///
/// Each variant carries a descriptive `String`; `thiserror` provides `Display`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error: bad environment, or a component used outside its scope.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key-value persistence failure (file store, browser localStorage).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Solana RPC transport or protocol error.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Wallet handle or session error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Data decoding error (JSON, base58).
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get a user-friendly error message.
    ///
    /// Storage and internal failures are reported generically.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(msg) | AppError::InvalidInput(msg) | AppError::Wallet(msg) => msg.clone(),
            AppError::Rpc(_) => "Solana RPC node unavailable".to_string(),
            AppError::Decoding(_) => "Unexpected response format".to_string(),
            AppError::Storage(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    /// Short variant name, used as an error code in logs and JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::Storage(_) => "Storage",
            AppError::Rpc(_) => "Rpc",
            AppError::Wallet(_) => "Wallet",
            AppError::Decoding(_) => "Decoding",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
