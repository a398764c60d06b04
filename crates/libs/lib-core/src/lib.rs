//! # Core Library
//!
//! Configuration, the application error type, and key-value persistence.

pub mod config;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use store::{FileStore, KeyValueStore, MemoryStore};
