//! Configuration error types for the FastSpring API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! settings are rejected before any request is attempted.
//!
//! # Example
//!
//! ```rust
//! use fastspring_api::{ApiUsername, ConfigError};
//!
//! let result = ApiUsername::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API username cannot be empty.
    #[error("API username cannot be empty. Please provide your FastSpring API username.")]
    EmptyUsername,

    /// API password cannot be empty.
    #[error("API password cannot be empty. Please provide your FastSpring API password.")]
    EmptyPassword,

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.fastspring.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The request timeout must be greater than zero.
    #[error("Invalid request timeout: the timeout must be greater than zero.")]
    InvalidTimeout,

    /// The listing page size must be greater than zero.
    #[error("Invalid page size: the page size must be greater than zero.")]
    InvalidPageSize,

    /// Credentials were already set on this client.
    #[error("The client has already been initialized with API credentials. Credentials can only be set once.")]
    AlreadyInitialized,
}
