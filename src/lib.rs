//! # FastSpring API Rust Client
//!
//! A Rust client for the FastSpring REST API, providing type-safe
//! configuration, authenticated HTTP transport, and a uniform set of entity
//! operations shared by every FastSpring resource collection.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`FastSpringConfig`] and [`FastSpringConfigBuilder`]
//! - Validated newtypes for API credentials and the API host
//! - An async HTTP client with HTTP Basic authentication and payload normalization
//! - Recognition of FastSpring's "Not found" answers
//! - Generic `find`, `find_many`, `find_by`, `find_all` and `delete` operations
//!   with automatic pagination
//!
//! ## Quick Start
//!
//! ```rust
//! use fastspring_api::{ApiPassword, ApiUsername, FastSpringConfig, HttpClient};
//!
//! let config = FastSpringConfig::builder()
//!     .credentials(
//!         ApiUsername::new("your-api-username").unwrap(),
//!         ApiPassword::new("your-api-password").unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config).unwrap();
//! assert!(client.is_initialized());
//! ```
//!
//! ## Late Initialization
//!
//! A client can be created before its credentials are known and initialized
//! exactly once later:
//!
//! ```rust
//! use fastspring_api::{ConfigError, FastSpringConfig, HttpClient};
//!
//! let client = HttpClient::new(&FastSpringConfig::default()).unwrap();
//! client.initialize("your-api-username", "your-api-password").unwrap();
//!
//! assert_eq!(
//!     client.initialize("someone-else", "secret"),
//!     Err(ConfigError::AlreadyInitialized)
//! );
//! ```
//!
//! ## Working with Entities
//!
//! ```rust,ignore
//! use fastspring_api::entity::resources;
//!
//! let products = client.entities(resources::PRODUCTS);
//!
//! // One record, or None
//! let product = products.find("my-product").await?;
//!
//! // Every record matching the filters, across all pages
//! let active = products.find_by([("status", "active")]).await?;
//!
//! // Every record of the collection
//! let everything = products.find_all().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: credentials live in the [`HttpClient`] handle
//! - **Fail fast**: invalid configuration and requests are rejected before
//!   any network activity
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: built on `tokio` and `reqwest`; requests of one
//!   operation are issued sequentially
//! - **Observable**: requests, responses and pagination are reported through
//!   `tracing`

pub mod auth;
pub mod clients;
pub mod config;
pub mod entity;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    ApiPassword, ApiUsername, FastSpringConfig, FastSpringConfigBuilder, HostUrl,
    PaginationPolicy,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, NotFoundError, Payload,
};

// Re-export entity types
pub use entity::{Endpoint, Entities, EntityError, Record};
