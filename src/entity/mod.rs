//! Generic entity operations for FastSpring resource collections.
//!
//! This module layers a uniform vocabulary over the transport in
//! [`crate::clients`]: every collection is described by an [`Endpoint`] and
//! served by the same [`Entities`] operations.
//!
//! # Overview
//!
//! - [`Endpoint`]: a collection name plus the field identifying its records
//! - [`Entities`]: `find`, `find_many`, `find_by`, `find_all`, `delete`, `save`
//! - [`Record`]: one entity as a map of JSON values
//! - [`EntityError`]: failures of entity operations
//! - [`resources`]: descriptors for the known FastSpring collections
//!
//! # Responses
//!
//! Every read validates its response before building records:
//!
//! - a body without a non-empty record list is an [`EntityError::EmptyResponse`]
//! - records with `"result": "error"` are collected into an
//!   [`EntityError::ApiError`]
//!
//! Records are keyed by id. The metadata fields `action`, `result` and
//! `error` are removed, and records without a usable id are dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastspring_api::{FastSpringConfig, HttpClient};
//! use fastspring_api::entity::resources;
//!
//! let client = HttpClient::new(&FastSpringConfig::default())?;
//! client.initialize("api-user", "api-password")?;
//!
//! let products = client.entities(resources::PRODUCTS);
//! let all = products.find_all().await?;
//! let some = products.find_many(all.keys().take(2).cloned()).await?;
//! ```

mod endpoint;
mod entities;
mod errors;
mod record;
pub mod resources;
mod response;

pub use endpoint::Endpoint;
pub use entities::Entities;
pub use errors::EntityError;
pub use record::Record;
