//! Error types for entity operations.
//!
//! [`EntityError`] adds the response-level failures of the entity layer on
//! top of the transport's [`HttpError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use fastspring_api::EntityError;
//! use fastspring_api::entity::resources;
//!
//! match client.entities(resources::PRODUCTS).find("unknown").await {
//!     Ok(Some(product)) => println!("Found: {:?}", product.get("display")),
//!     Ok(None) => println!("Not in the response"),
//!     Err(e) if e.is_not_found() => println!("FastSpring has no such product"),
//!     Err(EntityError::ApiError { errors, .. }) => {
//!         for error in errors {
//!             println!("Rejected: {error}");
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for entity operations.
#[derive(Debug, Error)]
pub enum EntityError {
    /// The response did not carry a non-empty record list.
    #[error("FastSpring's API returned an empty response for the \"{endpoint}\" endpoint.")]
    EmptyResponse {
        /// The clean endpoint name.
        endpoint: String,
    },

    /// One or more records in the response carry `"result": "error"`.
    #[error("The following errors occurred in the call to FastSpring's API: {}", .errors.join("\n"))]
    ApiError {
        /// The clean endpoint name.
        endpoint: String,
        /// The serialized form of every offending record.
        errors: Vec<String>,
    },

    /// The operation is not supported.
    #[error("The {operation}() method has not yet been implemented.")]
    NotImplemented {
        /// The name of the unsupported operation.
        operation: &'static str,
    },

    /// The record has no id, so it cannot be addressed remotely.
    #[error("The record has no usable \"{id_field}\" field and cannot be addressed on the \"{endpoint}\" endpoint.")]
    MissingId {
        /// The clean endpoint name.
        endpoint: String,
        /// The id field that was looked up.
        id_field: String,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl EntityError {
    /// Returns `true` if FastSpring reported the requested entity as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, NotFoundError};

    #[test]
    fn test_api_error_aggregates_every_record() {
        let error = EntityError::ApiError {
            endpoint: "products".to_string(),
            errors: vec![
                r#"{"product":"a","result":"error"}"#.to_string(),
                r#"{"product":"b","result":"error"}"#.to_string(),
            ],
        };
        let message = error.to_string();

        assert!(message.starts_with("The following errors occurred in the call to FastSpring's API:"));
        assert!(message.contains(r#"{"product":"a","result":"error"}"#));
        assert!(message.contains(r#"{"product":"b","result":"error"}"#));
    }

    #[test]
    fn test_not_implemented_message() {
        let error = EntityError::NotImplemented { operation: "save" };
        assert_eq!(error.to_string(), "The save() method has not yet been implemented.");
    }

    #[test]
    fn test_empty_response_names_endpoint() {
        let error = EntityError::EmptyResponse {
            endpoint: "orders".to_string(),
        };
        assert!(error.to_string().contains("\"orders\""));
    }

    #[test]
    fn test_is_not_found_looks_through_http_error() {
        let error = EntityError::from(HttpError::NotFound(NotFoundError {
            code: 400,
            method: HttpMethod::Get,
            endpoint: "products/x".to_string(),
            body: "{}".to_string(),
        }));
        assert!(error.is_not_found());

        assert!(!EntityError::from(HttpError::NotInitialized).is_not_found());
        assert!(!EntityError::NotImplemented { operation: "save" }.is_not_found());
    }
}
