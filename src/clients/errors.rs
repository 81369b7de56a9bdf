//! HTTP-level error types for the FastSpring API client.
//!
//! # Error Handling
//!
//! - [`InvalidHttpRequestError`]: the request was rejected before sending
//! - [`HttpResponseError`]: the API answered with a non-200 status
//! - [`NotFoundError`]: a non-200 answer recognized as a missing entity
//! - [`HttpError`]: unified error type for every transport failure
//!
//! # Example
//!
//! ```rust,ignore
//! use fastspring_api::clients::HttpError;
//!
//! match client.get("products/unknown", None).await {
//!     Ok(body) => println!("Body: {body}"),
//!     Err(HttpError::NotFound(e)) => println!("Missing: {e}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_request::HttpMethod;

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The HTTP method is not one of GET, POST, PUT or DELETE.
    #[error("Invalid method \"{method}\" provided for request.")]
    InvalidMethod {
        /// The method that was provided.
        method: String,
    },

    /// A text payload was not valid JSON.
    #[error("Invalid body provided for request: a list, a mapping or a JSON string is expected ({reason}).")]
    InvalidPayload {
        /// The JSON parser's description of the problem.
        reason: String,
    },
}

/// Error returned when the API answers with a status other than 200.
///
/// The message carries the status code, method, endpoint and the serialized
/// response body so the failure can be diagnosed without repeating the call.
///
/// # Example
///
/// ```rust
/// use fastspring_api::clients::{HttpMethod, HttpResponseError};
///
/// let error = HttpResponseError {
///     code: 401,
///     method: HttpMethod::Get,
///     endpoint: "products".to_string(),
///     body: r#"{"error":"Unauthorized"}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("Error 401"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error {code} reported by FastSpring's API for your {method} request to the \"{endpoint}\" endpoint. Response: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The method of the failed request.
    pub method: HttpMethod,
    /// The endpoint path that was requested.
    pub endpoint: String,
    /// The serialized response body.
    pub body: String,
}

/// Error returned when a failed response reports a missing entity.
///
/// FastSpring answers requests for unknown entities with HTTP 400 and a
/// generic error body, so this is recognized from the body content rather
/// than the status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("No entity found for your {method} request to the \"{endpoint}\" endpoint (status {code}). Response: {body}")]
pub struct NotFoundError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The method of the failed request.
    pub method: HttpMethod,
    /// The endpoint path that was requested.
    pub endpoint: String,
    /// The serialized response body.
    pub body: String,
}

/// Unified error type for all transport errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// No credentials have been set on the client.
    #[error("The client has no API credentials. Call HttpClient::initialize() or configure credentials before making requests.")]
    NotInitialized,

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The API answered with a non-200 status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The API reported that the requested entity does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Network or connection error, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns `true` if this error reports a missing entity.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns the HTTP status code, if the API answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::NotFound(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_includes_diagnostics() {
        let error = HttpResponseError {
            code: 500,
            method: HttpMethod::Delete,
            endpoint: "subscriptions".to_string(),
            body: r#"{"error":"boom"}"#.to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("Error 500"));
        assert!(message.contains("DELETE"));
        assert!(message.contains("\"subscriptions\""));
        assert!(message.contains(r#"{"error":"boom"}"#));
    }

    #[test]
    fn test_invalid_method_message() {
        let error = InvalidHttpRequestError::InvalidMethod {
            method: "PATCH".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid method \"PATCH\" provided for request.");
    }

    #[test]
    fn test_invalid_payload_message() {
        let error = InvalidHttpRequestError::InvalidPayload {
            reason: "expected value at line 1 column 1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Invalid body"));
        assert!(message.contains("line 1 column 1"));
    }

    #[test]
    fn test_not_found_predicate_and_status() {
        let error = HttpError::NotFound(NotFoundError {
            code: 400,
            method: HttpMethod::Get,
            endpoint: "products/missing".to_string(),
            body: "{}".to_string(),
        });
        assert!(error.is_not_found());
        assert_eq!(error.status(), Some(400));

        assert!(!HttpError::NotInitialized.is_not_found());
        assert_eq!(HttpError::NotInitialized.status(), None);
    }

    #[test]
    fn test_not_initialized_message_is_actionable() {
        let message = HttpError::NotInitialized.to_string();
        assert!(message.contains("initialize()"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &HttpError::NotInitialized;
        let _: &dyn std::error::Error = &InvalidHttpRequestError::InvalidMethod {
            method: "x".to_string(),
        };
    }
}
