//! HTTP client types for FastSpring API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the FastSpring REST API. It handles request normalization,
//! response decoding, and the classification of failed responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A normalized request (path, query string and body)
//! - [`Payload`]: The caller-supplied data of a request
//! - [`HttpResponse`]: A decoded response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: Unified error type for transport failures
//!
//! # Payload Placement
//!
//! | Method       | List payload         | Mapping payload   | Other        |
//! |--------------|----------------------|-------------------|--------------|
//! | GET / DELETE | `/{id1},{id2},...`   | `?key=value&...`  | ignored      |
//! | POST / PUT   | JSON body            | JSON body         | JSON body    |
//!
//! Identifiers and query values are percent-encoded. GET and DELETE
//! requests never carry a body.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastspring_api::{FastSpringConfig, HttpClient};
//! use fastspring_api::clients::Payload;
//!
//! let client = HttpClient::new(&FastSpringConfig::default())?;
//! client.initialize("api-user", "api-password")?;
//!
//! // GET https://api.fastspring.com/products/a,b
//! let body = client.get("products", Some(Payload::ids(["a", "b"]))).await?;
//!
//! // GET https://api.fastspring.com/orders?status=completed
//! let body = client
//!     .get("orders", Some(Payload::filters([("status", "completed")])))
//!     .await?;
//! ```
//!
//! # Failure Classification
//!
//! Only HTTP 200 counts as success. Any other status becomes
//! [`HttpError::NotFound`] when the body carries both `"result": "error"` and
//! the string `"Not found"`, and [`HttpError::Response`] otherwise. Requests
//! are never retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, NotFoundError};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, Payload};
pub use http_response::HttpResponse;
