//! HTTP client for FastSpring API communication.
//!
//! This module provides the [`HttpClient`] type, the authenticated transport
//! that every entity operation is built on.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::errors::{HttpError, HttpResponseError, NotFoundError};
use crate::clients::http_request::{HttpMethod, HttpRequest, Payload};
use crate::clients::http_response::HttpResponse;
use crate::config::{FastSpringConfig, HostUrl, PaginationPolicy};
use crate::entity::{Endpoint, Entities};
use crate::error::ConfigError;

/// Authenticated HTTP client for the FastSpring API.
///
/// The client handles:
/// - HTTP Basic authentication with the configured credentials
/// - A fixed browser-like `User-Agent` and a JSON `Content-Type`
/// - URL and body normalization (see [`HttpRequest`])
/// - Classification of failed responses into [`HttpError::NotFound`] and
///   [`HttpError::Response`]
///
/// Requests are never retried.
///
/// # Credentials
///
/// Credentials come from the [`FastSpringConfig`] or are set exactly once
/// afterwards through [`HttpClient::initialize`]. Until then every request
/// fails with [`HttpError::NotInitialized`] without touching the network.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; credential initialization is guarded by a
/// [`OnceLock`], so concurrent `initialize` calls cannot both succeed.
///
/// # Example
///
/// ```rust,ignore
/// use fastspring_api::{FastSpringConfig, HttpClient};
/// use fastspring_api::clients::Payload;
///
/// let client = HttpClient::new(&FastSpringConfig::default())?;
/// client.initialize("api-user", "api-password")?;
///
/// let body = client.get("products", Some(Payload::ids(["my-product"]))).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    host: HostUrl,
    credentials: OnceLock<Credentials>,
    pagination: PaginationPolicy,
    page_size: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying HTTP client cannot be
    /// created (for example, an invalid `User-Agent` value or a TLS
    /// initialization failure).
    pub fn new(config: &FastSpringConfig) -> Result<Self, HttpError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .default_headers(default_headers)
            .build()?;

        let credentials = OnceLock::new();
        if let Some(configured) = config.credentials() {
            // A fresh lock is always empty
            let _ = credentials.set(configured.clone());
        }

        Ok(Self {
            client,
            host: config.host().clone(),
            credentials,
            pagination: config.pagination(),
            page_size: config.page_size(),
        })
    }

    /// Sets the API credentials of a client built without them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] / [`ConfigError::EmptyPassword`]
    /// for empty values and [`ConfigError::AlreadyInitialized`] if the client
    /// already holds credentials.
    pub fn initialize(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let credentials = Credentials::from_parts(username, password)?;
        self.credentials
            .set(credentials)
            .map_err(|_| ConfigError::AlreadyInitialized)?;
        tracing::debug!("FastSpring client initialized with API credentials");
        Ok(())
    }

    /// Returns `true` once credentials are available.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.credentials.get().is_some()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the pagination failure policy used by entity listings.
    #[must_use]
    pub const fn pagination(&self) -> PaginationPolicy {
        self.pagination
    }

    /// Returns the `limit` used by [`Entities::find_all`].
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the entity operations for the given endpoint.
    ///
    /// ```rust,ignore
    /// use fastspring_api::entity::resources;
    ///
    /// let product = client.entities(resources::PRODUCTS).find("my-product").await?;
    /// ```
    #[must_use]
    pub const fn entities(&self, endpoint: Endpoint) -> Entities<'_> {
        Entities::new(self, endpoint)
    }

    /// Sends a GET request and returns the decoded body.
    ///
    /// A list payload is appended as an id segment, a mapping payload as a
    /// query string.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn get(&self, endpoint: &str, payload: Option<Payload>) -> Result<Value, HttpError> {
        self.send(HttpMethod::Get, endpoint, payload).await
    }

    /// Sends a POST request with the payload as JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn post(&self, endpoint: &str, payload: Option<Payload>) -> Result<Value, HttpError> {
        self.send(HttpMethod::Post, endpoint, payload).await
    }

    /// Sends a PUT request with the payload as JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn put(&self, endpoint: &str, payload: Option<Payload>) -> Result<Value, HttpError> {
        self.send(HttpMethod::Put, endpoint, payload).await
    }

    /// Sends a DELETE request.
    ///
    /// A list payload is appended as an id segment, a mapping payload as a
    /// query string.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn delete(
        &self,
        endpoint: &str,
        payload: Option<Payload>,
    ) -> Result<Value, HttpError> {
        self.send(HttpMethod::Delete, endpoint, payload).await
    }

    /// Sends a request whose method is given by name.
    ///
    /// The method is matched case-insensitively against GET, POST, PUT and
    /// DELETE.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::NotInitialized`] before anything else if the
    /// client has no credentials, then
    /// [`InvalidHttpRequestError::InvalidMethod`](crate::clients::InvalidHttpRequestError::InvalidMethod)
    /// for an unknown method. Otherwise see [`HttpClient::send`].
    pub async fn request(
        &self,
        method: &str,
        endpoint: &str,
        payload: Option<Payload>,
    ) -> Result<Value, HttpError> {
        let credentials = self.credentials()?;
        let method: HttpMethod = method.parse()?;
        self.execute(credentials, method, endpoint, payload).await
    }

    /// Sends a request and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the client has no credentials (`NotInitialized`)
    /// - the payload is invalid (`InvalidRequest`)
    /// - the request fails to complete or times out (`Network`)
    /// - the API reports a missing entity (`NotFound`)
    /// - the API answers with any other non-200 status (`Response`)
    pub async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        payload: Option<Payload>,
    ) -> Result<Value, HttpError> {
        let credentials = self.credentials()?;
        self.execute(credentials, method, endpoint, payload).await
    }

    fn credentials(&self) -> Result<&Credentials, HttpError> {
        self.credentials.get().ok_or(HttpError::NotInitialized)
    }

    async fn execute(
        &self,
        credentials: &Credentials,
        method: HttpMethod,
        endpoint: &str,
        payload: Option<Payload>,
    ) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(method, endpoint)
            .maybe_payload(payload)
            .build()?;

        let url = format!("{}/{}", self.host, request.path);
        tracing::debug!(%method, %url, "sending FastSpring API request");

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .basic_auth(
            credentials.username().as_ref(),
            Some(credentials.password().as_ref()),
        );

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let text = res.text().await?;
        let response = HttpResponse::from_text(code, &text);

        tracing::debug!(%method, %url, status = code, "received FastSpring API response");

        if response.is_ok() {
            return Ok(response.body);
        }

        if response.reports_not_found() {
            return Err(NotFoundError {
                code,
                method,
                endpoint: request.endpoint,
                body: response.serialized_body(),
            }
            .into());
        }

        Err(HttpResponseError {
            code,
            method,
            endpoint: request.endpoint,
            body: response.serialized_body(),
        }
        .into())
    }
}
