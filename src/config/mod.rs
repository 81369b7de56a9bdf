//! Configuration types for the FastSpring API client.
//!
//! # Overview
//!
//! - [`FastSpringConfig`]: the settings shared by every request of a client
//! - [`FastSpringConfigBuilder`]: a builder for [`FastSpringConfig`]
//! - [`ApiUsername`] / [`ApiPassword`]: validated credential newtypes
//! - [`HostUrl`]: the validated API base URL
//! - [`PaginationPolicy`]: what listing operations do when a page fails
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use fastspring_api::{ApiPassword, ApiUsername, FastSpringConfig, PaginationPolicy};
//!
//! let config = FastSpringConfig::builder()
//!     .credentials(
//!         ApiUsername::new("user").unwrap(),
//!         ApiPassword::new("pass").unwrap(),
//!     )
//!     .timeout(Duration::from_secs(10))
//!     .pagination(PaginationPolicy::FailFast)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

mod newtypes;

pub use newtypes::{ApiPassword, ApiUsername, HostUrl};

use std::time::Duration;

use crate::auth::Credentials;
use crate::error::ConfigError;

/// Base URL of the FastSpring REST API.
pub const DEFAULT_HOST: &str = "https://api.fastspring.com";

/// Browser-like user agent sent with every request.
///
/// FastSpring rejects some requests that carry a non-browser user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/74.0.3729.131 Safari/537.36";

/// Default network timeout for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `limit` used by the id listing phase of `find_all`.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Behavior of paginated listings when fetching a follow-up page fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaginationPolicy {
    /// Stop paginating and return the records collected so far.
    ///
    /// The failure is logged at warn level and otherwise discarded.
    #[default]
    BestEffort,
    /// Propagate the first page failure to the caller.
    FailFast,
}

/// Configuration for a FastSpring API client.
///
/// Credentials are optional here: a client built without them must be
/// initialized through [`HttpClient::initialize`](crate::HttpClient::initialize)
/// before it can send requests.
#[derive(Clone, Debug)]
pub struct FastSpringConfig {
    credentials: Option<Credentials>,
    host: HostUrl,
    timeout: Duration,
    user_agent: String,
    pagination: PaginationPolicy,
    page_size: u32,
}

impl FastSpringConfig {
    /// Creates a new builder for constructing a `FastSpringConfig`.
    #[must_use]
    pub fn builder() -> FastSpringConfigBuilder {
        FastSpringConfigBuilder::new()
    }

    /// Returns the credentials, if configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the per-request network timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the pagination failure policy.
    #[must_use]
    pub const fn pagination(&self) -> PaginationPolicy {
        self.pagination
    }

    /// Returns the `limit` used when listing ids in `find_all`.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl Default for FastSpringConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            host: HostUrl::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pagination: PaginationPolicy::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// Verify FastSpringConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FastSpringConfig>();
};

/// Builder for [`FastSpringConfig`].
///
/// # Defaults
///
/// - `credentials`: `None`
/// - `host`: [`DEFAULT_HOST`]
/// - `timeout`: [`DEFAULT_TIMEOUT`]
/// - `user_agent`: [`DEFAULT_USER_AGENT`]
/// - `pagination`: [`PaginationPolicy::BestEffort`]
/// - `page_size`: [`DEFAULT_PAGE_SIZE`]
#[derive(Debug, Default)]
pub struct FastSpringConfigBuilder {
    credentials: Option<Credentials>,
    host: Option<HostUrl>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    pagination: Option<PaginationPolicy>,
    page_size: Option<u32>,
}

impl FastSpringConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API credentials.
    #[must_use]
    pub fn credentials(mut self, username: ApiUsername, password: ApiPassword) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the per-request network timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the pagination failure policy.
    #[must_use]
    pub const fn pagination(mut self, policy: PaginationPolicy) -> Self {
        self.pagination = Some(policy);
        self
    }

    /// Sets the `limit` used when listing ids in `find_all`.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Builds the [`FastSpringConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] for a zero timeout and
    /// [`ConfigError::InvalidPageSize`] for a zero page size.
    pub fn build(self) -> Result<FastSpringConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }

        Ok(FastSpringConfig {
            credentials: self.credentials,
            host: self.host.unwrap_or_default(),
            timeout,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            pagination: self.pagination.unwrap_or_default(),
            page_size,
        })
    }
}
