//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that a
//! configured client never holds an empty credential or a malformed host.

use crate::error::ConfigError;
use std::fmt;

/// A validated FastSpring API username.
///
/// # Example
///
/// ```rust
/// use fastspring_api::ApiUsername;
///
/// let username = ApiUsername::new("my-api-user").unwrap();
/// assert_eq!(username.as_ref(), "my-api-user");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUsername(String);

impl ApiUsername {
    /// Creates a new validated API username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for ApiUsername {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated FastSpring API password.
///
/// The `Debug` implementation masks the value, displaying only
/// `ApiPassword(*****)`.
///
/// # Example
///
/// ```rust
/// use fastspring_api::ApiPassword;
///
/// let password = ApiPassword::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "ApiPassword(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiPassword(String);

impl ApiPassword {
    /// Creates a new validated API password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for ApiPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiPassword(*****)")
    }
}

/// A validated API host URL.
///
/// Trailing slashes are removed so that endpoint paths can be appended
/// directly.
///
/// # Example
///
/// ```rust
/// use fastspring_api::HostUrl;
///
/// let url = HostUrl::new("https://api.fastspring.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.fastspring.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.fastspring.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for HostUrl {
    /// The public FastSpring API host, `https://api.fastspring.com`.
    fn default() -> Self {
        Self {
            url: "https://api.fastspring.com".to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: 26,
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
