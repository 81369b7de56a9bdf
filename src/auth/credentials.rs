//! API credentials used for HTTP Basic authentication.

use crate::config::{ApiPassword, ApiUsername};
use crate::error::ConfigError;

/// A FastSpring API username/password pair.
///
/// Credentials are immutable once created. The password is masked in
/// `Debug` output through [`ApiPassword`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    username: ApiUsername,
    password: ApiPassword,
}

impl Credentials {
    /// Creates credentials from validated parts.
    #[must_use]
    pub const fn new(username: ApiUsername, password: ApiPassword) -> Self {
        Self { username, password }
    }

    /// Creates credentials from raw strings, validating both.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] or [`ConfigError::EmptyPassword`]
    /// if either value is empty.
    pub fn from_parts(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            ApiUsername::new(username)?,
            ApiPassword::new(password)?,
        ))
    }

    /// Returns the API username.
    #[must_use]
    pub const fn username(&self) -> &ApiUsername {
        &self.username
    }

    /// Returns the API password.
    #[must_use]
    pub const fn password(&self) -> &ApiPassword {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_validates_username() {
        let result = Credentials::from_parts("", "pass");
        assert!(matches!(result, Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_from_parts_validates_password() {
        let result = Credentials::from_parts("user", "");
        assert!(matches!(result, Err(ConfigError::EmptyPassword)));
    }

    #[test]
    fn test_debug_masks_password() {
        let credentials = Credentials::from_parts("user", "hunter2").unwrap();
        let debug_str = format!("{credentials:?}");
        assert!(debug_str.contains("user"));
        assert!(!debug_str.contains("hunter2"));
    }
}
