//! Authentication types for the FastSpring API client.
//!
//! FastSpring authenticates every request with HTTP Basic credentials
//! (an API username and password created in the FastSpring app).
//!
//! # Example
//!
//! ```rust
//! use fastspring_api::{ApiPassword, ApiUsername, Credentials};
//!
//! let credentials = Credentials::new(
//!     ApiUsername::new("user").unwrap(),
//!     ApiPassword::new("pass").unwrap(),
//! );
//! assert_eq!(credentials.username().as_ref(), "user");
//! ```

mod credentials;

pub use credentials::Credentials;
