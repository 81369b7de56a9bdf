//! Endpoint descriptors for the FastSpring collections.
//!
//! ```rust,ignore
//! use fastspring_api::entity::resources;
//!
//! let orders = client.entities(resources::ORDERS).find_by([("begin", "2024-01-01")]).await?;
//! ```

use crate::entity::Endpoint;

/// Customer accounts, identified by `account`.
pub const ACCOUNTS: Endpoint = Endpoint::new("accounts");

/// Coupons, identified by `coupon`.
pub const COUPONS: Endpoint = Endpoint::new("coupons");

/// Orders, identified by `order`.
pub const ORDERS: Endpoint = Endpoint::new("orders");

/// Products, identified by `product`.
pub const PRODUCTS: Endpoint = Endpoint::new("products");

/// Quotes, identified by `quote`.
pub const QUOTES: Endpoint = Endpoint::new("quotes");

/// Subscriptions, identified by `subscription`.
pub const SUBSCRIPTIONS: Endpoint = Endpoint::new("subscriptions");
