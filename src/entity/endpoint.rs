//! Endpoint descriptors for FastSpring resource collections.

use std::borrow::Cow;
use std::fmt;

/// A FastSpring resource collection and the field that identifies its records.
///
/// The endpoint name is the collection's path segment (for example
/// `"products"`). Records of the collection are identified by the field named
/// after the singular form of the clean name, derived by removing a single
/// trailing `s` (`"products"` identifies records by `"product"`). Collections
/// with irregular plurals override the id field with
/// [`Endpoint::with_id_field`].
///
/// # Example
///
/// ```rust
/// use fastspring_api::Endpoint;
///
/// let products = Endpoint::new("/products/");
/// assert_eq!(products.clean_name(), "products");
/// assert_eq!(products.id_field(), "product");
///
/// let addresses = Endpoint::with_id_field("addresses", "address");
/// assert_eq!(addresses.id_field(), "address");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    name: Cow<'static, str>,
    id_field: Option<Cow<'static, str>>,
}

impl Endpoint {
    /// Creates a descriptor using the default id field convention.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            id_field: None,
        }
    }

    /// Creates a descriptor with an explicit id field.
    #[must_use]
    pub const fn with_id_field(name: &'static str, id_field: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            id_field: Some(Cow::Borrowed(id_field)),
        }
    }

    /// Creates a descriptor from a runtime string.
    #[must_use]
    pub fn owned(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            id_field: None,
        }
    }

    /// Replaces the id field of this descriptor.
    #[must_use]
    pub fn id_field_override(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = Some(Cow::Owned(id_field.into()));
        self
    }

    /// Returns the endpoint name as given.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the endpoint name with leading and trailing `/` removed.
    ///
    /// This is also the key under which responses carry the record list.
    #[must_use]
    pub fn clean_name(&self) -> &str {
        self.name.trim_matches('/')
    }

    /// Returns the name of the field holding a record's id.
    #[must_use]
    pub fn id_field(&self) -> &str {
        match &self.id_field {
            Some(field) => field.as_ref(),
            None => {
                let clean = self.clean_name();
                clean.strip_suffix('s').unwrap_or(clean)
            }
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.clean_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_trims_slashes() {
        assert_eq!(Endpoint::new("products").clean_name(), "products");
        assert_eq!(Endpoint::new("/products").clean_name(), "products");
        assert_eq!(Endpoint::new("//products//").clean_name(), "products");
    }

    #[test]
    fn test_default_id_field_drops_one_trailing_s() {
        assert_eq!(Endpoint::new("products").id_field(), "product");
        assert_eq!(Endpoint::new("/subscriptions/").id_field(), "subscription");
        assert_eq!(Endpoint::new("address").id_field(), "addres");
        assert_eq!(Endpoint::new("access").id_field(), "acces");
    }

    #[test]
    fn test_id_field_without_trailing_s_is_unchanged() {
        assert_eq!(Endpoint::new("data").id_field(), "data");
    }

    #[test]
    fn test_id_field_override() {
        let endpoint = Endpoint::with_id_field("addresses", "address");
        assert_eq!(endpoint.clean_name(), "addresses");
        assert_eq!(endpoint.id_field(), "address");

        let endpoint = Endpoint::owned("people").id_field_override("person");
        assert_eq!(endpoint.name(), "people");
        assert_eq!(endpoint.id_field(), "person");
    }

    #[test]
    fn test_display_uses_clean_name() {
        assert_eq!(Endpoint::new("/orders/").to_string(), "orders");
    }
}
