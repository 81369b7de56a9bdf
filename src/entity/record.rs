//! The in-memory representation of one FastSpring entity.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::Endpoint;

/// Response metadata fields removed from records on materialization.
pub(crate) const METADATA_FIELDS: [&str; 3] = ["action", "result", "error"];

/// A single FastSpring entity as a string-keyed map of JSON values.
///
/// Records keep every field the API returns, including fields this crate
/// does not know about. Known fields are read through the typed accessors;
/// anything else through [`Record::get`] or the raw map.
///
/// Indexing a missing field yields `Value::Null` instead of panicking.
///
/// # Example
///
/// ```rust
/// use fastspring_api::{Endpoint, Record};
/// use serde_json::json;
///
/// let mut record = Record::new();
/// record.set("product", "my-product");
/// record.set("priority", 1);
///
/// assert_eq!(record.get_str("product"), Some("my-product"));
/// assert_eq!(record["priority"], json!(1));
/// assert!(record["missing"].is_null());
/// assert_eq!(record.id(&Endpoint::new("products")), Some("my-product".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a response object, dropping response metadata.
    pub(crate) fn from_response(mut fields: Map<String, Value>) -> Self {
        fields.retain(|key, _| !METADATA_FIELDS.contains(&key.as_str()));
        Self { fields }
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Sets a field, returning the previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Removes a field, returning its value.
    ///
    /// The remaining fields keep their order.
    pub fn unset(&mut self, field: &str) -> Option<Value> {
        let value = self.fields.get(field).cloned();
        if value.is_some() {
            self.fields.retain(|key, _| key != field);
        }
        value
    }

    /// Returns `true` if the field is present and not null.
    #[must_use]
    pub fn exists(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|value| !value.is_null())
    }

    /// Returns a string field.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Returns an integer field.
    #[must_use]
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.fields.get(field).and_then(Value::as_i64)
    }

    /// Returns a numeric field as a float.
    #[must_use]
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(Value::as_f64)
    }

    /// Returns a boolean field.
    #[must_use]
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.fields.get(field).and_then(Value::as_bool)
    }

    /// Returns the record's id for the given endpoint.
    ///
    /// String ids are returned as is, numbers and booleans are stringified.
    /// A missing, null or structured id field yields `None`.
    #[must_use]
    pub fn id(&self, endpoint: &Endpoint) -> Option<String> {
        id_from_fields(&self.fields, endpoint)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over the field names.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the record, returning the underlying map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl Index<&str> for Record {
    type Output = Value;

    fn index(&self, field: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.fields.get(field).unwrap_or(&NULL)
    }
}

/// Extracts the id of a raw response object.
pub(crate) fn id_from_fields(fields: &Map<String, Value>, endpoint: &Endpoint) -> Option<String> {
    match fields.get(endpoint.id_field())? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        Value::Bool(id) => Some(id.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_from_response_strips_metadata() {
        let record = Record::from_response(object(json!({
            "product": "p1",
            "action": "product.get",
            "result": "success",
            "error": {},
            "display": {"en": "Product"}
        })));

        assert!(!record.exists("action"));
        assert!(!record.exists("result"));
        assert!(record.get("error").is_none());
        assert_eq!(record.get_str("product"), Some("p1"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_get_set_unset_exists() {
        let mut record = Record::new();
        assert!(record.is_empty());

        assert_eq!(record.set("quantity", 2), None);
        assert_eq!(record.set("quantity", 3), Some(json!(2)));
        assert!(record.exists("quantity"));

        record.set("note", Value::Null);
        assert!(!record.exists("note"));
        assert!(record.get("note").is_some());

        assert_eq!(record.unset("quantity"), Some(json!(3)));
        assert!(!record.exists("quantity"));
    }

    #[test]
    fn test_typed_accessors() {
        let record = Record::from(object(json!({
            "name": "Pro",
            "quantity": 4,
            "price": 9.5,
            "live": true
        })));

        assert_eq!(record.get_str("name"), Some("Pro"));
        assert_eq!(record.get_i64("quantity"), Some(4));
        assert_eq!(record.get_f64("price"), Some(9.5));
        assert_eq!(record.get_bool("live"), Some(true));
        assert_eq!(record.get_i64("name"), None);
    }

    #[test]
    fn test_index_missing_field_is_null() {
        let record = Record::new();
        assert_eq!(record["anything"], Value::Null);
    }

    #[test]
    fn test_id_conversion() {
        let endpoint = Endpoint::new("orders");

        let record = Record::from(object(json!({"order": "abc"})));
        assert_eq!(record.id(&endpoint), Some("abc".to_string()));

        let record = Record::from(object(json!({"order": 42})));
        assert_eq!(record.id(&endpoint), Some("42".to_string()));

        let record = Record::from(object(json!({"order": null})));
        assert_eq!(record.id(&endpoint), None);

        let record = Record::from(object(json!({"order": {"id": 1}})));
        assert_eq!(record.id(&endpoint), None);

        let record = Record::from(object(json!({"id": "abc"})));
        assert_eq!(record.id(&endpoint), None);
    }

    #[test]
    fn test_fields_keep_response_order() {
        let mut record = Record::from_response(object(json!({
            "product": "p1",
            "action": "product.get",
            "zeta": 1,
            "result": "success",
            "alpha": 2,
            "middle": 3
        })));
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec!["product", "zeta", "alpha", "middle"]
        );

        record.unset("zeta");
        record.set("omega", 4);
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec!["product", "alpha", "middle", "omega"]
        );

        let decoded: Record =
            serde_json::from_str(r#"{"product":"p1","zeta":1,"alpha":2}"#).unwrap();
        assert_eq!(decoded.keys().collect::<Vec<_>>(), vec!["product", "zeta", "alpha"]);
    }

    #[test]
    fn test_serde_is_transparent() {
        let record = Record::from(object(json!({"product": "p1", "price": 10})));
        let encoded = serde_json::to_value(&record).unwrap();
        assert_eq!(encoded, json!({"product": "p1", "price": 10}));

        let decoded: Record = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, record);
    }
}
