//! HTTP request types for the FastSpring API client.
//!
//! This module normalizes the three inputs of a request (method, endpoint
//! and payload) into the concrete path and body that go over the wire.
//!
//! # Payload shorthands
//!
//! For GET and DELETE requests the payload shapes the URL:
//!
//! - a list becomes an id segment: `products` + `[1, 2, 3]` -> `products/1,2,3`
//! - a mapping becomes a query string: `products` + `{"status": "active"}`
//!   -> `products?status=active`
//!
//! For POST and PUT requests the payload is sent as the JSON body and the URL
//! is left untouched.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods accepted by the FastSpring API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving entities.
    Get,
    /// HTTP POST method for creating or updating entities.
    Post,
    /// HTTP PUT method.
    Put,
    /// HTTP DELETE method for removing entities.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for methods whose payload shapes the URL.
    #[must_use]
    pub const fn payload_in_url(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpRequestError;

    /// Parses a method name case-insensitively.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fastspring_api::clients::HttpMethod;
    ///
    /// assert_eq!("delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    /// assert!("PATCH".parse::<HttpMethod>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(InvalidHttpRequestError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

/// The payload of a request.
///
/// Construct it through the `From` conversions: JSON arrays become
/// [`Payload::List`], JSON objects become [`Payload::Map`], strings become
/// [`Payload::Text`] and must hold valid JSON.
///
/// # Example
///
/// ```rust
/// use fastspring_api::clients::Payload;
/// use serde_json::json;
///
/// assert!(matches!(Payload::from(json!(["a", "b"])), Payload::List(_)));
/// assert!(matches!(Payload::from(json!({"status": "active"})), Payload::Map(_)));
/// assert!(matches!(Payload::from(r#"{"a":1}"#), Payload::Text(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// An ordered list, used as an id list for GET/DELETE.
    List(Vec<Value>),
    /// A key-value mapping, used as filters for GET/DELETE.
    Map(Map<String, Value>),
    /// Any other JSON value.
    Value(Value),
    /// Pre-encoded JSON text.
    Text(String),
}

impl Payload {
    /// Builds a list payload from identifiers.
    pub fn ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::List(ids.into_iter().map(Into::into).collect())
    }

    /// Builds a mapping payload from key-value pairs.
    pub fn filters<I, K, V>(filters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(
            filters
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Returns `true` if this payload results in no request body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::Value(value) => value.is_null(),
            Self::Text(text) => text.is_empty(),
        }
    }

    /// Serializes the payload into request body text.
    ///
    /// Returns `Ok(None)` for empty payloads.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPayload`] if a text payload
    /// is not valid JSON.
    pub fn to_body(&self) -> Result<Option<String>, InvalidHttpRequestError> {
        if self.is_empty() {
            return Ok(None);
        }

        let body = match self {
            Self::Text(text) => {
                serde_json::from_str::<Value>(text).map_err(|e| {
                    InvalidHttpRequestError::InvalidPayload {
                        reason: e.to_string(),
                    }
                })?;
                text.clone()
            }
            Self::List(items) => Value::from(items.clone()).to_string(),
            Self::Map(map) => Value::Object(map.clone()).to_string(),
            Self::Value(value) => value.to_string(),
        };

        Ok(Some(body))
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(items),
            Value::Object(map) => Self::Map(map),
            Value::String(text) => Self::Text(text),
            other => Self::Value(other),
        }
    }
}

impl From<Vec<Value>> for Payload {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A fully normalized request, ready to be sent.
///
/// Use [`HttpRequest::builder`] to construct one.
///
/// # Example
///
/// ```rust
/// use fastspring_api::clients::{HttpMethod, HttpRequest, Payload};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/products/")
///     .payload(Payload::ids([1, 2, 3]))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.endpoint, "products");
/// assert_eq!(request.path, "products/1,2,3");
/// assert!(request.body.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The endpoint, trimmed of surrounding slashes.
    pub endpoint: String,
    /// The path relative to the host, including id segment or query string.
    pub path: String,
    /// The JSON body, only ever set for POST and PUT.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for the given method and endpoint.
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, endpoint)
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    endpoint: String,
    payload: Option<Payload>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            http_method: method,
            endpoint: endpoint.into(),
            payload: None,
        }
    }

    /// Sets the request payload.
    #[must_use]
    pub fn payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Sets or clears the request payload.
    #[must_use]
    pub fn maybe_payload(mut self, payload: Option<Payload>) -> Self {
        self.payload = payload;
        self
    }

    /// Builds the request, normalizing path and body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPayload`] if a text payload
    /// is not valid JSON. The payload is validated for every method, even
    /// when no body is sent.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let endpoint = self.endpoint.trim_matches('/').to_string();
        let body = match &self.payload {
            Some(payload) => payload.to_body()?,
            None => None,
        };

        let mut path = endpoint.clone();
        if self.http_method.payload_in_url() {
            match &self.payload {
                Some(Payload::List(items)) if !items.is_empty() => {
                    path.push('/');
                    path.push_str(&id_segment(items));
                }
                Some(Payload::Map(map)) if !map.is_empty() => {
                    path.push('?');
                    path.push_str(&query_string(map));
                }
                _ => {}
            }
        }

        let body = match self.http_method {
            HttpMethod::Post | HttpMethod::Put => body,
            HttpMethod::Get | HttpMethod::Delete => None,
        };

        Ok(HttpRequest {
            http_method: self.http_method,
            endpoint,
            path,
            body,
        })
    }
}

/// Renders a scalar JSON value the way it appears in a URL.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn id_segment(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| urlencoding::encode(&scalar_to_string(item)).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

fn query_string(map: &Map<String, Value>) -> String {
    let mut pairs = Vec::with_capacity(map.len());

    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            // Arrays are sent as comma-separated values
            Value::Array(items) => items
                .iter()
                .filter(|item| !item.is_array() && !item.is_object())
                .map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(","),
            other => scalar_to_string(other),
        };
        pairs.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(&value)
        ));
    }

    pairs.join("&")
}
