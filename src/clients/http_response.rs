//! HTTP response types for the FastSpring API client.
//!
//! This module decodes raw response bodies and recognizes FastSpring's
//! "not found" answers, which arrive as HTTP 400 with a generic error body.

use serde_json::Value;

/// The body string FastSpring uses for missing entities.
const NOT_FOUND_MESSAGE: &str = "Not found";

/// A decoded response from the FastSpring API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The decoded body.
    ///
    /// Successful responses with an empty or undecodable body decode to
    /// `Value::Null`. Failed responses keep undecodable bodies as a JSON
    /// string holding the raw text.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a response from a status code and the raw body text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fastspring_api::clients::HttpResponse;
    /// use serde_json::json;
    ///
    /// let response = HttpResponse::from_text(200, r#"{"products":[]}"#);
    /// assert_eq!(response.body, json!({"products": []}));
    ///
    /// let response = HttpResponse::from_text(502, "Bad Gateway");
    /// assert_eq!(response.body, json!("Bad Gateway"));
    /// ```
    #[must_use]
    pub fn from_text(code: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(text) {
                Ok(body) => body,
                Err(e) if code == 200 => {
                    tracing::warn!("FastSpring returned an undecodable body with status 200: {}", e);
                    Value::Null
                }
                Err(_) => Value::String(text.to_string()),
            }
        };

        Self { code, body }
    }

    /// Returns `true` if the request succeeded.
    ///
    /// FastSpring signals success with exactly HTTP 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Returns `true` if the body describes a missing entity.
    ///
    /// The body qualifies when, anywhere in its nested structure, it holds
    /// both a `result` field equal to `"error"` and a string equal to
    /// `"Not found"`. This is pattern matching on an underspecified wire
    /// contract, not a guarantee.
    #[must_use]
    pub fn reports_not_found(&self) -> bool {
        has_error_result(&self.body) && has_string(&self.body, NOT_FOUND_MESSAGE)
    }

    /// Returns the body serialized for error messages.
    #[must_use]
    pub fn serialized_body(&self) -> String {
        self.body.to_string()
    }
}

fn has_error_result(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.get("result").and_then(Value::as_str) == Some("error")
                || map.values().any(has_error_result)
        }
        Value::Array(items) => items.iter().any(has_error_result),
        _ => false,
    }
}

fn has_string(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(s) => s == needle,
        Value::Object(map) => map.values().any(|v| has_string(v, needle)),
        Value::Array(items) => items.iter().any(|v| has_string(v, needle)),
        _ => false,
    }
}
