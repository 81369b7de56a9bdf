//! Response envelope handling for entity operations.
//!
//! FastSpring wraps record lists in an envelope keyed by the collection name:
//!
//! ```json
//! { "products": [ { "product": "a", "result": "success" } ], "page": 1, "nextPage": 2 }
//! ```
//!
//! Single-record answers come back unwrapped, recognizable by their
//! `result` field.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::entity::record::id_from_fields;
use crate::entity::{Endpoint, EntityError, Record};

/// Returns the record list carried by a response body.
///
/// The list is taken from the field named after the endpoint. A body that
/// itself has a `result` field is treated as a one-record list. Anything
/// else carries no records.
pub(crate) fn response_body<'a>(body: &'a Value, endpoint: &Endpoint) -> Option<Vec<&'a Value>> {
    if let Some(list) = body.get(endpoint.clean_name()) {
        return match list {
            Value::Array(items) => Some(items.iter().collect()),
            Value::Object(map) => Some(map.values().collect()),
            _ => None,
        };
    }

    if body.get("result").is_some() {
        return Some(vec![body]);
    }

    None
}

/// Validates a response body and returns its record list.
///
/// # Errors
///
/// Returns [`EntityError::EmptyResponse`] if the body carries no records and
/// [`EntityError::ApiError`] if any record reports `"result": "error"`.
pub(crate) fn check_response<'a>(
    body: &'a Value,
    endpoint: &Endpoint,
) -> Result<Vec<&'a Value>, EntityError> {
    let items = match response_body(body, endpoint) {
        Some(items) if !items.is_empty() => items,
        _ => {
            return Err(EntityError::EmptyResponse {
                endpoint: endpoint.clean_name().to_string(),
            })
        }
    };

    let errors: Vec<String> = items
        .iter()
        .filter(|item| item.get("result").and_then(Value::as_str) == Some("error"))
        .map(ToString::to_string)
        .collect();

    if !errors.is_empty() {
        return Err(EntityError::ApiError {
            endpoint: endpoint.clean_name().to_string(),
            errors,
        });
    }

    Ok(items)
}

/// Materializes records keyed by id.
///
/// Records whose id cannot be determined are dropped.
pub(crate) fn entities_from_items(items: &[&Value], endpoint: &Endpoint) -> BTreeMap<String, Record> {
    let mut entities = BTreeMap::new();

    for item in items {
        let Value::Object(fields) = item else {
            tracing::debug!(endpoint = %endpoint, "skipping non-object entry in response");
            continue;
        };

        match id_from_fields(fields, endpoint) {
            Some(id) => {
                entities.insert(id, Record::from_response(fields.clone()));
            }
            None => {
                tracing::debug!(
                    endpoint = %endpoint,
                    id_field = endpoint.id_field(),
                    "dropping record without a usable id"
                );
            }
        }
    }

    entities
}

/// Returns the number of the page following this response, if any.
///
/// A page follows while `nextPage` is present and not null. Its number is
/// the response's `page` plus one, with a missing or unreadable `page`
/// counting as zero. Any non-null `nextPage`, including `false` or `0`,
/// counts as a following page.
pub(crate) fn next_page(body: &Value) -> Option<i64> {
    match body.get("nextPage") {
        None | Some(Value::Null) => None,
        Some(_) => Some(page_number(body.get("page")).saturating_add(1)),
    }
}

fn page_number(page: Option<&Value>) -> i64 {
    match page {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PRODUCTS: Endpoint = Endpoint::new("products");

    #[test]
    fn test_response_body_uses_endpoint_key() {
        let body = json!({"products": [{"product": "a"}, {"product": "b"}], "page": 1});
        let items = response_body(&body, &PRODUCTS).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_response_body_ignores_slashes_in_endpoint() {
        let body = json!({"products": [{"product": "a"}]});
        let items = response_body(&body, &Endpoint::new("/products/")).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_response_body_wraps_single_record() {
        let body = json!({"product": "a", "result": "success"});
        let items = response_body(&body, &PRODUCTS).unwrap();
        assert_eq!(items, vec![&body]);
    }

    #[test]
    fn test_response_body_absent() {
        assert!(response_body(&json!({"orders": []}), &PRODUCTS).is_none());
        assert!(response_body(&Value::Null, &PRODUCTS).is_none());
        assert!(response_body(&json!({"products": "nope"}), &PRODUCTS).is_none());
    }

    #[test]
    fn test_check_response_rejects_empty_bodies() {
        for body in [Value::Null, json!({}), json!({"products": []})] {
            let result = check_response(&body, &PRODUCTS);
            assert!(matches!(result, Err(EntityError::EmptyResponse { .. })));
        }
    }

    #[test]
    fn test_check_response_aggregates_error_records() {
        let body = json!({"products": [
            {"product": "a", "result": "success"},
            {"product": "b", "result": "error", "error": {"product": "Not found"}},
            {"product": "c", "result": "error"}
        ]});

        match check_response(&body, &PRODUCTS) {
            Err(EntityError::ApiError { errors, endpoint }) => {
                assert_eq!(endpoint, "products");
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains(r#""product":"b""#));
                assert!(errors[1].contains(r#""product":"c""#));
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn test_check_response_accepts_id_lists() {
        let body = json!({"products": ["a", "b"], "nextPage": null});
        let items = check_response(&body, &PRODUCTS).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_entities_are_keyed_by_id_and_stripped() {
        let body = json!({"products": [
            {"product": "a", "action": "product.get", "result": "success", "price": 1},
            {"product": 7, "result": "success"},
            {"display": "no id", "result": "success"},
            "stray"
        ]});
        let items = response_body(&body, &PRODUCTS).unwrap();
        let entities = entities_from_items(&items, &PRODUCTS);

        assert_eq!(entities.keys().collect::<Vec<_>>(), vec!["7", "a"]);
        let record = &entities["a"];
        assert_eq!(record.get_i64("price"), Some(1));
        assert!(!record.exists("action"));
        assert!(!record.exists("result"));
    }

    #[test]
    fn test_next_page() {
        assert_eq!(next_page(&json!({"page": 1, "nextPage": 2})), Some(2));
        assert_eq!(next_page(&json!({"page": "3", "nextPage": 4})), Some(4));
        assert_eq!(next_page(&json!({"nextPage": 2})), Some(1));
        assert_eq!(next_page(&json!({"page": 5, "nextPage": null})), None);
        assert_eq!(next_page(&json!({"page": 5})), None);
    }

    #[test]
    fn test_any_non_null_next_page_continues() {
        assert_eq!(next_page(&json!({"page": 1, "nextPage": false})), Some(2));
        assert_eq!(next_page(&json!({"page": 1, "nextPage": 0})), Some(2));
    }
}
