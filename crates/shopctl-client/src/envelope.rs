//! Normalization of the API's two list-response shapes.
//!
//! Collection endpoints return either a bare JSON array or an envelope
//! `{ "data": [...], "meta": { "total": ..., "has_next": ... } }` depending
//! on the endpoint. [`decode_page`] folds both into a [`Page`] and rejects
//! anything else with [`ApiError::UnexpectedShape`] rather than defaulting
//! to an empty list.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// Pagination metadata from an enveloped response. Both fields are optional
/// on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub has_next: Option<bool>,
}

/// One page of a collection. `meta` is `None` for bare-array responses.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: Option<PageMeta>,
}

/// Decodes a list response body into a [`Page`], accepting both the bare
/// array and enveloped shapes.
///
/// # Errors
///
/// - [`ApiError::UnexpectedShape`] if the body is neither an array nor an
///   object with a `data` array.
/// - [`ApiError::Deserialize`] if the items (or `meta`) do not match `T`.
pub fn decode_page<T: DeserializeOwned>(
    body: serde_json::Value,
    context: &str,
) -> Result<Page<T>, ApiError> {
    match body {
        serde_json::Value::Array(_) => {
            let items = serde_json::from_value(body).map_err(|e| ApiError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;
            Ok(Page { items, meta: None })
        }
        serde_json::Value::Object(mut map) => {
            let Some(data) = map.remove("data") else {
                return Err(ApiError::UnexpectedShape {
                    context: context.to_owned(),
                    found: "an object without a \"data\" field".to_owned(),
                });
            };
            if !data.is_array() {
                return Err(ApiError::UnexpectedShape {
                    context: context.to_owned(),
                    found: format!("a \"data\" field holding {}", json_kind(&data)),
                });
            }
            let items = serde_json::from_value(data).map_err(|e| ApiError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;
            let meta = match map.remove("meta") {
                Some(meta) => {
                    Some(
                        serde_json::from_value(meta).map_err(|e| ApiError::Deserialize {
                            context: format!("{context} meta"),
                            source: e,
                        })?,
                    )
                }
                None => None,
            };
            Ok(Page { items, meta })
        }
        other => Err(ApiError::UnexpectedShape {
            context: context.to_owned(),
            found: json_kind(&other).to_owned(),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_bare_array() {
        let page: Page<i64> = decode_page(json!([1, 2, 3]), "test").unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(page.meta.is_none());
    }

    #[test]
    fn decodes_envelope_with_meta() {
        let body = json!({ "data": [1, 2], "meta": { "total": 10, "has_next": true } });
        let page: Page<i64> = decode_page(body, "test").unwrap();
        assert_eq!(page.items, vec![1, 2]);
        let meta = page.meta.expect("meta should be present");
        assert_eq!(meta.total, Some(10));
        assert_eq!(meta.has_next, Some(true));
    }

    #[test]
    fn decodes_envelope_without_meta() {
        let page: Page<i64> = decode_page(json!({ "data": [] }), "test").unwrap();
        assert!(page.items.is_empty());
        assert!(page.meta.is_none());
    }

    #[test]
    fn rejects_object_without_data() {
        let result = decode_page::<i64>(json!({ "items": [1] }), "test");
        assert!(
            matches!(result, Err(ApiError::UnexpectedShape { .. })),
            "expected UnexpectedShape, got: {result:?}"
        );
    }

    #[test]
    fn rejects_non_array_data() {
        let result = decode_page::<i64>(json!({ "data": "nope" }), "test");
        assert!(
            matches!(result, Err(ApiError::UnexpectedShape { ref found, .. }) if found.contains("a string")),
            "expected UnexpectedShape mentioning a string, got: {result:?}"
        );
    }

    #[test]
    fn rejects_scalar_body() {
        let result = decode_page::<i64>(json!(42), "test");
        assert!(
            matches!(result, Err(ApiError::UnexpectedShape { ref found, .. }) if found == "a number"),
            "expected UnexpectedShape(a number), got: {result:?}"
        );
    }

    #[test]
    fn item_type_mismatch_is_a_deserialize_error() {
        let result = decode_page::<i64>(json!(["not-a-number"]), "test");
        assert!(
            matches!(result, Err(ApiError::Deserialize { .. })),
            "expected Deserialize, got: {result:?}"
        );
    }
}
