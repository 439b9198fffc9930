//! Response envelopes of the REST backend
//!
//! Every payload is wrapped as `{ "data": ... }`. Lists are either the data
//! itself or, for products, nested one level deeper under a named key.

use crate::shared::api_error::ApiError;
use crate::shared::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Where the record array sits inside `data`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// `{ data: [...] }`
    Flat,
    /// `{ data: { <key>: [...] } }`
    Nested(&'static str),
}

/// Extracts the records of a list response body
pub fn extract_list(shape: ListShape, body: Value) -> Result<Vec<Record>, ApiError> {
    let envelope: ApiEnvelope<Value> =
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let items = match (shape, envelope.data) {
        (ListShape::Flat, Value::Array(items)) => items,
        (ListShape::Nested(key), Value::Object(mut obj)) => match obj.remove(key) {
            Some(Value::Array(items)) => items,
            _ => return Err(ApiError::Decode(format!("missing data.{}", key))),
        },
        (ListShape::Flat, _) => return Err(ApiError::Decode("data is not a list".into())),
        (ListShape::Nested(key), _) => {
            return Err(ApiError::Decode(format!("missing data.{}", key)))
        }
    };

    Ok(items.into_iter().filter_map(Record::from_value).collect())
}

/// `message` field of an error body; validation errors arrive as an array of
/// strings and are joined
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = match value.get("message")? {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    (!message.trim().is_empty()).then_some(message)
}
