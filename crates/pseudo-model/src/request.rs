//! Request and response bodies of the `strings` contract.
//!
//! A request maps arbitrary keys to source strings under `strings`; the
//! response carries the same keys mapped to pseudo-localized values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringsRequest {
    /// Raw values; anything other than a string or null is rejected by the engine.
    pub strings: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringsResponse {
    pub strings: BTreeMap<String, String>,
}

/// Short name of a JSON value's type, used in error messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
