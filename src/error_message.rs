//! Best-effort extraction of a human-readable message from a failure body.
//!
//! The platform reports errors in several shapes (`{message}`, `{error}`,
//! `{error: {message | code}}`, `{data: {message}}`, `{data: {error: {message}}}`,
//! bare strings, gateway pages). [`extract_message`] walks them in a fixed
//! order and always returns something.

use serde_json::{Map, Value};

pub const UNKNOWN_ERROR: &str = "Unknown error";
pub const UNKNOWN_ERROR_OCCURRED: &str = "Unknown error occurred";
pub const ERROR_DETAILS_PREFIX: &str = "Error details: ";

/// Pull the single best message out of `body`. First match wins:
///
/// 1. a string body, verbatim
/// 2. any other non-object (`null`, numbers, booleans) → `"Unknown error"`
/// 3. `message` (string)
/// 4. `error` as a string, then `error.message`, then `error.code` as `"Error code: {code}"`
/// 5. `data.message`, then `data.error.message`
/// 6. `statusText` (string)
/// 7. the whole body serialized, prefixed with `"Error details: "`
///
/// Arrays count as objects with no matching fields and land on step 7.
pub fn extract_message(body: &Value) -> String {
    let fields = match body {
        Value::String(s) => return s.clone(),
        Value::Object(map) => Some(map),
        Value::Array(_) => None,
        _ => return UNKNOWN_ERROR.to_string(),
    };

    fields
        .and_then(from_fields)
        .unwrap_or_else(|| serialize_details(body))
}

fn from_fields(map: &Map<String, Value>) -> Option<String> {
    if let Some(message) = str_field(map, "message") {
        return Some(message.to_string());
    }

    if let Some(error) = map.get("error").filter(|e| !e.is_null()) {
        match error {
            Value::String(s) => return Some(s.clone()),
            Value::Object(inner) => {
                if let Some(message) = str_field(inner, "message") {
                    return Some(message.to_string());
                }
                if let Some(code) = str_field(inner, "code") {
                    return Some(format!("Error code: {}", code));
                }
            }
            _ => {}
        }
    }

    if let Some(Value::Object(data)) = map.get("data") {
        if let Some(message) = str_field(data, "message") {
            return Some(message.to_string());
        }
        if let Some(Value::Object(inner)) = data.get("error") {
            if let Some(message) = str_field(inner, "message") {
                return Some(message.to_string());
            }
        }
    }

    str_field(map, "statusText").map(str::to_string)
}

fn str_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

// `serde_json::Value` is an owned tree, so cycles cannot occur; the fallback
// still covers any serializer failure.
fn serialize_details(body: &Value) -> String {
    match serde_json::to_string(body) {
        Ok(text) => format!("{}{}", ERROR_DETAILS_PREFIX, text),
        Err(_) => UNKNOWN_ERROR_OCCURRED.to_string(),
    }
}
