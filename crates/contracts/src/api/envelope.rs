//! Нормализация ответа API
//!
//! The backend answers either `{ "data": <payload> }` or the bare payload.

use serde_json::Value;

/// Returns `body.data` when it is present and truthy, otherwise the whole body.
///
/// Falsy members (`null`, `false`, `0`, `""`) are treated as absent, so an
/// object like `{ "data": null, "meta": .. }` comes back unchanged.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if is_truthy(&data) => data,
            Some(data) => {
                map.insert("data".to_string(), data);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}

/// JSON truthiness as a browser would judge it; arrays and objects are
/// truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
