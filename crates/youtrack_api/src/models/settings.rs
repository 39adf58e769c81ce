//! App-backend payloads: per-user settings and the link template.

use serde::Deserialize;
use serde_json::Value;

/// Response body of the `user-settings` endpoint. The stored settings are
/// kept as raw JSON; the widget layer owns their concrete shape.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UserSettingsPayload {
    #[serde(default)]
    pub settings: Option<Value>,
}

/// Response body of the `get-template` endpoint.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LinkTemplatePayload {
    #[serde(default)]
    pub template: Option<String>,
}

/// Unwraps the `{"result": ...}` envelope some host proxies put around app
/// responses, passing other payloads through unchanged.
pub fn unwrap_result(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("result") => {
            map.remove("result").unwrap_or(Value::Null)
        }
        other => other,
    }
}
