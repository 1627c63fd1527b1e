use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope every provider endpoint wraps its payload in.
///
/// The provider reports request problems (bad key, unknown league, quota)
/// inside `errors` while still answering with HTTP 200. `errors` is an empty
/// array when all is well and an object keyed by field otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub errors: Value,
    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
}

impl<T> ApiEnvelope<T> {
    /// Collects the provider-reported error messages, if any.
    pub fn error_messages(&self) -> Vec<String> {
        match &self.errors {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| match value {
                    Value::String(message) => format!("{key}: {message}"),
                    other => format!("{key}: {other}"),
                })
                .collect(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(message) => message.clone(),
                    other => other.to_string(),
                })
                .collect(),
            Value::String(message) if !message.is_empty() => vec![message.clone()],
            _ => Vec::new(),
        }
    }
}

/// An `{ "id": .., "name": .. }` reference used for teams and players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
}

impl NamedRef {
    /// The name, or an empty string when the provider sent none.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
