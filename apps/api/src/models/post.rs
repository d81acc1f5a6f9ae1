use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/generate`.
///
/// Every field is optional on the wire. A missing or falsy topic is rejected
/// by the handler; missing platform/tone fall back like any unknown label.
#[derive(Debug, Deserialize)]
pub struct GenerationRequest {
    /// Kept untyped so a falsy non-string (`0`, `false`) reads as missing rather than malformed.
    pub topic: Option<Value>,
    pub platform: Option<String>,
    pub tone: Option<String>,
}

impl GenerationRequest {
    /// The topic value, or `None` when it is absent or falsy (`null`, `false`, `0`, `""`).
    pub fn present_topic(&self) -> Option<&Value> {
        match self.topic.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other),
        }
    }
}

/// A generated post. Immutable once produced.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedPost {
    /// The platform label exactly as requested, omitted when the request had none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub content: String,
    pub hashtags: Vec<String>,
}
