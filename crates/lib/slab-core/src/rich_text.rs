//! Plain-text extraction for Quill delta content.

use serde_json::Value;
use slab_model::models::Delta;
use tracing::warn;

/// Extracts readable text from a post or comment `content` field.
///
/// `content` may be a decoded delta, or JSON text encoding one. String inserts
/// are concatenated in order and the result is trimmed; embeds are dropped.
/// Input that does not decode as a delta is returned as raw text, so this
/// never fails.
#[must_use]
pub fn extract_plain_text(content: Option<&Value>) -> String {
    match content {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(raw)) if raw.is_empty() => String::new(),
        Some(Value::String(raw)) => match serde_json::from_str::<Delta>(raw) {
            Ok(delta) => delta.plain_text(),
            Err(err) => {
                warn!(error = %err, "content is not a delta document; using raw text");
                raw.clone()
            }
        },
        Some(value) => match serde_json::from_value::<Delta>(value.clone()) {
            Ok(delta) => delta.plain_text(),
            Err(err) => {
                warn!(error = %err, "content is not a delta document; using raw text");
                value.to_string()
            }
        },
    }
}
