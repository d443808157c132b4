//! Tolerant accessors over model responses.
//!
//! The transport hands back untyped `serde_json::Value` bodies. Everything
//! the loop reads from a response goes through the helpers here, so missing
//! ids, missing output arrays, and unexpected item types all degrade to
//! "absent" instead of failing the conversation.

use serde_json::Value;

/// A model-issued function call, correlated to its eventual output by
/// `call_id`. Created fresh per response and consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    /// Raw JSON argument string, possibly malformed.
    pub arguments: String,
    pub call_id: String,
}

/// The response id, used as the next continuation token. Empty ids count as
/// absent.
pub fn response_id(response: &Value) -> Option<String> {
    match response.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => Some(id.to_string()),
        _ => None,
    }
}

/// All well-formed function calls in the response's `output` array, in
/// response order.
///
/// An entry is accepted only with a non-empty string `call_id` and string
/// `name`/`arguments` fields (a missing `arguments` defaults to `"{}"`, a
/// missing `name` to `""`). Malformed entries are dropped rather than
/// failing the turn.
pub fn function_calls(response: &Value) -> Vec<FunctionCall> {
    let Some(output) = response.get("output").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut calls = Vec::new();
    for item in output {
        if item.get("type").and_then(Value::as_str) != Some("function_call") {
            continue;
        }
        let name = match item.get("name") {
            None => "",
            Some(Value::String(s)) => s.as_str(),
            Some(_) => continue,
        };
        let arguments = match item.get("arguments") {
            None => "{}",
            Some(Value::String(s)) => s.as_str(),
            Some(_) => continue,
        };
        let call_id = match item.get("call_id") {
            Some(Value::String(s)) if !s.is_empty() => s.as_str(),
            _ => continue,
        };
        calls.push(FunctionCall {
            name: name.to_string(),
            arguments: arguments.to_string(),
            call_id: call_id.to_string(),
        });
    }
    calls
}

/// The response's final text.
///
/// Prefers a non-blank top-level `output_text`; otherwise concatenates the
/// text parts of `message` items in the `output` array, newline-separated and
/// trimmed. Returns an empty string when nothing is extractable.
pub fn output_text(response: &Value) -> String {
    if let Some(text) = response.get("output_text").and_then(Value::as_str) {
        if !text.trim().is_empty() {
            return text.to_string();
        }
    }

    let Some(output) = response.get("output").and_then(Value::as_array) else {
        return String::new();
    };

    let mut chunks: Vec<&str> = Vec::new();
    for item in output {
        if item.get("type").and_then(Value::as_str) != Some("message") {
            continue;
        }
        let Some(content) = item.get("content").and_then(Value::as_array) else {
            continue;
        };
        for part in content {
            match part.get("type").and_then(Value::as_str) {
                Some("output_text") | Some("text") => {}
                _ => continue,
            }
            if let Some(text) = part.get("text").and_then(Value::as_str) {
                chunks.push(text);
            }
        }
    }

    chunks.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_id_requires_non_empty_string() {
        assert_eq!(response_id(&json!({"id": "resp_1"})), Some("resp_1".into()));
        assert_eq!(response_id(&json!({"id": ""})), None);
        assert_eq!(response_id(&json!({"id": 42})), None);
        assert_eq!(response_id(&json!({})), None);
    }

    #[test]
    fn test_function_calls_in_response_order() {
        let response = json!({
            "output": [
                {"type": "function_call", "name": "a", "arguments": "{}", "call_id": "c1"},
                {"type": "message", "content": []},
                {"type": "function_call", "name": "b", "arguments": "{\"x\":1}", "call_id": "c2"},
            ]
        });
        let calls = function_calls(&response);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].name, "a");
        assert_eq!(calls[1].call_id, "c2");
    }

    #[test]
    fn test_malformed_function_calls_are_dropped() {
        let response = json!({
            "output": [
                // empty call_id
                {"type": "function_call", "name": "a", "arguments": "{}", "call_id": ""},
                // non-string arguments
                {"type": "function_call", "name": "a", "arguments": {"x": 1}, "call_id": "c1"},
                // missing call_id
                {"type": "function_call", "name": "a", "arguments": "{}"},
                // missing arguments defaults to "{}"
                {"type": "function_call", "name": "a", "call_id": "c2"},
                // missing name defaults to ""
                {"type": "function_call", "arguments": "{}", "call_id": "c3"},
            ]
        });
        let calls = function_calls(&response);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].arguments, "{}");
        assert_eq!(calls[0].call_id, "c2");
        assert_eq!(calls[1].name, "");
    }

    #[test]
    fn test_function_calls_tolerate_missing_output() {
        assert!(function_calls(&json!({})).is_empty());
        assert!(function_calls(&json!({"output": "nope"})).is_empty());
    }

    #[test]
    fn test_output_text_prefers_top_level_field() {
        let response = json!({"output_text": "direct", "output": [
            {"type": "message", "content": [{"type": "output_text", "text": "indirect"}]}
        ]});
        assert_eq!(output_text(&response), "direct");
    }

    #[test]
    fn test_output_text_scans_message_items_when_blank() {
        let response = json!({"output_text": "  ", "output": [
            {"type": "reasoning", "content": [{"type": "text", "text": "skip me"}]},
            {"type": "message", "content": [
                {"type": "output_text", "text": "first"},
                {"type": "text", "text": "second"},
                {"type": "refusal", "refusal": "nope"},
            ]},
        ]});
        assert_eq!(output_text(&response), "first\nsecond");
    }

    #[test]
    fn test_output_text_empty_when_nothing_extractable() {
        assert_eq!(output_text(&json!({"output": []})), "");
        assert_eq!(output_text(&json!({})), "");
    }
}
