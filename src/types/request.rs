//! Request body types for the Responses-style model API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One model request.
///
/// `previous_response_id` is the conversation continuation token; it is
/// omitted from the wire entirely when absent.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub instructions: String,
    pub input: RequestInput,
    pub tools: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_response_id: Option<String>,
}

/// Request input: a raw string on the first turn of an `ask`, an ordered list
/// of tool outputs on continuation turns.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestInput {
    Text(String),
    ToolOutputs(Vec<FunctionCallOutput>),
}

/// The record fed back to the model for one executed function call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCallOutput {
    #[serde(rename = "type")]
    pub kind: String,
    pub call_id: String,
    pub output: String,
}

impl FunctionCallOutput {
    pub fn new(call_id: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            kind: "function_call_output".to_string(),
            call_id: call_id.into(),
            output: output.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_previous_response_id_omitted_when_absent() {
        let request = ResponsesRequest {
            model: "gpt-5.2".into(),
            instructions: "be brief".into(),
            input: RequestInput::Text("hello".into()),
            tools: vec![],
            previous_response_id: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("previous_response_id").is_none());
        assert_eq!(value["input"], json!("hello"));
    }

    #[test]
    fn test_tool_outputs_serialize_as_tagged_records() {
        let request = ResponsesRequest {
            model: "gpt-5.2".into(),
            instructions: "be brief".into(),
            input: RequestInput::ToolOutputs(vec![FunctionCallOutput::new("call_1", "{}")]),
            tools: vec![],
            previous_response_id: Some("resp_1".into()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["previous_response_id"], json!("resp_1"));
        assert_eq!(
            value["input"],
            json!([{"type": "function_call_output", "call_id": "call_1", "output": "{}"}])
        );
    }
}
