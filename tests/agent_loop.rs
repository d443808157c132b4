//! End-to-end tests of the execution loop against a scripted model API.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use discovery_agent::error::Error;
use discovery_agent::{
    Agent, AgentConfig, ResponsesApi, ResponsesRequest, Tool, ToolError, ToolRegistry,
};

/// Plays back a fixed sequence of responses, recording every request.
struct ScriptedApi {
    responses: Mutex<VecDeque<Value>>,
    requests: Mutex<Vec<Value>>,
}

impl ScriptedApi {
    fn new(responses: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResponsesApi for ScriptedApi {
    async fn create_response(&self, request: &ResponsesRequest) -> discovery_agent::Result<Value> {
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted"))
    }
}

/// Echoes its argument object back, for observing executor plumbing.
struct EchoTool;

#[async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echo the arguments back."
    }

    fn parameters(&self) -> Value {
        json!({"type": "object", "properties": {}, "additionalProperties": false})
    }

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        Ok(json!({ "echo": Value::Object(args.clone()) }))
    }
}

fn test_agent(api: Arc<ScriptedApi>) -> Agent {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(EchoTool));
    let config = AgentConfig::new("https://docs.test/api", "gpt-5.2", "test instructions");
    Agent::with_registry(config, registry, api)
}

fn function_call(name: &str, call_id: &str) -> Value {
    json!({"type": "function_call", "name": name, "arguments": "{}", "call_id": call_id})
}

#[tokio::test]
async fn test_n_tool_rounds_issue_n_plus_one_requests() {
    let api = ScriptedApi::new(vec![
        json!({"id": "resp_1", "output": [function_call("echo", "c1")]}),
        json!({"id": "resp_2", "output": [function_call("echo", "c2")]}),
        json!({"id": "resp_3", "output_text": "done"}),
    ]);
    let mut agent = test_agent(api.clone());

    let answer = agent.ask("go").await.unwrap();
    assert_eq!(answer, "done");

    let requests = api.requests();
    assert_eq!(requests.len(), 3);

    // First turn: raw user string, no continuation token, schemas attached.
    assert_eq!(requests[0]["input"], json!("go"));
    assert!(requests[0].get("previous_response_id").is_none());
    assert_eq!(requests[0]["tools"][0]["name"], json!("echo"));
    assert_eq!(requests[0]["instructions"], json!("test instructions"));

    // Each continuation carries the preceding response's id and the batched
    // tool outputs in response order.
    assert_eq!(requests[1]["previous_response_id"], json!("resp_1"));
    assert_eq!(
        requests[1]["input"],
        json!([{"type": "function_call_output", "call_id": "c1", "output": "{\"echo\":{}}"}])
    );
    assert_eq!(requests[2]["previous_response_id"], json!("resp_2"));
}

#[tokio::test]
async fn test_multiple_calls_batched_in_response_order() {
    let api = ScriptedApi::new(vec![
        json!({"id": "resp_1", "output": [
            function_call("echo", "c1"),
            function_call("missing", "c2"),
            function_call("echo", "c3"),
        ]}),
        json!({"id": "resp_2", "output_text": "ok"}),
    ]);
    let mut agent = test_agent(api.clone());

    agent.ask("go").await.unwrap();

    let requests = api.requests();
    assert_eq!(requests.len(), 2);
    let outputs = requests[1]["input"].as_array().unwrap();
    assert_eq!(outputs.len(), 3);
    assert_eq!(outputs[0]["call_id"], json!("c1"));
    assert_eq!(outputs[1]["call_id"], json!("c2"));
    assert_eq!(outputs[2]["call_id"], json!("c3"));
    // The unknown tool degraded to an error outcome instead of failing ask.
    assert_eq!(
        outputs[1]["output"],
        json!("{\"error\":\"unknown tool: missing\"}")
    );
}

#[tokio::test]
async fn test_continuation_token_spans_asks_and_reset_clears_it() {
    let api = ScriptedApi::new(vec![
        json!({"id": "resp_1", "output_text": "first"}),
        json!({"id": "resp_2", "output_text": "second"}),
        json!({"id": "resp_3", "output_text": "third"}),
    ]);
    let mut agent = test_agent(api.clone());

    agent.ask("one").await.unwrap();
    agent.ask("two").await.unwrap();
    agent.reset();
    agent.ask("three").await.unwrap();

    let requests = api.requests();
    assert!(requests[0].get("previous_response_id").is_none());
    assert_eq!(requests[1]["previous_response_id"], json!("resp_1"));
    // After reset the next request carries no continuation token.
    assert!(requests[2].get("previous_response_id").is_none());
}

#[tokio::test]
async fn test_final_response_without_id_keeps_prior_token() {
    let api = ScriptedApi::new(vec![
        json!({"id": "resp_1", "output_text": "first"}),
        json!({"output_text": "second"}),
        json!({"id": "resp_3", "output_text": "third"}),
    ]);
    let mut agent = test_agent(api.clone());

    agent.ask("one").await.unwrap();
    agent.ask("two").await.unwrap();
    agent.ask("three").await.unwrap();

    let requests = api.requests();
    assert_eq!(requests[1]["previous_response_id"], json!("resp_1"));
    // The id-less second response established no continuity.
    assert_eq!(requests[2]["previous_response_id"], json!("resp_1"));
}

#[tokio::test]
async fn test_empty_response_returns_placeholder() {
    let api = ScriptedApi::new(vec![json!({"id": "resp_1", "output": [], "output_text": ""})]);
    let mut agent = test_agent(api);

    let answer = agent.ask("go").await.unwrap();
    assert_eq!(answer, "[]");
}

#[tokio::test]
async fn test_malformed_call_entries_do_not_start_a_tool_round() {
    // Every entry is malformed, so the response counts as final.
    let api = ScriptedApi::new(vec![json!({"id": "resp_1", "output": [
        {"type": "function_call", "name": "echo", "arguments": "{}", "call_id": ""},
        {"type": "function_call", "name": 7, "arguments": "{}", "call_id": "c1"},
        {"type": "message", "content": [{"type": "output_text", "text": "fallback"}]},
    ]})]);
    let mut agent = test_agent(api.clone());

    let answer = agent.ask("go").await.unwrap();
    assert_eq!(answer, "fallback");
    assert_eq!(api.requests().len(), 1);
}

#[tokio::test]
async fn test_round_cap_yields_distinct_error() {
    let api = ScriptedApi::new(vec![
        json!({"id": "resp_1", "output": [function_call("echo", "c1")]}),
        json!({"id": "resp_2", "output": [function_call("echo", "c2")]}),
        json!({"id": "resp_3", "output": [function_call("echo", "c3")]}),
    ]);
    let mut agent = test_agent(api.clone()).with_max_tool_rounds(1);

    let err = agent.ask("go").await.unwrap_err();
    assert!(matches!(err, Error::ToolRoundsExceeded { limit: 1 }));
    assert_eq!(api.requests().len(), 2);
}
