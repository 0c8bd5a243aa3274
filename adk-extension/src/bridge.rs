//! Conversions between extension tools and rmcp's MCP model types.

use adk_core::{Result, Tool};
use rmcp::model::{CallToolResult, Content, JsonObject, Tool as McpTool};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Describes `tool` for `tools/list`.
pub fn tool_to_mcp(tool: &dyn Tool) -> McpTool {
    let schema = tool.parameters_schema().unwrap_or_else(|| Value::Object(Map::new()));
    McpTool::new(
        tool.name().to_string(),
        tool.description().to_string(),
        Arc::new(value_to_object(schema)),
    )
}

/// MCP requires the input schema to be an object schema.
fn value_to_object(value: Value) -> JsonObject {
    match value {
        Value::Object(mut map) => {
            map.entry("type").or_insert_with(|| Value::String("object".to_string()));
            map
        }
        _ => {
            let mut map = Map::new();
            map.insert("type".to_string(), Value::String("object".to_string()));
            map
        }
    }
}

/// Text shown to the client for a tool's output: strings verbatim,
/// anything else as pretty-printed JSON.
pub fn value_to_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => serde_json::to_string_pretty(&other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Turns a tool outcome into a `tools/call` result. Failures become error
/// results carrying the failure text, not protocol errors.
pub fn output_to_call_result(output: Result<Value>) -> CallToolResult {
    match output {
        Ok(value) => CallToolResult::success(vec![Content::text(value_to_text(value))]),
        Err(err) => CallToolResult::error(vec![Content::text(err.detail())]),
    }
}

/// Arguments of a `tools/call` request as a JSON object; absent means `{}`.
pub fn arguments_to_value(arguments: Option<JsonObject>) -> Value {
    Value::Object(arguments.unwrap_or_default())
}
