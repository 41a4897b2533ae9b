//! Tool dispatch
//!
//! A tool call is a lookup in the operation table, a variable binding and a
//! single GraphQL round trip. Whatever the endpoint returns is pretty-printed
//! into the result envelope.

use serde_json::Value;

use ripie::error::ToolError;
use ripie::graphql::GraphqlEndpoint;
use ripie::operations;

use super::types::{OutboundMessage, ToolResult};

/// Dispatch a tool call to its GraphQL operation
///
/// Transport failures are not errors here: they come back as an `errors`
/// document inside a normal result.
pub fn call_tool(
    name: &str,
    arguments: &Value,
    endpoint: &dyn GraphqlEndpoint,
) -> Result<ToolResult, ToolError> {
    let operation =
        operations::find(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
    let request = operation.request(arguments)?;

    tracing::debug!(tool = name, operation = operation.operation_name, "dispatching");
    let body = endpoint.execute(&request);

    Ok(ToolResult::text(pretty(&body)))
}

/// Run a tool call and wrap the outcome as a `tool_output` reply
///
/// `tool_name` is echoed back as given, even when it isn't a string.
pub fn tool_output(
    tool_name: Value,
    call_id: Value,
    arguments: &Value,
    endpoint: &dyn GraphqlEndpoint,
) -> OutboundMessage {
    let name = match &tool_name {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let (result, is_error) = match call_tool(&name, arguments, endpoint) {
        Ok(result) => (result, false),
        Err(e) => {
            tracing::debug!(tool = %name, error = %e, "tool call rejected");
            (
                ToolResult::text(format!("Error executing tool {name}: {e}")),
                true,
            )
        }
    };
    OutboundMessage::ToolOutput {
        tool_name,
        call_id,
        is_error,
        result,
    }
}

fn pretty(body: &Value) -> String {
    // Serializing a Value can't fail: its map keys are always strings
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}
