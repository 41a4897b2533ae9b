//! Wire types
//!
//! One JSON document per line in each direction, tagged by `type`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    Ping,
    ToolCode {
        /// Usually a string; anything else is answered as an unknown tool
        #[serde(rename = "toolName")]
        tool_name: Value,
        arguments: Value,
        /// Opaque; echoed back untouched
        #[serde(rename = "callId")]
        call_id: Value,
    },
    /// Any other `type`; ignored without a reply
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    Pong,
    ToolOutput {
        #[serde(rename = "toolName")]
        tool_name: Value,
        #[serde(rename = "callId")]
        call_id: Value,
        #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
        is_error: bool,
        result: ToolResult,
    },
}

/// Content block in a tool result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResultContent {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub text: String,
}

/// Result envelope shared by every tool, success or failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolResultContent>,
}

impl ToolResult {
    pub fn text(msg: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text",
                text: msg.into(),
            }],
        }
    }
}
