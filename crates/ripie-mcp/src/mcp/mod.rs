//! Tool server
//!
//! Line-delimited JSON over stdin/stdout: `ping` and `tool_code` messages in,
//! `pong` and `tool_output` messages out. No async runtime.

pub mod server;
pub mod tools;
pub mod types;
