//! Line-delimited JSON stdio server
//!
//! Reads one JSON message per line from stdin, dispatches it, and writes at
//! most one reply line to stdout. Strictly sequential: a tool call, network
//! round trip included, finishes before the next line is read.
//!
//! Nothing but replies ever goes to stdout. Bad input is reported through
//! `tracing`, which writes to stderr.

use std::io::{self, BufRead, Write};

use serde_json::Value;

use ripie::graphql::GraphqlEndpoint;

use super::tools;
use super::types::{InboundMessage, OutboundMessage};

/// Run the server on stdin/stdout until stdin closes
pub fn run(endpoint: &dyn GraphqlEndpoint) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(stdin.lock(), stdout.lock(), endpoint)
}

/// Serve every line of `reader`, writing replies to `writer`
///
/// Returns `Ok` at end of input. Only a failure to read input or to write
/// a reply ends the loop early.
pub fn serve<R, W>(mut reader: R, mut writer: W, endpoint: &dyn GraphqlEndpoint) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            tracing::debug!("input closed");
            return Ok(());
        }

        let message: Value = match serde_json::from_slice(&line) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!("Invalid JSON input: {e}");
                continue;
            }
        };

        match handle_message(message, endpoint) {
            Ok(Some(reply)) => write_message(&mut writer, &reply)?,
            Ok(None) => {}
            Err(e) => tracing::error!("Unhandled error: {e}"),
        }
    }
}

/// Turn one parsed message into its reply
///
/// An `Err` means the message itself was unusable (no `type`, missing
/// `toolName`/`arguments`/`callId`); such messages get no reply at all.
/// Messages of an unrecognized `type` are dropped quietly.
fn handle_message(
    message: Value,
    endpoint: &dyn GraphqlEndpoint,
) -> Result<Option<OutboundMessage>, serde_json::Error> {
    let reply = match serde_json::from_value::<InboundMessage>(message)? {
        InboundMessage::Ping => OutboundMessage::Pong,
        InboundMessage::ToolCode {
            tool_name,
            arguments,
            call_id,
        } => tools::tool_output(tool_name, call_id, &arguments, endpoint),
        InboundMessage::Other => {
            tracing::debug!("ignoring message of unknown type");
            return Ok(None);
        }
    };
    Ok(Some(reply))
}

fn write_message<W: Write>(writer: &mut W, message: &OutboundMessage) -> io::Result<()> {
    // Serialize first so a failure can't leave half a line on the wire
    let mut buf = serde_json::to_vec(message)?;
    buf.push(b'\n');
    writer.write_all(&buf)?;
    writer.flush()
}
