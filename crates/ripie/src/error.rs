//! Error types for the rip.ie client
//!
//! Transport failures and tool dispatch failures are kept apart: the former
//! end up inside a tool's result payload, the latter are reported as a failed
//! tool call.

use thiserror::Error;

/// Transport-level error talking to the GraphQL API
#[derive(Error, Debug)]
pub enum RipError {
    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for the rip.ie client
pub type Result<T> = std::result::Result<T, RipError>;

/// Failure to turn a tool invocation into a GraphQL request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("arguments must be a JSON object, got {0}")]
    InvalidArguments(&'static str),
}

fn friendly_network_error(e: &reqwest::Error) -> String {
    if let Some(status) = e.status() {
        return match e.url() {
            Some(url) => format!("HTTP status {status} for url {url}"),
            None => format!("HTTP status {status}"),
        };
    }
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return format!("Invalid response from server: {e}");
    }
    format!("Network error: {e}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connect_error() -> reqwest::Error {
        reqwest::blocking::Client::new()
            .post("http://invalid.invalid.invalid")
            .send()
            .unwrap_err()
    }

    #[test]
    fn test_network_error_names_host() {
        let err = RipError::from(connect_error());
        assert!(err.to_string().contains("invalid.invalid.invalid"));
    }

    #[test]
    fn test_config_error_display() {
        let err = RipError::Config("bad header".into());
        assert_eq!(err.to_string(), "Configuration error: bad header");
    }

    #[test]
    fn test_unknown_tool_display_contains_name() {
        let err = ToolError::UnknownTool("get_weather".into());
        assert_eq!(err.to_string(), "Unknown tool: get_weather");
    }

    #[test]
    fn test_missing_argument_display() {
        let err = ToolError::MissingArgument("countyId");
        assert_eq!(err.to_string(), "missing required argument 'countyId'");
    }

    #[test]
    fn test_invalid_arguments_display() {
        let err = ToolError::InvalidArguments("array");
        assert_eq!(err.to_string(), "arguments must be a JSON object, got array");
    }
}
