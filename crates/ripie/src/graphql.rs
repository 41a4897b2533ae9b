//! GraphQL request plumbing
//!
//! Every tool ends up as one `{operationName, variables, query}` POST to the
//! rip.ie endpoint. The response body is relayed as-is; only transport
//! failures are rewritten, into a GraphQL-shaped `errors` document.

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::api::GRAPHQL_URL;
use crate::error::{Result, RipError};
use crate::network::HttpClient;

/// Body of a GraphQL POST
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub operation_name: &'static str,
    pub variables: Value,
    pub query: &'static str,
}

/// Something that can answer GraphQL requests
pub trait GraphqlEndpoint: Send + Sync {
    /// Send the request and return the decoded response body
    fn post(&self, request: &GraphqlRequest) -> Result<Value>;

    /// Like [`post`](Self::post), but a transport failure becomes an
    /// `errors` document instead of an `Err`
    fn execute(&self, request: &GraphqlRequest) -> Value {
        match self.post(request) {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(operation = request.operation_name, error = %e, "GraphQL request failed");
                transport_failure(&e)
            }
        }
    }
}

/// The `errors` document reported in place of a response that never arrived
pub fn transport_failure(err: &RipError) -> Value {
    json!({
        "errors": [
            { "message": format!("HTTP Request failed: {err}") }
        ]
    })
}

/// The rip.ie GraphQL API
pub struct RipIeClient {
    client: HttpClient,
    endpoint: String,
}

impl RipIeClient {
    /// Create a client for the public rip.ie endpoint
    pub fn new() -> Result<Self> {
        Self::with_endpoint(GRAPHQL_URL)
    }

    /// Create a client for a custom endpoint (for testing or mirrors)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GraphqlEndpoint for RipIeClient {
    fn post(&self, request: &GraphqlRequest) -> Result<Value> {
        self.client.post_json(&self.endpoint, request)
    }
}
