//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::blocking::Client` that centralizes the
//! static rip.ie header set, USER_AGENT and timeout configuration. No
//! connect timeout is set beyond reqwest's own.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::api::{HEADERS, USER_AGENT};
use crate::config::network::READ_TIMEOUT_SECS;
use crate::error::{Result, RipError};

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a new client with the default rip.ie settings
    pub fn new() -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .default_headers(default_headers()?)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .build()?;
        Ok(Self { inner })
    }

    /// POST a JSON body and deserialize the JSON response
    ///
    /// Non-2xx responses are errors, whatever their body.
    pub fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(url, "POST");
        let resp = self.inner.post(url).json(body).send()?.error_for_status()?;
        let data = resp.json::<T>()?;
        Ok(data)
    }
}

fn default_headers() -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(HEADERS.len());
    for (name, value) in HEADERS {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RipError::Config(format!("header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| RipError::Config(format!("header {name}: {e}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}
