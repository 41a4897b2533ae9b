//! rip.ie directory client
//!
//! Fixed GraphQL operations against the rip.ie death-notice directory,
//! the HTTP client that carries them, and the static request configuration.
//!
//! ## Quick start
//!
//! ```no_run
//! use ripie::graphql::{GraphqlEndpoint, RipIeClient};
//! use serde_json::json;
//!
//! let client = RipIeClient::new()?;
//! let request = ripie::operations::find("get_counties")
//!     .expect("known tool")
//!     .request(&json!({}))?;
//! let body = client.execute(&request);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod graphql;
pub mod network;
pub mod operations;
pub mod queries;
