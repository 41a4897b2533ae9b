//! Network operations
//!
//! HTTP client shared by every GraphQL call.

pub mod client;

pub use client::HttpClient;
